use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A property value that couldn't be parsed.
///
/// Only the string based constructors, like
/// [`DropdownProps::from_props`](crate::dropdown::DropdownProps::from_props),
/// can fail. Typed construction is infallible.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("`{key}` expects `true` or `false`, got `{value}`")]
    InvalidBool { key: String, value: String },
    #[error("`menuAlign` expects `none`, `left` or `right`, got `{0}`")]
    InvalidMenuAlign(String),
    #[error("`size` expects `normal`, `large` or `small`, got `{0}`")]
    InvalidSize(String),
}
