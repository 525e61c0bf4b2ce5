use silkenweb::{node::Node, prelude::ParentElement};

/// Caller supplied content, such as a dropdown title or an item's label.
pub enum Content {
    Text(String),
    Node(Node),
    Nodes(Vec<Node>),
}

impl Content {
    /// Empty text or an empty node list.
    ///
    /// A single node is never empty, as we can't see inside it.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Node(_) => false,
            Self::Nodes(nodes) => nodes.is_empty(),
        }
    }

    /// Add the content as children of `parent`.
    pub fn fill<P: ParentElement>(self, parent: P) -> P {
        match self {
            Self::Text(text) => parent.text(text),
            Self::Node(node) => parent.child(node),
            Self::Nodes(nodes) => parent.children(nodes),
        }
    }
}

/// `true` if `content` is supplied and isn't empty.
pub fn is_present(content: Option<&Content>) -> bool {
    content.is_some_and(|content| !content.is_empty())
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Vec<Node>> for Content {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Nodes(nodes)
    }
}
