//! Open and close transitions.
//!
//! The dropdown doesn't animate anything itself. It tells a [`Transition`]
//! when the menu starts opening or closing, and the transition reports back
//! once it's done.

/// The direction of a transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Opening,
    Closing,
}

pub trait Transition {
    /// Run the transition for `phase`, calling `done` when it completes.
    fn run(&self, phase: Phase, done: Box<dyn FnOnce()>);
}

/// A transition that completes as soon as it starts.
#[derive(Copy, Clone, Default)]
pub struct Immediate;

impl Transition for Immediate {
    fn run(&self, _phase: Phase, done: Box<dyn FnOnce()>) {
        done()
    }
}

/// Turns a stream of open states into transitions.
///
/// The first state is the initial one, so it doesn't start a transition.
/// Neither does a state that's the same as the last.
#[derive(Default)]
pub struct TransitionTracker {
    last: Option<bool>,
}

impl TransitionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, open: bool) -> Option<Phase> {
        let last = self.last.replace(open)?;

        match (last, open) {
            (false, true) => Some(Phase::Opening),
            (true, false) => Some(Phase::Closing),
            _ => None,
        }
    }
}
