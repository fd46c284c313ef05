use crate::jvm::{Component, Scope};
use std::fmt;
use thiserror::Error;

/// Components that were never placed anywhere, up to and including the root class
///
/// There is no partial success: when this is returned, the attempted tree is gone.
#[derive(Error, Debug)]
#[error(
    "could not place {} component(s) in class `{class_name}`: {}",
    .unplaced.len(),
    list(.unplaced)
)]
pub struct PlacementError {
    /// Name of the root class
    pub class_name: String,

    /// Every unplaced component, in declaration order
    pub unplaced: Vec<Unplaced>,
}

impl PlacementError {
    /// Scopes of the unplaced components
    pub fn scopes(&self) -> Vec<Scope> {
        self.unplaced.iter().map(|u| u.component.scope()).collect()
    }
}

fn list(unplaced: &[Unplaced]) -> String {
    unplaced
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Component that has not found a home yet
#[derive(Clone, PartialEq, Debug)]
pub struct Unplaced {
    pub component: Component,

    /// Frames the component was offered to, innermost first (empty unless
    /// [`super::Settings::record_attempts`] is set)
    pub attempts: Vec<Attempt>,
}

impl Unplaced {
    pub fn new(component: Component) -> Unplaced {
        Unplaced {
            component,
            attempts: vec![],
        }
    }
}

impl fmt::Display for Unplaced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.component)?;
        if !self.attempts.is_empty() {
            f.write_str(", rejected by ")?;
            for (i, attempt) in self.attempts.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", attempt)?;
            }
        }
        Ok(())
    }
}

/// A frame that turned a component down
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Attempt {
    pub scope: Scope,
    pub reason: Rejection,
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.scope, self.reason)
    }
}

/// Why a frame cannot hold a component
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Rejection {
    /// The frame has no slot with the component's collection name
    MissingSlot,

    /// The frame's scope is not one of the component's parent scopes
    ScopeMismatch,

    MissingSlotAndScopeMismatch,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rejection::MissingSlot => "missing slot",
            Rejection::ScopeMismatch => "scope mismatch",
            Rejection::MissingSlotAndScopeMismatch => "missing slot and scope mismatch",
        })
    }
}
