use super::placement::{check, try_attach};
use super::{Attempt, Settings, Unplaced};
use crate::jvm::{Component, Container, Op};

/// One step of a build script
#[derive(Clone, PartialEq, Debug)]
pub enum Unit {
    /// Does nothing
    Nil,

    /// Shorthand for a `label` pseudo-instruction with this name
    Placeholder(String),

    /// Component to place
    Component(Component),

    /// Units declared one structural level below an already processed component
    ///
    /// These are hoisted against the current frame and anything they leave over bubbles out
    /// (one element at a time, not as a block).
    Nested(Vec<Unit>),

    /// Component along with the units declared inside it
    ///
    /// The inner units are hoisted against the component first. The component is then placed
    /// like any other, followed by whatever the inner units left over.
    Block(Component, Vec<Unit>),

    /// Component which already failed to attach further in, together with its attempt trail
    Unplaced(Unplaced),
}

impl Unit {
    pub fn placeholder(name: impl Into<String>) -> Unit {
        Unit::Placeholder(name.into())
    }
}

impl From<Component> for Unit {
    fn from(component: Component) -> Unit {
        Unit::Component(component)
    }
}

/// String literals in build scripts are label placeholders
impl From<&str> for Unit {
    fn from(name: &str) -> Unit {
        Unit::Placeholder(name.to_owned())
    }
}

impl From<String> for Unit {
    fn from(name: String) -> Unit {
        Unit::Placeholder(name)
    }
}

impl From<Vec<Unit>> for Unit {
    fn from(units: Vec<Unit>) -> Unit {
        Unit::Nested(units)
    }
}

impl From<Unplaced> for Unit {
    fn from(unplaced: Unplaced) -> Unit {
        Unit::Unplaced(unplaced)
    }
}

impl<T: Into<Unit>> From<Option<T>> for Unit {
    fn from(unit: Option<T>) -> Unit {
        unit.map_or(Unit::Nil, Into::into)
    }
}

impl Component {
    /// Declare units inside this component
    ///
    /// ```
    /// use classbuild::jvm::*;
    /// use classbuild::units;
    ///
    /// let code = attr::code(1, 1).with(units![
    ///     "top",
    ///     op::iinc(0, 1),
    ///     op::goto("top"),
    /// ]);
    /// # let _ = code;
    /// ```
    pub fn with(self, units: Vec<Unit>) -> Unit {
        Unit::Block(self, units)
    }
}

/// Build a `Vec<Unit>`, converting each element with `Unit::from`
///
/// Components, strings (label placeholders), options (`None` is a no-op), nested vectors of
/// units and blocks made with [`Component::with`] can all be mixed.
#[macro_export]
macro_rules! units {
    ($($unit:expr),* $(,)?) => {
        vec![$($crate::build::Unit::from($unit)),*]
    };
}

/// Thread a build script through `top`, placing every component into the innermost frame that
/// accepts it
///
/// Units are processed left to right. Anything that fits neither `top` nor any frame nested
/// inside it comes back as the residue, in order, for the caller to retry one level further out.
pub fn hoist<C: Container>(top: C, units: Vec<Unit>, settings: &Settings) -> (C, Vec<Unplaced>) {
    let mut residue = vec![];
    let current = units.into_iter().fold(top, |current, unit| {
        hoist_unit(current, unit, settings, &mut residue)
    });
    (current, residue)
}

fn hoist_unit<C: Container>(
    current: C,
    unit: Unit,
    settings: &Settings,
    residue: &mut Vec<Unplaced>,
) -> C {
    match unit {
        Unit::Nil => current,
        Unit::Placeholder(name) => {
            hoist_unit(current, Unit::Component(Op::label(name)), settings, residue)
        }
        Unit::Component(component) => offer(current, Unplaced::new(component), settings, residue),
        Unit::Unplaced(unplaced) => offer(current, unplaced, settings, residue),
        Unit::Nested(units) => {
            let (current, nested_residue) = hoist(current, units, settings);
            residue.extend(nested_residue);
            current
        }
        Unit::Block(component, body) => {
            let (descriptor, frame) = component.into_parts();
            let (frame, nested_residue) = hoist(frame, body, settings);
            if !nested_residue.is_empty() {
                log::debug!(
                    "{} component(s) bubble out of {}",
                    nested_residue.len(),
                    descriptor.scope
                );
            }

            let mut units = Vec::with_capacity(nested_residue.len() + 1);
            units.push(Unit::Component(Component::from_parts(descriptor, frame)));
            units.extend(nested_residue.into_iter().map(Unit::Unplaced));
            hoist_unit(current, Unit::Nested(units), settings, residue)
        }
    }
}

/// Offer a component to a single frame, adding it to the residue if it doesn't fit
fn offer<C: Container>(
    current: C,
    unplaced: Unplaced,
    settings: &Settings,
    residue: &mut Vec<Unplaced>,
) -> C {
    let Unplaced {
        component,
        mut attempts,
    } = unplaced;

    let (current, rejected) = try_attach(current, component);
    if let Some(component) = rejected {
        if settings.record_attempts {
            if let Err(reason) = check(&current, component.descriptor()) {
                attempts.push(Attempt {
                    scope: current.scope(),
                    reason,
                });
            }
        }
        residue.push(Unplaced {
            component,
            attempts,
        });
    }
    current
}
