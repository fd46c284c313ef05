use super::{hoist, PlacementError, Settings, Unit};
use crate::jvm::{Class, ClassAccessFlags};

/// Make a fresh root class
///
/// The class is the final backstop for bubbling: anything it won't hold is an error.
pub fn new_class(name: impl Into<String>, access_flags: ClassAccessFlags) -> Class {
    Class::new(name, access_flags)
}

/// Runs build scripts against root classes
#[derive(Clone, Debug, Default)]
pub struct Assembler {
    settings: Settings,
}

impl Assembler {
    pub fn new(settings: Settings) -> Assembler {
        Assembler { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Place every unit of the script somewhere in `root`
    ///
    /// Fails if any component bubbles past the class. In that case the partially assembled tree
    /// is dropped and the error lists every component that found no home, in declaration order.
    pub fn build(&self, root: Class, units: Vec<Unit>) -> Result<Class, PlacementError> {
        log::debug!(
            "Building class `{}` from {} unit(s)",
            root.name,
            units.len()
        );
        self.assemble(root, units)
    }

    /// Same as [`Assembler::build`], but on a class that already has contents
    ///
    /// New components are appended after whatever each slot already holds.
    pub fn edit(&self, existing: Class, units: Vec<Unit>) -> Result<Class, PlacementError> {
        log::debug!(
            "Editing class `{}` ({} method(s), {} field(s), {} constant(s)) with {} unit(s)",
            existing.name,
            existing.methods.len(),
            existing.fields.len(),
            existing.constant_pool.len(),
            units.len()
        );
        self.assemble(existing, units)
    }

    fn assemble(&self, root: Class, units: Vec<Unit>) -> Result<Class, PlacementError> {
        let (class, unplaced) = hoist(root, units, &self.settings);
        if unplaced.is_empty() {
            log::debug!("Finished class `{}`", class.name);
            Ok(class)
        } else {
            Err(PlacementError {
                class_name: class.name,
                unplaced,
            })
        }
    }
}

/// [`Assembler::build`] with default settings
pub fn build(root: Class, units: Vec<Unit>) -> Result<Class, PlacementError> {
    Assembler::default().build(root, units)
}

/// [`Assembler::edit`] with default settings
pub fn edit(existing: Class, units: Vec<Unit>) -> Result<Class, PlacementError> {
    Assembler::default().edit(existing, units)
}
