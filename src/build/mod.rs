//! Placing components into a class tree
//!
//! A build script is a sequence of [`Unit`]s. Each component in it goes into the innermost frame
//! (counting outwards from where it was declared) that both has the slot the component wants and
//! is one of its allowed parent scopes. So a constant declared in the middle of a method's code
//! ends up in the class constant pool, while the instructions around it stay in the code.
//!
//! ```
//! use classbuild::build::{build, new_class};
//! use classbuild::jvm::*;
//! use classbuild::units;
//!
//! let class = build(
//!     new_class("Answer", ClassAccessFlags::PUBLIC),
//!     units![
//!         method("get", Some(FieldType::int()), vec![], MethodAccessFlags::STATIC).with(units![
//!             attr::code(1, 0).with(units![
//!                 constant("answer", 42, vec![]),
//!                 op::ldc("answer"),
//!                 op::ireturn(),
//!             ]),
//!         ]),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(class.constant_pool.len(), 1);
//! assert_eq!(class.method("get").unwrap().code().unwrap().ops().len(), 2);
//! ```

mod assembly;
mod errors;
mod hoist;
mod placement;
mod settings;

pub use assembly::*;
pub use errors::*;
pub use hoist::*;
pub use placement::*;
pub use settings::*;
