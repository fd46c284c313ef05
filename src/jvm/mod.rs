//! In-memory representation of JVM classes
//!
//! The tree is made of frames: a root [`Class`], and then [`Method`]s, [`Field`]s,
//! [`Attribute`]s, instructions ([`Op`]), constants ([`Constant`]) and attribute table rows
//! ([`Entry`]). Every non-root frame is built as a [`Component`], which carries a
//! [`Descriptor`] saying which slot of which kind of ancestor it belongs in.
//!
//! The constructors in [`attr`], [`op`] and [`entry`] are generated from fixed tables (one per
//! row), so each component comes out already tagged with its placement metadata.
//!
//! ### Simple example
//!
//! ```
//! use classbuild::jvm::*;
//!
//! let code = attr::code(2, 1);
//! assert_eq!(code.scope(), Scope::CODE);
//! assert_eq!(code.descriptor().collection, Collection::Attributes);
//! assert_eq!(code.descriptor().parent_scopes, &[Scope::Method]);
//!
//! let push = op::bipush(42);
//! assert_eq!(push.descriptor().collection, Collection::Code);
//! assert_eq!(push.as_op().unwrap().code(), Some(0x10));
//!
//! let answer = constant("answer", 42, vec![]);
//! assert_eq!(answer.descriptor().parent_scopes, &[Scope::Class]);
//! ```

mod access_flags;
pub mod attr;
mod descriptors;
pub mod entry;
mod frame;
pub mod op;
mod scope;
mod value;

pub use access_flags::*;
pub use attr::AttributeKind;
pub use descriptors::*;
pub use entry::EntryKind;
pub use frame::*;
pub use op::Opcode;
pub use scope::*;
pub use value::Value;
