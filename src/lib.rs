//! Assemble in-memory JVM class files from nested build scripts
//!
//! - [`jvm`] is the class tree itself, plus the constructors for every kind of component
//! - [`build`] places the components of a build script into the right frames
//! - [`smap`] encodes source maps for the `SourceDebugExtension` attribute

pub mod build;
pub mod jvm;
pub mod smap;
