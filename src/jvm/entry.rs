//! Rows of the tables owned by attributes, and one constructor per kind of row
//!
//! These fill the implicit slots of attributes: exception handlers go in the `exception_table` of
//! a `Code` attribute, line numbers go in a `LineNumberTable`, and so on.

use super::value::{operand_type, operand_value};
use super::{AttributeKind, Collection, Component, Entry, Scope, Value};

macro_rules! entries {
    ($(
        $variant:ident $ctor:ident $name:literal $collection:ident [$($parent:ident),*]
            ($($field:ident: $kind:ident),*);
    )*) => {
        /// Kind of table entry
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
        pub enum EntryKind {
            $($variant,)*
        }

        impl EntryKind {
            pub const ALL: &'static [EntryKind] = &[$(EntryKind::$variant,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(EntryKind::$variant => $name,)*
                }
            }

            /// Slot the entry goes into
            pub fn collection(self) -> Collection {
                match self {
                    $(EntryKind::$variant => Collection::$collection,)*
                }
            }

            /// Scopes of the attributes which own the slot
            pub fn parent_scopes(self) -> &'static [Scope] {
                match self {
                    $(EntryKind::$variant => &[$(Scope::Attribute(AttributeKind::$parent)),*],)*
                }
            }

            /// Names of the fields, in the order the constructor takes them
            pub fn fields(self) -> &'static [&'static str] {
                match self {
                    $(EntryKind::$variant => &[$(stringify!($field)),*],)*
                }
            }
        }

        $(
            #[doc = concat!("Make a `", $name, "` entry")]
            pub fn $ctor($($field: operand_type!($kind)),*) -> Component {
                Entry::component(EntryKind::$variant, vec![$(operand_value!($kind, $field)),*])
            }
        )*
    };
}

entries! {
    Exception exception "exception" ExceptionTable [Code]
        (start: label, end: label, handler: label, catch_type: value);
    LineNumber line_number "line_number" LineNumberTable [LineNumberTable]
        (start: label, line: value);
    LocalVariable local_variable "local_variable" LocalVariableTable [LocalVariableTable]
        (start: label, end: label, name: value, descriptor: value, index: local);
    LocalVariableType local_variable_type "local_variable_type" LocalVariableTypeTable [LocalVariableTypeTable]
        (start: label, end: label, name: value, signature: value, index: local);
    InnerClass inner_class "inner_class" Classes [InnerClasses]
        (inner_class: value, outer_class: value, inner_name: value, access_flags: value);
    BootstrapMethod bootstrap_method "bootstrap_method" BootstrapMethods [BootstrapMethods]
        (method_handle: value, arguments: value);
    MethodParameter method_parameter "method_parameter" Parameters [MethodParameters]
        (name: value, access_flags: value);
}
