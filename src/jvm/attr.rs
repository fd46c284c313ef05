//! Attribute table, and one constructor per attribute
//!
//! [0]: https://docs.oracle.com/javase/specs/jvms/se15/html/jvms-4.html#jvms-4.7

use super::{Attribute, Collection, Component, Scope, Value};
use crate::smap::{encode_smap, Stratum, Vendor};

/// Builds the [`AttributeKind`] enum and a constructor function for each row
///
/// Each row is: variant (which is also the attribute name in the class file), constructor name,
/// the scopes of frames the attribute may be placed in, the explicit fields the constructor
/// takes, and the implicit slots the attribute owns besides `attributes`.
macro_rules! attributes {
    ($(
        $variant:ident $ctor:ident [$($parent:ident),*] ($($field:ident),*) [$($implicit:ident),*];
    )*) => {
        /// Kind of attribute
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
        pub enum AttributeKind {
            $($variant,)*
        }

        impl AttributeKind {
            pub const ALL: &'static [AttributeKind] = &[$(AttributeKind::$variant,)*];

            /// Name of the attribute in the class file
            pub fn name(self) -> &'static str {
                match self {
                    $(AttributeKind::$variant => stringify!($variant),)*
                }
            }

            /// Scopes of the frames which can hold this attribute
            pub fn parent_scopes(self) -> &'static [Scope] {
                match self {
                    $(AttributeKind::$variant => &[$(Scope::$parent),*],)*
                }
            }

            /// Names of the explicit fields, in the order the constructor takes them
            pub fn fields(self) -> &'static [&'static str] {
                match self {
                    $(AttributeKind::$variant => &[$(stringify!($field)),*],)*
                }
            }

            /// Slots owned by the attribute, besides `attributes`
            pub fn implicit_collections(self) -> &'static [Collection] {
                match self {
                    $(AttributeKind::$variant => &[$(Collection::$implicit),*],)*
                }
            }
        }

        $(
            #[doc = concat!("Make a `", stringify!($variant), "` attribute")]
            pub fn $ctor($($field: impl Into<Value>),*) -> Component {
                Attribute::component(AttributeKind::$variant, vec![$($field.into()),*])
            }
        )*
    };
}

attributes! {
    ConstantValue constant_value [Field] (value) [];
    Code code [Method] (max_stack, max_locals) [Code, ExceptionTable];
    StackMapTable stack_map_table [CODE] () [];
    Exceptions exceptions [Method] (exceptions) [];
    InnerClasses inner_classes [Class] () [Classes];
    EnclosingMethod enclosing_method [Class] (class, method) [];
    Synthetic synthetic [Class, Method, Field] () [];
    Signature signature [Class, Method, Field] (signature) [];
    SourceFile source_file [Class] (source_file) [];
    SourceDebugExtension source_debug_extension [Class] (debug_extension) [];
    LineNumberTable line_number_table [CODE] () [LineNumberTable];
    LocalVariableTable local_variable_table [CODE] () [LocalVariableTable];
    LocalVariableTypeTable local_variable_type_table [CODE] () [LocalVariableTypeTable];
    Deprecated deprecated [Class, Method, Field] () [];
    RuntimeVisibleAnnotations runtime_visible_annotations [Class, Method, Field] (annotations) [];
    RuntimeInvisibleAnnotations runtime_invisible_annotations [Class, Method, Field] (annotations) [];
    RuntimeVisibleParameterAnnotations runtime_visible_parameter_annotations [Method] (parameter_annotations) [];
    RuntimeInvisibleParameterAnnotations runtime_invisible_parameter_annotations [Method] (parameter_annotations) [];
    RuntimeVisibleTypeAnnotations runtime_visible_type_annotations [Class, Method, Field, CODE] (annotations) [];
    RuntimeInvisibleTypeAnnotations runtime_invisible_type_annotations [Class, Method, Field, CODE] (annotations) [];
    AnnotationDefault annotation_default [Method] (default_value) [];
    BootstrapMethods bootstrap_methods [Class] () [BootstrapMethods];
    MethodParameters method_parameters [Method] () [Parameters];
}

impl AttributeKind {
    /// Look up an attribute kind by its class file name (eg. `LineNumberTable`)
    pub fn from_name(name: &str) -> Option<AttributeKind> {
        AttributeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
    }
}

/// Make a `SourceDebugExtension` attribute whose payload is an encoded SMAP
///
/// See [`encode_smap`] for the format.
pub fn smap(
    source_file: &str,
    default_stratum: &str,
    strata: &[Stratum],
    vendor: Option<&Vendor>,
) -> Component {
    source_debug_extension(encode_smap(source_file, default_stratum, strata, vendor))
}
