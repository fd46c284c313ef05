use super::{
    Attribute, AttributeKind, Constant, Container, Entry, EntryKind, Field, Frame, Method, Op,
    Opcode,
};
use std::fmt;

/// Kind tag of a frame
///
/// Every frame has exactly one scope. Components list the scopes of the frames they are allowed
/// to be directly placed into (see [`Descriptor::parent_scopes`]).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Scope {
    Class,
    Method,
    Field,
    Constant,

    /// The `label` pseudo-instruction
    Label,
    Attribute(AttributeKind),
    Op(Opcode),
    Entry(EntryKind),
}

impl Scope {
    /// Scope of the `Code` attribute, which is where all instructions go
    pub const CODE: Scope = Scope::Attribute(AttributeKind::Code);
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Class => f.write_str("class"),
            Scope::Method => f.write_str("method"),
            Scope::Field => f.write_str("field"),
            Scope::Constant => f.write_str("constant"),
            Scope::Label => f.write_str(Op::LABEL),
            Scope::Attribute(kind) => f.write_str(kind.name()),
            Scope::Op(opcode) => f.write_str(opcode.mnemonic()),
            Scope::Entry(kind) => f.write_str(kind.name()),
        }
    }
}

/// Named, ordered container slot on a frame
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Collection {
    Methods,
    Fields,
    ConstantPool,
    Attributes,
    Code,
    ExceptionTable,
    LineNumberTable,
    LocalVariableTable,
    LocalVariableTypeTable,
    Classes,
    BootstrapMethods,
    Parameters,
}

impl Collection {
    pub fn name(self) -> &'static str {
        match self {
            Collection::Methods => "methods",
            Collection::Fields => "fields",
            Collection::ConstantPool => "constant_pool",
            Collection::Attributes => "attributes",
            Collection::Code => "code",
            Collection::ExceptionTable => "exception_table",
            Collection::LineNumberTable => "line_number_table",
            Collection::LocalVariableTable => "local_variable_table",
            Collection::LocalVariableTypeTable => "local_variable_type_table",
            Collection::Classes => "classes",
            Collection::BootstrapMethods => "bootstrap_methods",
            Collection::Parameters => "parameters",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Placement metadata carried by every frame that is not the root
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Descriptor {
    /// Kind of the frame being placed
    pub scope: Scope,

    /// Slot in an ancestor frame where the frame belongs
    pub collection: Collection,

    /// Scopes an ancestor must have to be eligible to hold the frame
    pub parent_scopes: &'static [Scope],
}

impl Descriptor {
    /// Can a frame of the given scope directly hold this component?
    pub fn accepts(&self, scope: Scope) -> bool {
        self.parent_scopes.contains(&scope)
    }
}

/// A frame in its role as a not-yet-placed element, together with its placement descriptor
///
/// The descriptor scope always matches the frame scope: components are only made through
/// [`Component::new`] or the generated table constructors.
#[derive(Clone, PartialEq, Debug)]
pub struct Component {
    descriptor: Descriptor,
    frame: Frame,
}

impl Component {
    /// Make a component that wants to join `collection` in a frame with one of `parent_scopes`
    pub fn new(collection: Collection, parent_scopes: &'static [Scope], frame: Frame) -> Component {
        let descriptor = Descriptor {
            scope: frame.scope(),
            collection,
            parent_scopes,
        };
        Component { descriptor, frame }
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    pub fn scope(&self) -> Scope {
        self.descriptor.scope
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn into_frame(self) -> Frame {
        self.frame
    }

    /// Split into the descriptor and the frame (eg. to build the frame contents)
    pub(crate) fn into_parts(self) -> (Descriptor, Frame) {
        (self.descriptor, self.frame)
    }

    /// Reassemble a component whose frame contents were updated
    pub(crate) fn from_parts(descriptor: Descriptor, frame: Frame) -> Component {
        debug_assert_eq!(descriptor.scope, frame.scope());
        Component { descriptor, frame }
    }

    pub fn as_method(&self) -> Option<&Method> {
        match &self.frame {
            Frame::Method(method) => Some(method),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&Field> {
        match &self.frame {
            Frame::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_attribute(&self) -> Option<&Attribute> {
        match &self.frame {
            Frame::Attribute(attribute) => Some(attribute),
            _ => None,
        }
    }

    pub fn as_op(&self) -> Option<&Op> {
        match &self.frame {
            Frame::Op(op) => Some(op),
            _ => None,
        }
    }

    pub fn as_constant(&self) -> Option<&Constant> {
        match &self.frame {
            Frame::Constant(constant) => Some(constant),
            _ => None,
        }
    }

    pub fn as_entry(&self) -> Option<&Entry> {
        match &self.frame {
            Frame::Entry(entry) => Some(entry),
            _ => None,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (wants `{}` in one of [", self.scope(), self.descriptor.collection)?;
        for (i, scope) in self.descriptor.parent_scopes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", scope)?;
        }
        f.write_str("])")
    }
}
