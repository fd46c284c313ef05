//! Frames are the nodes of the assembled class tree.
//!
//! The root is always a [`Class`]. Everything else is a [`Frame`] wrapped in a [`Component`],
//! placed into one of the named [`Collection`] slots of some ancestor frame.

use super::{
    AttributeKind, ClassAccessFlags, Collection, Component, EntryKind, FieldAccessFlags,
    FieldType, MethodAccessFlags, MethodDescriptor, Opcode, RenderDescriptor, Scope, Value,
};

/// Something which may hold components in named slots
pub trait Container {
    /// Kind of the frame
    fn scope(&self) -> Scope;

    /// Components placed in the slot, if the frame has that slot
    fn slot(&self, collection: Collection) -> Option<&Vec<Component>>;

    /// Mutable access to the slot, if the frame has that slot
    fn slot_mut(&mut self, collection: Collection) -> Option<&mut Vec<Component>>;

    fn has_slot(&self, collection: Collection) -> bool {
        self.slot(collection).is_some()
    }
}

/// Root of the tree
#[derive(Clone, PartialEq, Debug)]
pub struct Class {
    pub name: String,
    pub access_flags: ClassAccessFlags,
    pub methods: Vec<Component>,
    pub fields: Vec<Component>,
    pub constant_pool: Vec<Component>,
    pub attributes: Vec<Component>,
}

impl Class {
    /// Create an empty class
    pub fn new(name: impl Into<String>, access_flags: ClassAccessFlags) -> Class {
        Class {
            name: name.into(),
            access_flags,
            methods: vec![],
            fields: vec![],
            constant_pool: vec![],
            attributes: vec![],
        }
    }

    /// First method with the given name
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods
            .iter()
            .filter_map(Component::as_method)
            .find(|method| method.name == name)
    }

    /// First field with the given name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .filter_map(Component::as_field)
            .find(|field| field.name == name)
    }

    /// First constant with the given label
    pub fn constant(&self, label: &str) -> Option<&Constant> {
        self.constant_pool
            .iter()
            .filter_map(Component::as_constant)
            .find(|constant| constant.label == label)
    }

    /// First attribute of the given kind
    pub fn attribute(&self, kind: AttributeKind) -> Option<&Attribute> {
        find_attribute(&self.attributes, kind)
    }
}

impl Container for Class {
    fn scope(&self) -> Scope {
        Scope::Class
    }

    fn slot(&self, collection: Collection) -> Option<&Vec<Component>> {
        match collection {
            Collection::Methods => Some(&self.methods),
            Collection::Fields => Some(&self.fields),
            Collection::ConstantPool => Some(&self.constant_pool),
            Collection::Attributes => Some(&self.attributes),
            _ => None,
        }
    }

    fn slot_mut(&mut self, collection: Collection) -> Option<&mut Vec<Component>> {
        match collection {
            Collection::Methods => Some(&mut self.methods),
            Collection::Fields => Some(&mut self.fields),
            Collection::ConstantPool => Some(&mut self.constant_pool),
            Collection::Attributes => Some(&mut self.attributes),
            _ => None,
        }
    }
}

/// Method declared by a class
#[derive(Clone, PartialEq, Debug)]
pub struct Method {
    pub name: String,

    /// `None` is for `void`
    pub return_type: Option<FieldType>,

    /// Parameter types and names
    pub args: Vec<(FieldType, String)>,
    pub access_flags: MethodAccessFlags,
    pub attributes: Vec<Component>,
}

impl Method {
    const PARENT_SCOPES: &'static [Scope] = &[Scope::Class];

    /// Rendered method descriptor (eg. `(IJ)V`)
    pub fn descriptor(&self) -> String {
        MethodDescriptor {
            parameters: self.args.iter().map(|(typ, _)| typ.clone()).collect(),
            return_type: self.return_type.clone(),
        }
        .render()
    }

    /// First attribute of the given kind
    pub fn attribute(&self, kind: AttributeKind) -> Option<&Attribute> {
        find_attribute(&self.attributes, kind)
    }

    /// The `Code` attribute, if the method has one
    pub fn code(&self) -> Option<&Attribute> {
        self.attribute(AttributeKind::Code)
    }
}

/// Make a method component
pub fn method(
    name: impl Into<String>,
    return_type: Option<FieldType>,
    args: Vec<(FieldType, &str)>,
    access_flags: MethodAccessFlags,
) -> Component {
    let method = Method {
        name: name.into(),
        return_type,
        args: args
            .into_iter()
            .map(|(typ, name)| (typ, name.to_owned()))
            .collect(),
        access_flags,
        attributes: vec![],
    };
    Component::new(
        Collection::Methods,
        Method::PARENT_SCOPES,
        Frame::Method(method),
    )
}

/// Field declared by a class
#[derive(Clone, PartialEq, Debug)]
pub struct Field {
    pub name: String,
    pub field_type: FieldType,
    pub access_flags: FieldAccessFlags,
    pub attributes: Vec<Component>,
}

impl Field {
    const PARENT_SCOPES: &'static [Scope] = &[Scope::Class];

    /// Rendered field descriptor (eg. `Ljava/lang/String;`)
    pub fn descriptor(&self) -> String {
        self.field_type.render()
    }

    /// First attribute of the given kind
    pub fn attribute(&self, kind: AttributeKind) -> Option<&Attribute> {
        find_attribute(&self.attributes, kind)
    }
}

/// Make a field component
pub fn field(
    name: impl Into<String>,
    field_type: FieldType,
    access_flags: FieldAccessFlags,
) -> Component {
    let field = Field {
        name: name.into(),
        field_type,
        access_flags,
        attributes: vec![],
    };
    Component::new(Collection::Fields, Field::PARENT_SCOPES, Frame::Field(field))
}

/// Attribute on a class, method, field, or another attribute
///
/// Besides the general `attributes` slot, each kind of attribute may own some implicit slots
/// (eg. `Code` owns `code` and `exception_table`). These are set up empty when the attribute is
/// created, in the order the attribute table lists them.
#[derive(Clone, PartialEq, Debug)]
pub struct Attribute {
    pub kind: AttributeKind,
    pub args: Vec<Value>,
    pub attributes: Vec<Component>,
    pub implicit: Vec<(Collection, Vec<Component>)>,
}

impl Attribute {
    pub(crate) fn component(kind: AttributeKind, args: Vec<Value>) -> Component {
        let attribute = Attribute {
            kind,
            args,
            attributes: vec![],
            implicit: kind
                .implicit_collections()
                .iter()
                .map(|collection| (*collection, vec![]))
                .collect(),
        };
        Component::new(
            Collection::Attributes,
            kind.parent_scopes(),
            Frame::Attribute(attribute),
        )
    }

    /// Name of the attribute as it appears in the class file (eg. `Code`)
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Argument by its field name in the attribute table
    pub fn arg(&self, field: &str) -> Option<&Value> {
        let idx = self.kind.fields().iter().position(|f| *f == field)?;
        self.args.get(idx)
    }

    /// Components placed in a slot (empty if the attribute doesn't have the slot)
    pub fn components(&self, collection: Collection) -> &[Component] {
        self.slot(collection).map_or(&[], Vec::as_slice)
    }

    /// Instructions, if this is a `Code` attribute
    pub fn ops(&self) -> Vec<&Op> {
        self.components(Collection::Code)
            .iter()
            .filter_map(Component::as_op)
            .collect()
    }

    /// First nested attribute of the given kind
    pub fn attribute(&self, kind: AttributeKind) -> Option<&Attribute> {
        find_attribute(&self.attributes, kind)
    }
}

impl Container for Attribute {
    fn scope(&self) -> Scope {
        Scope::Attribute(self.kind)
    }

    fn slot(&self, collection: Collection) -> Option<&Vec<Component>> {
        if collection == Collection::Attributes {
            return Some(&self.attributes);
        }
        self.implicit
            .iter()
            .find(|(slot, _)| *slot == collection)
            .map(|(_, components)| components)
    }

    fn slot_mut(&mut self, collection: Collection) -> Option<&mut Vec<Component>> {
        if collection == Collection::Attributes {
            return Some(&mut self.attributes);
        }
        self.implicit
            .iter_mut()
            .find(|(slot, _)| *slot == collection)
            .map(|(_, components)| components)
    }
}

/// Bytecode instruction, or the `label` pseudo-instruction
#[derive(Clone, PartialEq, Debug)]
pub struct Op {
    /// `None` for the `label` pseudo-instruction
    pub opcode: Option<Opcode>,
    pub args: Vec<Value>,
}

impl Op {
    pub const LABEL: &'static str = "label";
    const PARENT_SCOPES: &'static [Scope] = &[Scope::CODE];

    pub(crate) fn component(opcode: Opcode, args: Vec<Value>) -> Component {
        let op = Op {
            opcode: Some(opcode),
            args,
        };
        Component::new(Collection::Code, Op::PARENT_SCOPES, Frame::Op(op))
    }

    /// Make a `label` pseudo-instruction
    pub fn label(name: impl Into<String>) -> Component {
        let op = Op {
            opcode: None,
            args: vec![Value::Label(name.into())],
        };
        Component::new(Collection::Code, Op::PARENT_SCOPES, Frame::Op(op))
    }

    pub fn mnemonic(&self) -> &'static str {
        self.opcode.map_or(Op::LABEL, Opcode::mnemonic)
    }

    /// Numeric opcode (`None` for labels)
    pub fn code(&self) -> Option<u8> {
        self.opcode.map(Opcode::code)
    }

    /// Name of the label, if this is a label
    pub fn label_name(&self) -> Option<&str> {
        match (self.opcode, self.args.first()) {
            (None, Some(Value::Label(name))) => Some(name),
            _ => None,
        }
    }
}

/// Constant pool entry
///
/// Constants are only ever placed in the class, no matter where they are declared.
#[derive(Clone, PartialEq, Debug)]
pub struct Constant {
    /// Symbolic name for the constant (not a pool index)
    pub label: String,

    /// Currently the literal constant value itself
    pub tag: Value,
    pub values: Vec<Value>,
}

impl Constant {
    const PARENT_SCOPES: &'static [Scope] = &[Scope::Class];
}

/// Make a constant pool entry component
pub fn constant(label: impl Into<String>, tag: impl Into<Value>, values: Vec<Value>) -> Component {
    let constant = Constant {
        label: label.into(),
        tag: tag.into(),
        values,
    };
    Component::new(
        Collection::ConstantPool,
        Constant::PARENT_SCOPES,
        Frame::Constant(constant),
    )
}

/// Row in one of the tables owned by an attribute (eg. an exception handler)
#[derive(Clone, PartialEq, Debug)]
pub struct Entry {
    pub kind: EntryKind,
    pub args: Vec<Value>,
}

impl Entry {
    pub(crate) fn component(kind: EntryKind, args: Vec<Value>) -> Component {
        Component::new(
            kind.collection(),
            kind.parent_scopes(),
            Frame::Entry(Entry { kind, args }),
        )
    }

    /// Argument by its field name in the entry table
    pub fn arg(&self, field: &str) -> Option<&Value> {
        let idx = self.kind.fields().iter().position(|f| *f == field)?;
        self.args.get(idx)
    }
}

/// Any frame which can be placed into another frame
#[derive(Clone, PartialEq, Debug)]
pub enum Frame {
    Method(Method),
    Field(Field),
    Attribute(Attribute),
    Op(Op),
    Constant(Constant),
    Entry(Entry),
}

impl Container for Frame {
    fn scope(&self) -> Scope {
        match self {
            Frame::Method(_) => Scope::Method,
            Frame::Field(_) => Scope::Field,
            Frame::Attribute(attribute) => attribute.scope(),
            Frame::Op(Op { opcode: None, .. }) => Scope::Label,
            Frame::Op(Op {
                opcode: Some(opcode),
                ..
            }) => Scope::Op(*opcode),
            Frame::Constant(_) => Scope::Constant,
            Frame::Entry(entry) => Scope::Entry(entry.kind),
        }
    }

    fn slot(&self, collection: Collection) -> Option<&Vec<Component>> {
        match (self, collection) {
            (Frame::Method(method), Collection::Attributes) => Some(&method.attributes),
            (Frame::Field(field), Collection::Attributes) => Some(&field.attributes),
            (Frame::Attribute(attribute), _) => attribute.slot(collection),
            _ => None,
        }
    }

    fn slot_mut(&mut self, collection: Collection) -> Option<&mut Vec<Component>> {
        match (self, collection) {
            (Frame::Method(method), Collection::Attributes) => Some(&mut method.attributes),
            (Frame::Field(field), Collection::Attributes) => Some(&mut field.attributes),
            (Frame::Attribute(attribute), _) => attribute.slot_mut(collection),
            _ => None,
        }
    }
}

fn find_attribute(attributes: &[Component], kind: AttributeKind) -> Option<&Attribute> {
    attributes
        .iter()
        .filter_map(Component::as_attribute)
        .find(|attribute| attribute.kind == kind)
}
