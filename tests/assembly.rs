use classbuild::build::{self, Assembler, PlacementError, Rejection, Settings, Unit};
use classbuild::jvm::*;
use classbuild::smap::{LineInfo, SourceFile, Stratum};
use classbuild::units;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn static_method(name: &str) -> Component {
    method(
        name,
        Some(FieldType::int()),
        vec![(FieldType::int(), "x")],
        MethodAccessFlags::PUBLIC | MethodAccessFlags::STATIC,
    )
}

fn op_names(code: &Attribute) -> Vec<String> {
    code.ops()
        .into_iter()
        .map(|op| match op.label_name() {
            Some(name) => format!("{}:", name),
            None => op.mnemonic().to_owned(),
        })
        .collect()
}

#[test]
fn constants_in_code_end_up_in_the_class() {
    init();
    let class = build::build(
        build::new_class("Counter", ClassAccessFlags::PUBLIC | ClassAccessFlags::SUPER),
        units![static_method("next").with(units![
            attr::code(2, 1).with(units![
                op::iload(0),
                constant("step", 3, vec![]),
                op::ldc("step"),
                op::iadd(),
                op::ireturn(),
            ]),
        ])],
    )
    .unwrap();

    assert_eq!(class.constant_pool.len(), 1);
    let step = class.constant("step").unwrap();
    assert_eq!(step.tag, Value::Int(3));
    assert!(step.values.is_empty());

    let method = class.method("next").unwrap();
    assert_eq!(method.descriptor(), "(I)I");
    assert_eq!(method.attributes.len(), 1);

    let code = method.code().unwrap();
    assert_eq!(code.arg("max_stack"), Some(&Value::Int(2)));
    assert_eq!(op_names(code), vec!["iload", "ldc", "iadd", "ireturn"]);
    assert!(code
        .components(Collection::Code)
        .iter()
        .all(|c| c.descriptor().collection == Collection::Code));
}

#[test]
fn declaration_order_is_kept_per_slot() {
    init();
    let class = build::build(
        build::new_class("Ordered", ClassAccessFlags::PUBLIC),
        units![
            field("a", FieldType::int(), FieldAccessFlags::PRIVATE),
            static_method("first"),
            constant("c1", 1, vec![]),
            field("b", FieldType::long(), FieldAccessFlags::PRIVATE),
            static_method("second").with(units![constant("c2", 2, vec![])]),
            constant("c3", 3, vec![]),
        ],
    )
    .unwrap();

    let fields: Vec<&str> = class
        .fields
        .iter()
        .filter_map(Component::as_field)
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(fields, vec!["a", "b"]);

    let methods: Vec<&str> = class
        .methods
        .iter()
        .filter_map(Component::as_method)
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(methods, vec!["first", "second"]);

    // `c2` bubbles out of `second`, which is itself placed just before it
    let constants: Vec<&str> = class
        .constant_pool
        .iter()
        .filter_map(Component::as_constant)
        .map(|c| c.label.as_str())
        .collect();
    assert_eq!(constants, vec!["c1", "c2", "c3"]);
}

#[test]
fn placeholders_and_labels_build_the_same_tree() {
    init();
    let script = |top: Unit, bottom: Unit| {
        units![static_method("spin").with(units![
            attr::code(1, 1).with(units![
                top,
                op::iinc(0, 1),
                op::goto("top"),
                bottom,
            ]),
        ])]
    };

    let with_placeholders = build::build(
        build::new_class("Spin", ClassAccessFlags::PUBLIC),
        script(Unit::placeholder("top"), "end".into()),
    )
    .unwrap();
    let with_labels = build::build(
        build::new_class("Spin", ClassAccessFlags::PUBLIC),
        script(op::label("top").into(), Op::label("end").into()),
    )
    .unwrap();

    assert_eq!(with_placeholders, with_labels);
    let code = with_labels.method("spin").unwrap().code().unwrap();
    assert_eq!(op_names(code), vec!["top:", "iinc", "goto", "end:"]);
    assert_eq!(code.ops()[2].args, vec![Value::label("top")]);
}

#[test]
fn unplaceable_component_is_reported() {
    init();
    let result = build::build(
        build::new_class("Broken", ClassAccessFlags::PUBLIC),
        units![
            static_method("run").with(units![
                attr::code(0, 1).with(units![op::r#return()]),
                op::nop(),
            ]),
            constant("fine", 0, vec![]),
        ],
    );

    let err: PlacementError = result.unwrap_err();
    assert_eq!(err.class_name, "Broken");
    assert_eq!(err.unplaced.len(), 1);
    assert_eq!(err.unplaced[0].component, op::nop());
    assert_eq!(err.scopes(), vec![Scope::Op(Opcode::Nop)]);

    let trail: Vec<(Scope, Rejection)> = err.unplaced[0]
        .attempts
        .iter()
        .map(|a| (a.scope, a.reason))
        .collect();
    assert_eq!(
        trail,
        vec![
            (Scope::Method, Rejection::MissingSlotAndScopeMismatch),
            (Scope::Class, Rejection::MissingSlotAndScopeMismatch),
        ]
    );

    let message = err.to_string();
    assert!(message.starts_with("could not place 1 component(s) in class `Broken`"));
    assert!(message.contains("nop (wants `code` in one of [Code])"));
}

#[test]
fn smap_attribute_on_the_class() {
    init();
    let strata = vec![Stratum {
        stratum: String::from("Clojure"),
        source_files: vec![SourceFile::new("fred", Some("some/path/fred"))],
        lines: vec![LineInfo::new(10, 20)],
    }];
    let class = build::build(
        build::new_class("fred", ClassAccessFlags::PUBLIC),
        units![
            attr::source_file("fred.java"),
            attr::smap("fred", "Clojure", &strata, None),
        ],
    )
    .unwrap();

    let debug = class
        .attribute(AttributeKind::SourceDebugExtension)
        .unwrap();
    assert_eq!(
        debug.arg("debug_extension").and_then(Value::as_str),
        Some("SMAP\nfred.java\nClojure\n*S Clojure\n*F\n+ 1 fred\nsome/path/fred\n*L\n10:20\n*E")
    );
}

#[test]
fn empty_class() {
    init();
    let class = build::build(build::new_class("MyClass", ClassAccessFlags::empty()), vec![]).unwrap();
    assert_eq!(class, Class::new("MyClass", ClassAccessFlags::empty()));
    assert!(class.access_flags.names().is_empty());
}

fn same_method() -> Unit {
    static_method("m").with(units![
        attr::code(1, 1).with(units![
            units![constant("k", "key", vec![])],
            op::ldc("k"),
            op::pop(),
            op::iconst_0(),
            op::ireturn(),
        ]),
    ])
}

#[test]
fn nesting_does_not_change_the_result() {
    init();
    let flat = build::build(
        build::new_class("Same", ClassAccessFlags::PUBLIC),
        units![
            constant("k", "key", vec![]),
            attr::deprecated(),
            static_method("m").with(units![
                attr::code(1, 1).with(units![op::ldc("k"), op::pop(), op::iconst_0(), op::ireturn()]),
            ]),
        ],
    )
    .unwrap();

    let rearranged = build::build(
        build::new_class("Same", ClassAccessFlags::PUBLIC),
        units![same_method(), attr::deprecated()],
    )
    .unwrap();

    assert_eq!(flat, rearranged);
}

#[test]
fn class_level_attributes_stop_at_the_first_frame_that_takes_them() {
    init();
    let class = build::build(
        build::new_class("Same", ClassAccessFlags::PUBLIC),
        units![static_method("m").with(units![
            attr::code(1, 1).with(units![
                op::iconst_0(),
                units![attr::deprecated()],
                op::ireturn(),
            ]),
        ])],
    )
    .unwrap();

    // The code attribute can't hold `Deprecated`, but the method around it can
    assert!(class.attributes.is_empty());
    let method = class.method("m").unwrap();
    assert!(method.attribute(AttributeKind::Deprecated).is_some());
    assert!(method
        .code()
        .unwrap()
        .attribute(AttributeKind::Deprecated)
        .is_none());
}

#[test]
fn edit_adds_to_an_existing_class() {
    init();
    let class = build::build(
        build::new_class("Grow", ClassAccessFlags::PUBLIC),
        units![static_method("old")],
    )
    .unwrap();

    let assembler = Assembler::new(Settings::default());
    let class = assembler
        .edit(
            class,
            units![static_method("new").with(units![
                attr::code(1, 1).with(units![
                    constant("one", 1, vec![]),
                    op::ldc("one"),
                    op::ireturn(),
                ]),
                attr::exceptions(vec!["java/io/IOException"]),
            ])],
        )
        .unwrap();

    assert_eq!(class.methods.len(), 2);
    assert!(class.method("old").unwrap().code().is_none());
    let new = class.method("new").unwrap();
    assert!(new.code().is_some());
    assert!(new.attribute(AttributeKind::Exceptions).is_some());
    assert_eq!(class.constant_pool.len(), 1);

    let err = assembler.edit(class, units!["nowhere"]).unwrap_err();
    assert_eq!(err.scopes(), vec![Scope::Label]);
}

#[test]
fn table_entries_fill_implicit_slots() {
    init();
    let class = build::build(
        build::new_class("Guarded", ClassAccessFlags::PUBLIC),
        units![static_method("guarded").with(units![
            attr::code(1, 1).with(units![
                "try",
                op::iload(0),
                op::ireturn(),
                "end",
                entry::exception("try", "end", "handler", "java/lang/Exception"),
                "handler",
                op::iconst_m1(),
                op::ireturn(),
                attr::line_number_table().with(units![
                    entry::line_number("try", 7),
                    entry::line_number("handler", 9),
                ]),
            ]),
            attr::method_parameters().with(units![entry::method_parameter("x", 0)]),
        ])],
    )
    .unwrap();

    let method = class.method("guarded").unwrap();
    let code = method.code().unwrap();
    assert_eq!(code.components(Collection::ExceptionTable).len(), 1);
    assert_eq!(op_names(code).len(), 7);

    let lines = code.attribute(AttributeKind::LineNumberTable).unwrap();
    assert_eq!(lines.components(Collection::LineNumberTable).len(), 2);

    let params = method.attribute(AttributeKind::MethodParameters).unwrap();
    let name = params.components(Collection::Parameters)[0]
        .as_entry()
        .and_then(|e| e.arg("name"));
    assert_eq!(name, Some(&Value::from("x")));
}
