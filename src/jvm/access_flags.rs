use bitflags::bitflags;

bitflags! {
    /// Access flags on classes
    ///
    /// [0]: https://docs.oracle.com/javase/specs/jvms/se15/html/jvms-4.html#jvms-4.1-200-E.1
    pub struct ClassAccessFlags: u16 {
        const PUBLIC = 0x0001;
        const FINAL = 0x0010;
        const SUPER = 0x0020;
        const INTERFACE = 0x0200;
        const ABSTRACT = 0x0400;
        const SYNTHETIC = 0x1000;
        const ANNOTATION = 0x2000;
        const ENUM = 0x4000;
        const MODULE = 0x8000;
    }
}

bitflags! {
    /// Access flags on methods
    ///
    /// [0]: https://docs.oracle.com/javase/specs/jvms/se15/html/jvms-4.html#jvms-4.6-200-A.1
    pub struct MethodAccessFlags: u16 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const SYNCHRONIZED = 0x0020;
        const BRIDGE = 0x0040;
        const VARARGS = 0x0080;
        const NATIVE = 0x0100;
        const ABSTRACT = 0x0400;
        const STRICT = 0x0800;
        const SYNTHETIC = 0x1000;
    }
}

bitflags! {
    /// Access flags on fields
    ///
    /// [0]: https://docs.oracle.com/javase/specs/jvms/se15/html/jvms-4.html#jvms-4.5-200-A.1
    pub struct FieldAccessFlags: u16 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const VOLATILE = 0x0040;
        const TRANSIENT = 0x0080;
        const SYNTHETIC = 0x1000;
        const ENUM = 0x4000;
    }
}

/// Flag names, listed in the same order as the access flag tables of the JVM spec
macro_rules! flag_names {
    ($flags:ident { $($flag:ident => $name:literal),* $(,)? }) => {
        impl $flags {
            /// Names of the flags that are set, in class file table order
            pub fn names(&self) -> Vec<&'static str> {
                let mut names = vec![];
                $(
                    if self.contains($flags::$flag) {
                        names.push($name);
                    }
                )*
                names
            }
        }
    };
}

flag_names!(ClassAccessFlags {
    PUBLIC => "public",
    FINAL => "final",
    SUPER => "super",
    INTERFACE => "interface",
    ABSTRACT => "abstract",
    SYNTHETIC => "synthetic",
    ANNOTATION => "annotation",
    ENUM => "enum",
    MODULE => "module",
});

flag_names!(MethodAccessFlags {
    PUBLIC => "public",
    PRIVATE => "private",
    PROTECTED => "protected",
    STATIC => "static",
    FINAL => "final",
    SYNCHRONIZED => "synchronized",
    BRIDGE => "bridge",
    VARARGS => "varargs",
    NATIVE => "native",
    ABSTRACT => "abstract",
    STRICT => "strict",
    SYNTHETIC => "synthetic",
});

flag_names!(FieldAccessFlags {
    PUBLIC => "public",
    PRIVATE => "private",
    PROTECTED => "protected",
    STATIC => "static",
    FINAL => "final",
    VOLATILE => "volatile",
    TRANSIENT => "transient",
    SYNTHETIC => "synthetic",
    ENUM => "enum",
});

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names_follow_table_order() {
        let flags = MethodAccessFlags::STATIC | MethodAccessFlags::PUBLIC;
        assert_eq!(flags.names(), vec!["public", "static"]);

        let flags = FieldAccessFlags::FINAL | FieldAccessFlags::PRIVATE | FieldAccessFlags::STATIC;
        assert_eq!(flags.names(), vec!["private", "static", "final"]);
    }

    #[test]
    fn empty_flags_have_no_names() {
        assert!(ClassAccessFlags::empty().names().is_empty());
    }
}
