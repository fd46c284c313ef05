//! Instruction table, and one constructor per instruction
//!
//! Every instruction is a component destined for the `code` slot of a `Code` attribute. The
//! operands are kept in declaration order and are left unresolved: branch targets are label
//! names, constants are literal values, and so on.
//!
//! ```
//! use classbuild::jvm::op;
//!
//! let load = op::iload(2);
//! let jump = op::goto("loop");
//! let ret = op::r#return();
//! # let _ = (load, jump, ret);
//! ```

use super::value::{operand_type, operand_value};
use super::{Component, Op, Value};
use std::fmt;

/// Builds the [`Opcode`] enum and a constructor function for each row
///
/// Each row is: variant, constructor name, mnemonic, opcode, and then the named operands along
/// with their kind (see `operand_type!`). Duplicate rows fail to compile.
macro_rules! opcodes {
    ($(
        $variant:ident $ctor:ident $mnemonic:literal $code:literal
            ($($operand:ident: $kind:ident),*);
    )*) => {
        /// JVM bytecode opcode
        ///
        /// [0]: https://docs.oracle.com/javase/specs/jvms/se15/html/jvms-6.html#jvms-6.5
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
        pub enum Opcode {
            $($variant,)*
        }

        impl Opcode {
            /// Every opcode, in numeric order
            pub const ALL: &'static [Opcode] = &[$(Opcode::$variant,)*];

            pub fn code(self) -> u8 {
                match self {
                    $(Opcode::$variant => $code,)*
                }
            }

            pub fn mnemonic(self) -> &'static str {
                match self {
                    $(Opcode::$variant => $mnemonic,)*
                }
            }

            /// Names of the operands, in the order the constructor takes them
            pub fn operands(self) -> &'static [&'static str] {
                match self {
                    $(Opcode::$variant => &[$(stringify!($operand)),*],)*
                }
            }
        }

        $(
            #[doc = concat!("Make a `", $mnemonic, "` instruction")]
            pub fn $ctor($($operand: operand_type!($kind)),*) -> Component {
                Op::component(Opcode::$variant, vec![$(operand_value!($kind, $operand)),*])
            }
        )*
    };
}

opcodes! {
    Nop nop "nop" 0x00 ();
    AconstNull aconst_null "aconst_null" 0x01 ();
    IconstM1 iconst_m1 "iconst_m1" 0x02 ();
    Iconst0 iconst_0 "iconst_0" 0x03 ();
    Iconst1 iconst_1 "iconst_1" 0x04 ();
    Iconst2 iconst_2 "iconst_2" 0x05 ();
    Iconst3 iconst_3 "iconst_3" 0x06 ();
    Iconst4 iconst_4 "iconst_4" 0x07 ();
    Iconst5 iconst_5 "iconst_5" 0x08 ();
    Lconst0 lconst_0 "lconst_0" 0x09 ();
    Lconst1 lconst_1 "lconst_1" 0x0a ();
    Fconst0 fconst_0 "fconst_0" 0x0b ();
    Fconst1 fconst_1 "fconst_1" 0x0c ();
    Fconst2 fconst_2 "fconst_2" 0x0d ();
    Dconst0 dconst_0 "dconst_0" 0x0e ();
    Dconst1 dconst_1 "dconst_1" 0x0f ();
    Bipush bipush "bipush" 0x10 (byte: value);
    Sipush sipush "sipush" 0x11 (short: value);
    Ldc ldc "ldc" 0x12 (constant: value);
    LdcW ldc_w "ldc_w" 0x13 (constant: value);
    Ldc2W ldc2_w "ldc2_w" 0x14 (constant: value);
    Iload iload "iload" 0x15 (index: local);
    Lload lload "lload" 0x16 (index: local);
    Fload fload "fload" 0x17 (index: local);
    Dload dload "dload" 0x18 (index: local);
    Aload aload "aload" 0x19 (index: local);
    Iload0 iload_0 "iload_0" 0x1a ();
    Iload1 iload_1 "iload_1" 0x1b ();
    Iload2 iload_2 "iload_2" 0x1c ();
    Iload3 iload_3 "iload_3" 0x1d ();
    Lload0 lload_0 "lload_0" 0x1e ();
    Lload1 lload_1 "lload_1" 0x1f ();
    Lload2 lload_2 "lload_2" 0x20 ();
    Lload3 lload_3 "lload_3" 0x21 ();
    Fload0 fload_0 "fload_0" 0x22 ();
    Fload1 fload_1 "fload_1" 0x23 ();
    Fload2 fload_2 "fload_2" 0x24 ();
    Fload3 fload_3 "fload_3" 0x25 ();
    Dload0 dload_0 "dload_0" 0x26 ();
    Dload1 dload_1 "dload_1" 0x27 ();
    Dload2 dload_2 "dload_2" 0x28 ();
    Dload3 dload_3 "dload_3" 0x29 ();
    Aload0 aload_0 "aload_0" 0x2a ();
    Aload1 aload_1 "aload_1" 0x2b ();
    Aload2 aload_2 "aload_2" 0x2c ();
    Aload3 aload_3 "aload_3" 0x2d ();
    Iaload iaload "iaload" 0x2e ();
    Laload laload "laload" 0x2f ();
    Faload faload "faload" 0x30 ();
    Daload daload "daload" 0x31 ();
    Aaload aaload "aaload" 0x32 ();
    Baload baload "baload" 0x33 ();
    Caload caload "caload" 0x34 ();
    Saload saload "saload" 0x35 ();
    Istore istore "istore" 0x36 (index: local);
    Lstore lstore "lstore" 0x37 (index: local);
    Fstore fstore "fstore" 0x38 (index: local);
    Dstore dstore "dstore" 0x39 (index: local);
    Astore astore "astore" 0x3a (index: local);
    Istore0 istore_0 "istore_0" 0x3b ();
    Istore1 istore_1 "istore_1" 0x3c ();
    Istore2 istore_2 "istore_2" 0x3d ();
    Istore3 istore_3 "istore_3" 0x3e ();
    Lstore0 lstore_0 "lstore_0" 0x3f ();
    Lstore1 lstore_1 "lstore_1" 0x40 ();
    Lstore2 lstore_2 "lstore_2" 0x41 ();
    Lstore3 lstore_3 "lstore_3" 0x42 ();
    Fstore0 fstore_0 "fstore_0" 0x43 ();
    Fstore1 fstore_1 "fstore_1" 0x44 ();
    Fstore2 fstore_2 "fstore_2" 0x45 ();
    Fstore3 fstore_3 "fstore_3" 0x46 ();
    Dstore0 dstore_0 "dstore_0" 0x47 ();
    Dstore1 dstore_1 "dstore_1" 0x48 ();
    Dstore2 dstore_2 "dstore_2" 0x49 ();
    Dstore3 dstore_3 "dstore_3" 0x4a ();
    Astore0 astore_0 "astore_0" 0x4b ();
    Astore1 astore_1 "astore_1" 0x4c ();
    Astore2 astore_2 "astore_2" 0x4d ();
    Astore3 astore_3 "astore_3" 0x4e ();
    Iastore iastore "iastore" 0x4f ();
    Lastore lastore "lastore" 0x50 ();
    Fastore fastore "fastore" 0x51 ();
    Dastore dastore "dastore" 0x52 ();
    Aastore aastore "aastore" 0x53 ();
    Bastore bastore "bastore" 0x54 ();
    Castore castore "castore" 0x55 ();
    Sastore sastore "sastore" 0x56 ();
    Pop pop "pop" 0x57 ();
    Pop2 pop2 "pop2" 0x58 ();
    Dup dup "dup" 0x59 ();
    DupX1 dup_x1 "dup_x1" 0x5a ();
    DupX2 dup_x2 "dup_x2" 0x5b ();
    Dup2 dup2 "dup2" 0x5c ();
    Dup2X1 dup2_x1 "dup2_x1" 0x5d ();
    Dup2X2 dup2_x2 "dup2_x2" 0x5e ();
    Swap swap "swap" 0x5f ();
    Iadd iadd "iadd" 0x60 ();
    Ladd ladd "ladd" 0x61 ();
    Fadd fadd "fadd" 0x62 ();
    Dadd dadd "dadd" 0x63 ();
    Isub isub "isub" 0x64 ();
    Lsub lsub "lsub" 0x65 ();
    Fsub fsub "fsub" 0x66 ();
    Dsub dsub "dsub" 0x67 ();
    Imul imul "imul" 0x68 ();
    Lmul lmul "lmul" 0x69 ();
    Fmul fmul "fmul" 0x6a ();
    Dmul dmul "dmul" 0x6b ();
    Idiv idiv "idiv" 0x6c ();
    Ldiv ldiv "ldiv" 0x6d ();
    Fdiv fdiv "fdiv" 0x6e ();
    Ddiv ddiv "ddiv" 0x6f ();
    Irem irem "irem" 0x70 ();
    Lrem lrem "lrem" 0x71 ();
    Frem frem "frem" 0x72 ();
    Drem drem "drem" 0x73 ();
    Ineg ineg "ineg" 0x74 ();
    Lneg lneg "lneg" 0x75 ();
    Fneg fneg "fneg" 0x76 ();
    Dneg dneg "dneg" 0x77 ();
    Ishl ishl "ishl" 0x78 ();
    Lshl lshl "lshl" 0x79 ();
    Ishr ishr "ishr" 0x7a ();
    Lshr lshr "lshr" 0x7b ();
    Iushr iushr "iushr" 0x7c ();
    Lushr lushr "lushr" 0x7d ();
    Iand iand "iand" 0x7e ();
    Land land "land" 0x7f ();
    Ior ior "ior" 0x80 ();
    Lor lor "lor" 0x81 ();
    Ixor ixor "ixor" 0x82 ();
    Lxor lxor "lxor" 0x83 ();
    Iinc iinc "iinc" 0x84 (index: local, delta: value);
    I2l i2l "i2l" 0x85 ();
    I2f i2f "i2f" 0x86 ();
    I2d i2d "i2d" 0x87 ();
    L2i l2i "l2i" 0x88 ();
    L2f l2f "l2f" 0x89 ();
    L2d l2d "l2d" 0x8a ();
    F2i f2i "f2i" 0x8b ();
    F2l f2l "f2l" 0x8c ();
    F2d f2d "f2d" 0x8d ();
    D2i d2i "d2i" 0x8e ();
    D2l d2l "d2l" 0x8f ();
    D2f d2f "d2f" 0x90 ();
    I2b i2b "i2b" 0x91 ();
    I2c i2c "i2c" 0x92 ();
    I2s i2s "i2s" 0x93 ();
    Lcmp lcmp "lcmp" 0x94 ();
    Fcmpl fcmpl "fcmpl" 0x95 ();
    Fcmpg fcmpg "fcmpg" 0x96 ();
    Dcmpl dcmpl "dcmpl" 0x97 ();
    Dcmpg dcmpg "dcmpg" 0x98 ();
    Ifeq ifeq "ifeq" 0x99 (target: label);
    Ifne ifne "ifne" 0x9a (target: label);
    Iflt iflt "iflt" 0x9b (target: label);
    Ifge ifge "ifge" 0x9c (target: label);
    Ifgt ifgt "ifgt" 0x9d (target: label);
    Ifle ifle "ifle" 0x9e (target: label);
    IfIcmpeq if_icmpeq "if_icmpeq" 0x9f (target: label);
    IfIcmpne if_icmpne "if_icmpne" 0xa0 (target: label);
    IfIcmplt if_icmplt "if_icmplt" 0xa1 (target: label);
    IfIcmpge if_icmpge "if_icmpge" 0xa2 (target: label);
    IfIcmpgt if_icmpgt "if_icmpgt" 0xa3 (target: label);
    IfIcmple if_icmple "if_icmple" 0xa4 (target: label);
    IfAcmpeq if_acmpeq "if_acmpeq" 0xa5 (target: label);
    IfAcmpne if_acmpne "if_acmpne" 0xa6 (target: label);
    Goto goto "goto" 0xa7 (target: label);
    Jsr jsr "jsr" 0xa8 (target: label);
    Ret ret "ret" 0xa9 (index: local);
    Tableswitch tableswitch "tableswitch" 0xaa (default: label, low: value, high: value, targets: value);
    Lookupswitch lookupswitch "lookupswitch" 0xab (default: label, pairs: value);
    Ireturn ireturn "ireturn" 0xac ();
    Lreturn lreturn "lreturn" 0xad ();
    Freturn freturn "freturn" 0xae ();
    Dreturn dreturn "dreturn" 0xaf ();
    Areturn areturn "areturn" 0xb0 ();
    Return r#return "return" 0xb1 ();
    Getstatic getstatic "getstatic" 0xb2 (field: value);
    Putstatic putstatic "putstatic" 0xb3 (field: value);
    Getfield getfield "getfield" 0xb4 (field: value);
    Putfield putfield "putfield" 0xb5 (field: value);
    Invokevirtual invokevirtual "invokevirtual" 0xb6 (method: value);
    Invokespecial invokespecial "invokespecial" 0xb7 (method: value);
    Invokestatic invokestatic "invokestatic" 0xb8 (method: value);
    Invokeinterface invokeinterface "invokeinterface" 0xb9 (method: value, count: value);
    Invokedynamic invokedynamic "invokedynamic" 0xba (method: value);
    New new "new" 0xbb (class: value);
    Newarray newarray "newarray" 0xbc (atype: value);
    Anewarray anewarray "anewarray" 0xbd (class: value);
    Arraylength arraylength "arraylength" 0xbe ();
    Athrow athrow "athrow" 0xbf ();
    Checkcast checkcast "checkcast" 0xc0 (class: value);
    Instanceof instanceof "instanceof" 0xc1 (class: value);
    Monitorenter monitorenter "monitorenter" 0xc2 ();
    Monitorexit monitorexit "monitorexit" 0xc3 ();
    Wide wide "wide" 0xc4 ();
    Multianewarray multianewarray "multianewarray" 0xc5 (class: value, dimensions: value);
    Ifnull ifnull "ifnull" 0xc6 (target: label);
    Ifnonnull ifnonnull "ifnonnull" 0xc7 (target: label);
    GotoW goto_w "goto_w" 0xc8 (target: label);
    JsrW jsr_w "jsr_w" 0xc9 (target: label);
    Breakpoint breakpoint "breakpoint" 0xca ();
    Impdep1 impdep1 "impdep1" 0xfe ();
    Impdep2 impdep2 "impdep2" 0xff ();
}

impl Opcode {
    /// Look up an opcode by its numeric value
    pub fn from_code(code: u8) -> Option<Opcode> {
        Opcode::ALL.iter().copied().find(|opcode| opcode.code() == code)
    }

    /// Look up an opcode by its mnemonic (eg. `invokestatic`)
    pub fn from_mnemonic(mnemonic: &str) -> Option<Opcode> {
        Opcode::ALL
            .iter()
            .copied()
            .find(|opcode| opcode.mnemonic() == mnemonic)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Make a `label` pseudo-instruction
///
/// Labels take up no space in the bytecode. They mark a position that branch instructions can
/// refer to by name.
pub fn label(name: impl Into<String>) -> Component {
    Op::label(name)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::jvm::{Collection, Scope};
    use std::collections::HashSet;

    #[test]
    fn table_is_complete_and_unique() {
        assert_eq!(Opcode::ALL.len(), 205);

        let codes: HashSet<u8> = Opcode::ALL.iter().map(|op| op.code()).collect();
        assert_eq!(codes.len(), Opcode::ALL.len());

        let mnemonics: HashSet<&str> = Opcode::ALL.iter().map(|op| op.mnemonic()).collect();
        assert_eq!(mnemonics.len(), Opcode::ALL.len());
        assert!(!mnemonics.contains(Op::LABEL));
    }

    #[test]
    fn table_is_in_numeric_order() {
        for pair in Opcode::ALL.windows(2) {
            assert!(pair[0].code() < pair[1].code(), "{} >= {}", pair[0], pair[1]);
        }
        for code in 0x00..=0xca {
            assert!(Opcode::from_code(code).is_some(), "missing opcode {:#x}", code);
        }
        assert_eq!(Opcode::from_code(0xcb), None);
    }

    #[test]
    fn lookups() {
        assert_eq!(Opcode::from_mnemonic("return"), Some(Opcode::Return));
        assert_eq!(Opcode::from_mnemonic("invokestatic"), Some(Opcode::Invokestatic));
        assert_eq!(Opcode::from_mnemonic("label"), None);
        assert_eq!(Opcode::from_code(0xb1), Some(Opcode::Return));
        assert_eq!(Opcode::Iinc.operands(), &["index", "delta"]);
        assert_eq!(Opcode::Nop.operands(), &[] as &[&str]);
    }

    #[test]
    fn constructors_carry_operands() {
        let inc = iinc(3, -1);
        assert_eq!(inc.scope(), Scope::Op(Opcode::Iinc));
        assert_eq!(inc.descriptor().collection, Collection::Code);
        assert_eq!(inc.descriptor().parent_scopes, &[Scope::CODE]);
        let op = inc.as_op().unwrap();
        assert_eq!(op.code(), Some(0x84));
        assert_eq!(op.args, vec![Value::Local(3), Value::Int(-1)]);

        let jump = goto("loop");
        assert_eq!(jump.as_op().unwrap().args, vec![Value::label("loop")]);

        let ret = r#return();
        assert_eq!(ret.as_op().unwrap().mnemonic(), "return");
        assert!(ret.as_op().unwrap().args.is_empty());

        let call = invokestatic("java/lang/Math.abs(I)I");
        assert_eq!(
            call.as_op().unwrap().args,
            vec![Value::from("java/lang/Math.abs(I)I")]
        );
    }

    #[test]
    fn label_matches_explicit_pseudo_op() {
        assert_eq!(label("start"), Op::label("start"));
        assert_eq!(label("start").scope(), Scope::Label);
    }
}
