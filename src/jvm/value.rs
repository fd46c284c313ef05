/// Literal payload carried by instructions, attributes, constants and table entries
///
/// Nothing here is resolved yet: labels stay symbolic and constants are not pool indices. Those
/// are the job of later passes over the assembled tree.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),

    /// Symbolic reference to a label in the enclosing code
    Label(String),

    /// Index of a local variable
    Local(u16),

    List(Vec<Value>),
}

impl Value {
    /// Symbolic reference to a label
    pub fn label(name: impl Into<String>) -> Value {
        Value::Label(name.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) | Value::Label(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Local(l) => Some(i64::from(*l)),
            _ => None,
        }
    }
}

macro_rules! from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Value {
                fn from(value: $int) -> Value {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Value {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Value {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Value {
        Value::Int(i64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Value {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Value {
        Value::Str(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Value {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

/// Parameter type used by generated constructors for an operand of the given kind
///
///   - `label` operands name a label (`"loop"`) and become [`Value::Label`]
///   - `local` operands are local variable indices and become [`Value::Local`]
///   - `value` operands are anything convertible into a [`Value`]
macro_rules! operand_type {
    (label) => { impl Into<String> };
    (local) => { u16 };
    (value) => { impl Into<Value> };
}

/// Conversion matching [`operand_type`]
macro_rules! operand_value {
    (label, $operand:expr) => {
        $crate::jvm::Value::Label($operand.into())
    };
    (local, $operand:expr) => {
        $crate::jvm::Value::Local($operand)
    };
    (value, $operand:expr) => {
        $operand.into()
    };
}

pub(crate) use operand_type;
pub(crate) use operand_value;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(Value::from(3u8), Value::Int(3));
        assert_eq!(Value::from(-1), Value::Int(-1));
        assert_eq!(Value::from(1.5f32), Value::Float(1.5));
        assert_eq!(Value::from("x"), Value::Str(String::from("x")));
        assert_eq!(
            Value::from(vec![1, 2]),
            Value::List(vec![Value::Int(1), Value::Int(2)])
        );
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::label("loop").as_str(), Some("loop"));
        assert_eq!(Value::Local(4).as_int(), Some(4));
        assert_eq!(Value::Float(1.0).as_int(), None);
    }
}
