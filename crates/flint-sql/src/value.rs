//! Runtime values bound to statement placeholders.
//!
//! Every placeholder in a rendered statement carries one [`Value`]. Values are
//! never interpolated into SQL text; they travel alongside the statement and
//! are bound positionally by the driver.

use chrono::{DateTime, NaiveDateTime, Utc};

/// A runtime value for one positional argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Binary blob value.
    Blob(Vec<u8>),
}

/// Trait for types that can be converted to a [`Value`].
pub trait ToValue {
    /// Converts the value to a [`Value`].
    fn to_value(self) -> Value;
}

impl ToValue for Value {
    fn to_value(self) -> Value {
        self
    }
}

impl ToValue for bool {
    fn to_value(self) -> Value {
        Value::Bool(self)
    }
}

impl ToValue for i64 {
    fn to_value(self) -> Value {
        Value::Int(self)
    }
}

impl ToValue for i32 {
    fn to_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl ToValue for i16 {
    fn to_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl ToValue for i8 {
    fn to_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl ToValue for u32 {
    fn to_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl ToValue for u16 {
    fn to_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl ToValue for u8 {
    fn to_value(self) -> Value {
        Value::Int(i64::from(self))
    }
}

impl ToValue for f64 {
    fn to_value(self) -> Value {
        Value::Float(self)
    }
}

impl ToValue for f32 {
    fn to_value(self) -> Value {
        Value::Float(f64::from(self))
    }
}

impl ToValue for String {
    fn to_value(self) -> Value {
        Value::Text(self)
    }
}

impl ToValue for &str {
    fn to_value(self) -> Value {
        Value::Text(String::from(self))
    }
}

impl ToValue for Vec<u8> {
    fn to_value(self) -> Value {
        Value::Blob(self)
    }
}

impl ToValue for &[u8] {
    fn to_value(self) -> Value {
        Value::Blob(self.to_vec())
    }
}

impl ToValue for NaiveDateTime {
    fn to_value(self) -> Value {
        Value::Text(self.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

impl ToValue for DateTime<Utc> {
    fn to_value(self) -> Value {
        self.naive_utc().to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(true.to_value(), Value::Bool(true));
        assert_eq!(42_i32.to_value(), Value::Int(42));
        assert_eq!(2.5_f64.to_value(), Value::Float(2.5));
        assert_eq!("hello".to_value(), Value::Text(String::from("hello")));
        assert_eq!(None::<i32>.to_value(), Value::Null);
        assert_eq!(Some(42_i32).to_value(), Value::Int(42));
        assert_eq!(vec![1_u8, 2, 3].to_value(), Value::Blob(vec![1, 2, 3]));
    }

    #[test]
    fn test_datetime_conversion() {
        let dt = NaiveDateTime::parse_from_str("2024-05-01 12:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(
            dt.to_value(),
            Value::Text(String::from("2024-05-01 12:30:00"))
        );
    }
}
