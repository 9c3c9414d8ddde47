//! FromValue trait for converting database values to Rust types

use crate::error::{Error, Result};
use crate::value::Value;
use chrono::NaiveDateTime;

/// Trait for types that can be constructed from a database value.
pub trait FromValue: Sized {
    /// Convert a database value to this type.
    fn from_value(value: Value) -> Result<Self>;
}

fn mismatch(expected: &'static str, value: &Value) -> Error {
    Error::TypeConversion {
        expected,
        actual: value.type_name().to_string(),
    }
}

fn out_of_range(expected: &'static str, shown: impl std::fmt::Display) -> Error {
    Error::TypeConversion {
        expected,
        actual: format!("{} out of range", shown),
    }
}

macro_rules! impl_from_value_int {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self> {
                    match value {
                        Value::I64(v) => v.try_into().map_err(|_| out_of_range($name, v)),
                        Value::U64(v) => v.try_into().map_err(|_| out_of_range($name, v)),
                        Value::String(ref s) => s.trim().parse().map_err(|_| mismatch($name, &value)),
                        other => Err(mismatch($name, &other)),
                    }
                }
            }
        )*
    };
}

impl_from_value_int! {
    i32 => "i32",
    i64 => "i64",
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch("string", &other)),
        }
    }
}

impl FromValue for NaiveDateTime {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::DateTime(dt) => Ok(dt),
            // The driver reports a DATETIME at exactly midnight as a pure date
            Value::Date(d) => Ok(d.and_time(chrono::NaiveTime::MIN)),
            Value::String(ref s) => NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .map_err(|_| mismatch("datetime", &value)),
            other => Err(mismatch("datetime", &other)),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            v => T::from_value(v).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_unsigned_ids_fit_signed_fields() {
        assert_eq!(i64::from_value(Value::U64(42)).unwrap(), 42);
        assert!(i32::from_value(Value::I64(i64::MAX)).is_err());
    }

    #[test]
    fn test_null_into_option() {
        assert_eq!(Option::<String>::from_value(Value::Null).unwrap(), None);
        assert_eq!(
            Option::<i32>::from_value(Value::I64(2023)).unwrap(),
            Some(2023)
        );
        assert!(String::from_value(Value::Null).is_err());
    }

    #[test]
    fn test_midnight_date_reads_as_datetime() {
        let date = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
        let dt = NaiveDateTime::from_value(Value::Date(date)).unwrap();
        assert_eq!(dt, date.and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_numeric_text() {
        assert_eq!(i64::from_value(Value::String(" 17 ".into())).unwrap(), 17);
        assert!(i64::from_value(Value::String("abc".into())).is_err());
    }
}
