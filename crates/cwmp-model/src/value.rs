// crates/cwmp-model/src/value.rs

use crate::error::ModelError;
use crate::types::{Base64, DateTime, HexBinary, XsdType};
use alloc::string::{String, ToString};
use core::fmt;

/// A single typed parameter value, as exchanged by name- and path-based access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    Boolean(bool),
    Int(i32),
    UnsignedInt(u32),
    Long(i64),
    UnsignedLong(u64),
    String(String),
    DateTime(DateTime),
    Base64(Base64),
    HexBinary(HexBinary),
}

impl ParameterValue {
    pub fn xsd_type(&self) -> XsdType {
        match self {
            ParameterValue::Boolean(_) => XsdType::Boolean,
            ParameterValue::Int(_) => XsdType::Int,
            ParameterValue::UnsignedInt(_) => XsdType::UnsignedInt,
            ParameterValue::Long(_) => XsdType::Long,
            ParameterValue::UnsignedLong(_) => XsdType::UnsignedLong,
            ParameterValue::String(_) => XsdType::String,
            ParameterValue::DateTime(_) => XsdType::DateTime,
            ParameterValue::Base64(_) => XsdType::Base64,
            ParameterValue::HexBinary(_) => XsdType::HexBinary,
        }
    }

    /// The wire form of the value.
    pub fn to_lexical(&self) -> String {
        match self {
            ParameterValue::Boolean(v) => String::from(if *v { "true" } else { "false" }),
            ParameterValue::Int(v) => v.to_string(),
            ParameterValue::UnsignedInt(v) => v.to_string(),
            ParameterValue::Long(v) => v.to_string(),
            ParameterValue::UnsignedLong(v) => v.to_string(),
            ParameterValue::String(v) => v.clone(),
            ParameterValue::DateTime(v) => v.0.clone(),
            ParameterValue::Base64(v) => v.to_lexical(),
            ParameterValue::HexBinary(v) => v.to_lexical(),
        }
    }

    /// Parses a lexical value as `ty`.
    ///
    /// Leading and trailing whitespace is ignored for every type except `string`.
    pub fn parse(ty: XsdType, s: &str) -> Result<ParameterValue, ModelError> {
        let invalid = || ModelError::InvalidValue {
            ty,
            value: s.to_string(),
        };

        // Helper macro for the integer widths
        macro_rules! parse_int {
            ($variant:path, $type:ty) => {
                s.trim().parse::<$type>().map($variant).map_err(|_| invalid())
            };
        }

        match ty {
            XsdType::Boolean => match s.trim() {
                "1" | "true" => Ok(ParameterValue::Boolean(true)),
                "0" | "false" => Ok(ParameterValue::Boolean(false)),
                _ => Err(invalid()),
            },
            XsdType::Int => parse_int!(ParameterValue::Int, i32),
            XsdType::UnsignedInt => parse_int!(ParameterValue::UnsignedInt, u32),
            XsdType::Long => parse_int!(ParameterValue::Long, i64),
            XsdType::UnsignedLong => parse_int!(ParameterValue::UnsignedLong, u64),
            XsdType::String => Ok(ParameterValue::String(s.to_string())),
            XsdType::DateTime => {
                let dt = DateTime::new(s.trim());
                if dt.is_well_formed() {
                    Ok(ParameterValue::DateTime(dt))
                } else {
                    Err(invalid())
                }
            }
            XsdType::Base64 => Base64::parse(s).map(ParameterValue::Base64),
            XsdType::HexBinary => HexBinary::parse(s).map(ParameterValue::HexBinary),
        }
    }

    /// Converts the value to the declared type of a parameter.
    ///
    /// A `String` value is parsed as the target type. Integer values move between
    /// widths when they fit.
    pub fn coerce(self, ty: XsdType) -> Result<ParameterValue, ModelError> {
        let found = self.xsd_type();
        if found == ty {
            return Ok(self);
        }
        if let ParameterValue::String(s) = &self {
            return ParameterValue::parse(ty, s);
        }
        if found.is_numeric() && ty.is_numeric() {
            let n = self.as_integer().unwrap_or_default();
            let invalid = || ModelError::InvalidValue {
                ty,
                value: n.to_string(),
            };
            return match ty {
                XsdType::Int => i32::try_from(n).map(ParameterValue::Int).map_err(|_| invalid()),
                XsdType::UnsignedInt => u32::try_from(n)
                    .map(ParameterValue::UnsignedInt)
                    .map_err(|_| invalid()),
                XsdType::Long => i64::try_from(n).map(ParameterValue::Long).map_err(|_| invalid()),
                _ => u64::try_from(n)
                    .map(ParameterValue::UnsignedLong)
                    .map_err(|_| invalid()),
            };
        }
        Err(ModelError::TypeMismatch {
            expected: ty,
            found,
        })
    }

    /// The numeric value widened to i128, for range checks.
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            ParameterValue::Int(v) => Some(i128::from(*v)),
            ParameterValue::UnsignedInt(v) => Some(i128::from(*v)),
            ParameterValue::Long(v) => Some(i128::from(*v)),
            ParameterValue::UnsignedLong(v) => Some(i128::from(*v)),
            _ => None,
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_lexical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_boolean_lexical_forms() {
        assert_eq!(
            ParameterValue::parse(XsdType::Boolean, "1"),
            Ok(ParameterValue::Boolean(true))
        );
        assert_eq!(
            ParameterValue::parse(XsdType::Boolean, "false"),
            Ok(ParameterValue::Boolean(false))
        );
        assert!(ParameterValue::parse(XsdType::Boolean, "yes").is_err());
        assert_eq!(ParameterValue::Boolean(true).to_lexical(), "true");
    }

    #[test]
    fn test_integer_width_is_enforced() {
        assert_eq!(
            ParameterValue::parse(XsdType::UnsignedInt, " 4294967295 "),
            Ok(ParameterValue::UnsignedInt(u32::MAX))
        );
        assert_eq!(
            ParameterValue::parse(XsdType::UnsignedInt, "4294967296"),
            Err(ModelError::InvalidValue {
                ty: XsdType::UnsignedInt,
                value: "4294967296".into()
            })
        );
        assert!(ParameterValue::parse(XsdType::UnsignedInt, "-1").is_err());
        assert_eq!(
            ParameterValue::parse(XsdType::Int, "-1"),
            Ok(ParameterValue::Int(-1))
        );
    }

    #[test]
    fn test_binary_and_date_parsing() {
        assert_eq!(
            ParameterValue::parse(XsdType::HexBinary, "0a0B"),
            Ok(ParameterValue::HexBinary(HexBinary(vec![0x0A, 0x0B])))
        );
        assert!(ParameterValue::parse(XsdType::HexBinary, "0A0").is_err());
        assert!(ParameterValue::parse(XsdType::DateTime, "yesterday").is_err());
        assert_eq!(
            ParameterValue::parse(XsdType::DateTime, DateTime::UNKNOWN)
                .map(|v| v.to_lexical()),
            Ok(String::from(DateTime::UNKNOWN))
        );
    }

    #[test]
    fn test_string_is_kept_verbatim() {
        let v = ParameterValue::parse(XsdType::String, "  padded  ").unwrap();
        assert_eq!(v, ParameterValue::String("  padded  ".into()));
    }

    #[test]
    fn test_coerce() {
        // Same type passes through untouched
        assert_eq!(
            ParameterValue::Int(5).coerce(XsdType::Int),
            Ok(ParameterValue::Int(5))
        );
        // Strings are parsed
        assert_eq!(
            ParameterValue::String("300".into()).coerce(XsdType::UnsignedInt),
            Ok(ParameterValue::UnsignedInt(300))
        );
        // Integers convert when they fit
        assert_eq!(
            ParameterValue::Int(7).coerce(XsdType::UnsignedLong),
            Ok(ParameterValue::UnsignedLong(7))
        );
        assert!(matches!(
            ParameterValue::Int(-7).coerce(XsdType::UnsignedInt),
            Err(ModelError::InvalidValue { .. })
        ));
        // Everything else is a mismatch
        assert_eq!(
            ParameterValue::Boolean(true).coerce(XsdType::UnsignedInt),
            Err(ModelError::TypeMismatch {
                expected: XsdType::UnsignedInt,
                found: XsdType::Boolean
            })
        );
        assert_eq!(
            ParameterValue::UnsignedInt(1).coerce(XsdType::String),
            Err(ModelError::TypeMismatch {
                expected: XsdType::String,
                found: XsdType::UnsignedInt
            })
        );
    }
}
