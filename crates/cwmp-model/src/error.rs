// crates/cwmp-model/src/error.rs

use crate::types::XsdType;
use alloc::string::String;
use core::fmt;

/// Errors raised by name- and path-based access to a managed-object tree.
///
/// Plain field access never fails; only the `ManagedObject`, `tree` and
/// lexical parsing entry points return this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// No parameter with this name (or full path) exists, or it is not populated.
    ParameterNotFound(String),
    /// No object or table with this name (or partial path) exists.
    ObjectNotFound(String),
    /// The table exists but has no row with this instance number.
    InstanceNotFound { table: String, instance: u32 },
    /// The path is syntactically invalid or addresses the wrong kind of node.
    InvalidPath(String),
    /// The request combines arguments the operation does not accept.
    InvalidArguments(&'static str),
    /// A value of one type was supplied where another was declared.
    TypeMismatch { expected: XsdType, found: XsdType },
    /// The lexical form could not be parsed as the declared type.
    InvalidValue { ty: XsdType, value: String },
    /// An attempt was made to write a read-only parameter or a fixed table.
    NotWritable(String),
    /// The table already holds its maximum number of rows.
    ResourcesExceeded(String),
    /// The notification change is refused by the parameter's notify policy.
    NotificationRejected(String),
}

impl ModelError {
    /// Maps the error to the TR-069 CPE fault code an agent would report.
    pub fn fault_code(&self) -> u16 {
        match self {
            Self::ParameterNotFound(_)
            | Self::ObjectNotFound(_)
            | Self::InstanceNotFound { .. }
            | Self::InvalidPath(_) => 9005,
            Self::InvalidArguments(_) => 9003,
            Self::TypeMismatch { .. } => 9006,
            Self::InvalidValue { .. } => 9007,
            Self::NotWritable(_) => 9008,
            Self::ResourcesExceeded(_) => 9004,
            Self::NotificationRejected(_) => 9009,
        }
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParameterNotFound(p) => write!(f, "Parameter not found: {}", p),
            Self::ObjectNotFound(p) => write!(f, "Object not found: {}", p),
            Self::InstanceNotFound { table, instance } => {
                write!(f, "Instance {} not found in table {}", instance, table)
            }
            Self::InvalidPath(p) => write!(f, "Invalid parameter path: {:?}", p),
            Self::InvalidArguments(s) => write!(f, "Invalid arguments: {}", s),
            Self::TypeMismatch { expected, found } => write!(
                f,
                "Type mismatch: expected {} but got {}",
                expected.xsi_type(),
                found.xsi_type()
            ),
            Self::InvalidValue { ty, value } => {
                write!(f, "Invalid {} value: {:?}", ty.xsi_type(), value)
            }
            Self::NotWritable(p) => write!(f, "Attempt to set a non-writable parameter: {}", p),
            Self::ResourcesExceeded(p) => write!(f, "Resources exceeded for table: {}", p),
            Self::NotificationRejected(p) => {
                write!(f, "Notification request rejected for: {}", p)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ModelError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_fault_codes() {
        assert_eq!(ModelError::ParameterNotFound("A.B".into()).fault_code(), 9005);
        assert_eq!(ModelError::InvalidArguments("x").fault_code(), 9003);
        assert_eq!(
            ModelError::TypeMismatch {
                expected: XsdType::Boolean,
                found: XsdType::String
            }
            .fault_code(),
            9006
        );
        assert_eq!(ModelError::NotWritable("A.B".into()).fault_code(), 9008);
        assert_eq!(ModelError::ResourcesExceeded("A.T.".into()).fault_code(), 9004);
        assert_eq!(ModelError::NotificationRejected("A.B".into()).fault_code(), 9009);
    }

    #[test]
    fn test_display_uses_xsi_names() {
        let err = ModelError::InvalidValue {
            ty: XsdType::UnsignedInt,
            value: "-1".into(),
        };
        assert_eq!(err.to_string(), "Invalid xsd:unsignedInt value: \"-1\"");
    }
}
