// crates/cwmp-model/src/object.rs

use crate::error::ModelError;
use crate::meta::ObjectInfo;
use crate::types::{Base64, DateTime, HexBinary, ParamList, XsdType};
use crate::value::ParameterValue;
use alloc::string::String;

/// A Rust type that can back a parameter field.
pub trait ParamField: Sized {
    const TYPE: XsdType;

    fn to_value(&self) -> ParameterValue;

    /// Converts a value into the field type, coercing when the types differ.
    fn from_value(value: ParameterValue) -> Result<Self, ModelError>;
}

// Helper macro for the scalar field types
macro_rules! impl_param_field {
    ($type:ty, $variant:ident) => {
        impl ParamField for $type {
            const TYPE: XsdType = XsdType::$variant;

            fn to_value(&self) -> ParameterValue {
                ParameterValue::$variant(self.clone())
            }

            fn from_value(value: ParameterValue) -> Result<Self, ModelError> {
                match value.coerce(Self::TYPE)? {
                    ParameterValue::$variant(v) => Ok(v),
                    other => Err(ModelError::TypeMismatch {
                        expected: Self::TYPE,
                        found: other.xsd_type(),
                    }),
                }
            }
        }
    };
}

impl_param_field!(bool, Boolean);
impl_param_field!(i32, Int);
impl_param_field!(u32, UnsignedInt);
impl_param_field!(i64, Long);
impl_param_field!(u64, UnsignedLong);
impl_param_field!(String, String);
impl_param_field!(DateTime, DateTime);
impl_param_field!(Base64, Base64);
impl_param_field!(HexBinary, HexBinary);

impl ParamField for ParamList {
    const TYPE: XsdType = XsdType::String;

    fn to_value(&self) -> ParameterValue {
        ParameterValue::String(self.to_lexical())
    }

    fn from_value(value: ParameterValue) -> Result<Self, ModelError> {
        match value {
            ParameterValue::String(s) => Ok(ParamList::parse(&s)),
            other => Err(ModelError::TypeMismatch {
                expected: XsdType::String,
                found: other.xsd_type(),
            }),
        }
    }
}

/// Name-based access to one node of a data-model tree.
///
/// Implemented by every model struct through `managed_object!`. Names are the
/// standard names (`SoftwareVersion`, `LANDevice`) of this node's direct members.
pub trait ManagedObject {
    fn info(&self) -> &'static ObjectInfo;

    /// `Ok(None)` when the parameter exists but is not populated.
    fn parameter(&self, name: &str) -> Result<Option<ParameterValue>, ModelError>;

    fn set_parameter(&mut self, name: &str, value: ParameterValue) -> Result<(), ModelError>;

    /// `Ok(None)` when the one-to-one child exists in the schema but is not populated.
    fn child(&self, name: &str) -> Result<Option<&dyn ManagedObject>, ModelError>;

    /// Returns the child, creating a default one if it is absent.
    fn child_mut(&mut self, name: &str) -> Result<&mut dyn ManagedObject, ModelError>;

    fn instance_count(&self, table: &str) -> Result<usize, ModelError>;

    fn instance(&self, table: &str, number: u32) -> Result<&dyn ManagedObject, ModelError>;

    fn instance_mut(&mut self, table: &str, number: u32)
    -> Result<&mut dyn ManagedObject, ModelError>;

    /// Appends a default row and returns its instance number.
    fn add_instance(&mut self, table: &str) -> Result<u32, ModelError>;
}

/// A concrete model struct with static metadata.
pub trait ObjectType: ManagedObject + Default {
    fn object_info() -> &'static ObjectInfo;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_scalar_fields_coerce() {
        assert_eq!(u32::from_value(ParameterValue::String("42".into())), Ok(42));
        assert_eq!(i64::from_value(ParameterValue::UnsignedInt(42)), Ok(42));
        assert_eq!(
            bool::from_value(ParameterValue::Int(1)),
            Err(ModelError::TypeMismatch {
                expected: XsdType::Boolean,
                found: XsdType::Int
            })
        );
        assert_eq!(
            HexBinary::from_value(ParameterValue::String("FF00".into())),
            Ok(HexBinary(vec![0xFF, 0x00]))
        );
    }

    #[test]
    fn test_list_field_value() {
        let list = ParamList::new().with("G.711MuLaw").with("G.729");
        assert_eq!(
            list.to_value(),
            ParameterValue::String("G.711MuLaw,G.729".into())
        );
        assert_eq!(
            ParamList::from_value(ParameterValue::String("a,b".into())),
            Ok(ParamList::new().with("a").with("b"))
        );
        assert!(ParamList::from_value(ParameterValue::Boolean(true)).is_err());
    }
}
