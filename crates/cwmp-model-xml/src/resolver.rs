// crates/cwmp-model-xml/src/resolver.rs

//! Converts between the raw `ParameterList` structs and typed model values.

use crate::error::XmlError;
use crate::model::{ParameterInfoStruct, ParameterValueStruct, Value};
use crate::parser::load_parameter_values_from_str;
use alloc::format;
use alloc::string::String;
use cwmp_model::{ManagedObject, ParameterName, ParameterValue, XsdType, tree};
use log::{debug, warn};

pub(crate) const VALUE_STRUCT: &str = "ParameterValueStruct";
pub(crate) const INFO_STRUCT: &str = "ParameterInfoStruct";

/// `cwmp:ParameterValueStruct[3]`
pub(crate) fn array_type(item: &str, count: usize) -> String {
    format!("cwmp:{}[{}]", item, count)
}

/// Reads `N` out of `cwmp:Item[N]`.
fn declared_count(array_type: &str) -> Option<usize> {
    let open = array_type.rfind('[')?;
    let close = array_type.rfind(']')?;
    array_type.get(open + 1..close)?.trim().parse().ok()
}

/// A declared count that disagrees with the actual count is tolerated. Returns
/// `false` (after a warning) when the declaration is unreadable or wrong.
pub(crate) fn check_count(array_type: Option<&str>, actual: usize) -> bool {
    let Some(declared) = array_type else {
        return true;
    };
    match declared_count(declared) {
        Some(n) if n == actual => true,
        Some(n) => {
            warn!(
                "ParameterList declares {} entries but holds {} ({})",
                n, actual, declared
            );
            false
        }
        None => {
            warn!("Unreadable soap-enc:arrayType {:?}", declared);
            false
        }
    }
}

pub(crate) fn value_to_wire(name: &str, value: &ParameterValue) -> ParameterValueStruct {
    ParameterValueStruct {
        name: String::from(name),
        value: Some(Value {
            xsi_type: Some(String::from(value.xsd_type().xsi_type())),
            text: value.to_lexical(),
        }),
    }
}

/// Types the text by its `xsi:type`. An untyped value is a string.
pub(crate) fn value_from_wire(item: ParameterValueStruct) -> Result<(String, ParameterValue), XmlError> {
    let value = item.value.ok_or(XmlError::MissingElement { element: "Value" })?;
    let ty = match value.xsi_type.as_deref() {
        None => XsdType::String,
        Some(t) => XsdType::from_xsi_type(t).ok_or_else(|| XmlError::UnsupportedType(String::from(t)))?,
    };
    let typed = ParameterValue::parse(ty, &value.text)?;
    Ok((item.name, typed))
}

pub(crate) fn name_to_wire(name: &ParameterName) -> ParameterInfoStruct {
    ParameterInfoStruct {
        name: name.name.clone(),
        writable: Some(String::from(if name.writable { "1" } else { "0" })),
    }
}

pub(crate) fn name_from_wire(item: ParameterInfoStruct) -> Result<ParameterName, XmlError> {
    let writable = item
        .writable
        .ok_or(XmlError::MissingElement { element: "Writable" })?;
    let writable = match ParameterValue::parse(XsdType::Boolean, &writable)? {
        ParameterValue::Boolean(b) => b,
        _ => false,
    };
    Ok(ParameterName {
        name: item.name,
        writable,
    })
}

/// Parses a `ParameterValueStruct` list and writes it into `root` as one
/// SetParameterValues request. Returns the number of parameters written.
///
/// Access checks, type coercion and all-or-nothing semantics are those of
/// [`tree::set_parameter_values`].
pub fn apply_parameter_values(root: &mut dyn ManagedObject, xml: &str) -> Result<usize, XmlError> {
    let values = load_parameter_values_from_str(xml)?;
    tree::set_parameter_values(root, &values)?;
    debug!("Applied {} parameter values", values.len());
    Ok(values.len())
}
