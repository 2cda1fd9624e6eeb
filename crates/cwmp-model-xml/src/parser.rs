// crates/cwmp-model-xml/src/parser.rs

use crate::error::XmlError;
use crate::model::{ParameterInfoList, ParameterValueList};
use crate::resolver;
use alloc::string::String;
use alloc::vec::Vec;
use cwmp_model::{ParameterName, ParameterValue};
use log::trace;
use serde::de::DeserializeOwned;

/// Parses a document written by `save_object_to_string` back into a model struct.
///
/// Elements that are absent leave the field unset (or the list/table empty).
/// The root element's name is not checked.
///
/// # Errors
/// Returns `XmlError::XmlParsing` for malformed XML or a field whose text does
/// not parse as the field's type.
pub fn load_object_from_str<T: DeserializeOwned>(xml_content: &str) -> Result<T, XmlError> {
    Ok(quick_xml::de::from_str(xml_content)?)
}

/// Parses a `ParameterList` of `ParameterValueStruct` into typed values, in
/// document order.
///
/// # Errors
/// - `XmlError::UnsupportedType` for an unknown `xsi:type`;
/// - `XmlError::MissingElement` for a struct without `Value`;
/// - `XmlError::Model` for text that is not a valid lexical form of its type.
pub fn load_parameter_values_from_str(
    xml_content: &str,
) -> Result<Vec<(String, ParameterValue)>, XmlError> {
    let list: ParameterValueList = quick_xml::de::from_str(xml_content)?;
    resolver::check_count(list.array_type.as_deref(), list.items.len());
    trace!("Parsed {} ParameterValueStruct entries", list.items.len());
    list.items
        .into_iter()
        .map(resolver::value_from_wire)
        .collect()
}

/// Parses a `ParameterList` of `ParameterInfoStruct`.
pub fn load_parameter_names_from_str(xml_content: &str) -> Result<Vec<ParameterName>, XmlError> {
    let list: ParameterInfoList = quick_xml::de::from_str(xml_content)?;
    resolver::check_count(list.array_type.as_deref(), list.items.len());
    trace!("Parsed {} ParameterInfoStruct entries", list.items.len());
    list.items
        .into_iter()
        .map(resolver::name_from_wire)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREAMBLE: &str = r#"<ParameterList xmlns:soap-enc="http://schemas.xmlsoap.org/soap/encoding/" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#;

    #[test]
    fn test_prefixed_xsi_type_is_read() {
        let xml = alloc::format!(
            "{} soap-enc:arrayType=\"cwmp:ParameterValueStruct[1]\"><ParameterValueStruct><Name>Device.DeviceInfo.UpTime</Name><Value xsi:type=\"xsd:unsignedInt\">300</Value></ParameterValueStruct></ParameterList>",
            PREAMBLE
        );
        let values = load_parameter_values_from_str(&xml).unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].0, "Device.DeviceInfo.UpTime");
        assert_eq!(values[0].1, ParameterValue::UnsignedInt(300));
    }

    #[test]
    fn test_prefixed_array_type_is_read() {
        let xml = alloc::format!(
            "{} soap-enc:arrayType=\"cwmp:ParameterValueStruct[4]\"><ParameterValueStruct><Name>Device.DeviceInfo.UpTime</Name><Value xsi:type=\"xsd:unsignedInt\">1</Value></ParameterValueStruct></ParameterList>",
            PREAMBLE
        );
        let list: ParameterValueList = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!(list.array_type.as_deref(), Some("cwmp:ParameterValueStruct[4]"));
        assert!(!resolver::check_count(list.array_type.as_deref(), list.items.len()));

        // The mismatch is tolerated.
        assert_eq!(load_parameter_values_from_str(&xml).unwrap().len(), 1);
    }

    #[test]
    fn test_prefixed_unknown_xsi_type_is_rejected() {
        let xml = alloc::format!(
            "{}><ParameterValueStruct><Name>Device.DeviceInfo.UpTime</Name><Value xsi:type=\"xsd:float\">1.5</Value></ParameterValueStruct></ParameterList>",
            PREAMBLE
        );
        match load_parameter_values_from_str(&xml) {
            Err(XmlError::UnsupportedType(t)) => assert_eq!(t, "xsd:float"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_info_list_array_type_is_read() {
        let xml = r#"<ParameterList soap-enc:arrayType="cwmp:ParameterInfoStruct[1]"><ParameterInfoStruct><Name>Device.DeviceInfo.</Name><Writable>false</Writable></ParameterInfoStruct></ParameterList>"#;
        let list: ParameterInfoList = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(list.array_type.as_deref(), Some("cwmp:ParameterInfoStruct[1]"));
        let names = load_parameter_names_from_str(xml).unwrap();
        assert_eq!(names.len(), 1);
        assert!(!names[0].writable);
    }
}
