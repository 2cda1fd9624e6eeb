// crates/cwmp-model-xml/src/builder.rs

use crate::EncodeOptions;
use crate::error::XmlError;
use crate::model::{ParameterInfoList, ParameterValueList, SOAP_ENC_NS, XSD_NS, XSI_NS};
use crate::resolver::{self, INFO_STRUCT, VALUE_STRUCT};
use alloc::string::String;
use cwmp_model::{ManagedObject, ParameterName, ParameterValue, tree};
use core::fmt::Write;
use serde::Serialize;

fn write_document<T: Serialize>(doc: &T, options: &EncodeOptions) -> Result<String, XmlError> {
    let mut buffer = String::new();
    if options.xml_declaration {
        write!(&mut buffer, "{}", "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n")?;
    }

    let mut serializer = quick_xml::se::Serializer::new(&mut buffer);
    if let Some(width) = options.indent {
        serializer.indent(' ', width);
    }
    doc.serialize(serializer)?;
    Ok(buffer)
}

/// Serializes a model struct as one element per populated field.
///
/// The root element is the struct's own name (e.g. `<DeviceInfo>`), children are
/// named by the standard parameter names and table rows repeat their element.
///
/// # Errors
/// Returns an `XmlError` if serialization fails.
pub fn save_object_to_string<T: Serialize>(
    object: &T,
    options: &EncodeOptions,
) -> Result<String, XmlError> {
    write_document(object, options)
}

/// Namespace declaration for a standalone document. An embedded fragment relies on
/// the enclosing SOAP envelope to declare the prefixes.
fn standalone_ns(options: &EncodeOptions, uri: &str) -> Option<String> {
    options.xml_declaration.then(|| String::from(uri))
}

/// Serializes `(path, value)` pairs as a `ParameterList` of `ParameterValueStruct`.
///
/// Each `Value` carries the `xsi:type` of the value's CWMP type. With
/// `xml_declaration` the root also declares the `soap-enc`, `xsd` and `xsi` prefixes.
pub fn save_parameter_values_to_string(
    values: &[(String, ParameterValue)],
    options: &EncodeOptions,
) -> Result<String, XmlError> {
    let list = ParameterValueList {
        xmlns_soap_enc: standalone_ns(options, SOAP_ENC_NS),
        xmlns_xsd: standalone_ns(options, XSD_NS),
        xmlns_xsi: standalone_ns(options, XSI_NS),
        array_type: Some(resolver::array_type(VALUE_STRUCT, values.len())),
        items: values
            .iter()
            .map(|(name, value)| resolver::value_to_wire(name, value))
            .collect(),
    };
    write_document(&list, options)
}

/// Serializes a GetParameterNames result as a `ParameterList` of
/// `ParameterInfoStruct`. `Writable` is written as `0`/`1`.
pub fn save_parameter_names_to_string(
    names: &[ParameterName],
    options: &EncodeOptions,
) -> Result<String, XmlError> {
    let list = ParameterInfoList {
        xmlns_soap_enc: standalone_ns(options, SOAP_ENC_NS),
        array_type: Some(resolver::array_type(INFO_STRUCT, names.len())),
        items: names.iter().map(resolver::name_to_wire).collect(),
    };
    write_document(&list, options)
}

/// Reads every populated parameter at or below `path` (see
/// [`tree::get_parameter_values`]) and serializes them as a `ParameterList`.
pub fn save_tree_values_to_string(
    root: &dyn ManagedObject,
    path: &str,
    options: &EncodeOptions,
) -> Result<String, XmlError> {
    let values = tree::get_parameter_values(root, path)?;
    save_parameter_values_to_string(&values, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_declaration_and_indent_follow_options() {
        let values = vec![(
            String::from("Device.DeviceInfo.UpTime"),
            ParameterValue::UnsignedInt(42),
        )];

        let pretty = save_parameter_values_to_string(&values, &EncodeOptions::default()).unwrap();
        assert!(pretty.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<ParameterList"));
        assert!(pretty.contains("\n  <ParameterValueStruct>"));
        assert!(pretty.contains("xmlns:soap-enc=\"http://schemas.xmlsoap.org/soap/encoding/\""));
        assert!(pretty.contains("xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\""));
        assert!(pretty.contains("xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\""));

        let compact = save_parameter_values_to_string(&values, &EncodeOptions::compact()).unwrap();
        assert!(compact.starts_with("<ParameterList"));
        assert!(!compact.contains('\n'));
        assert!(!compact.contains("xmlns:"));
        assert!(compact.contains("soap-enc:arrayType=\"cwmp:ParameterValueStruct[1]\""));
        assert!(compact.contains("<Value xsi:type=\"xsd:unsignedInt\">42</Value>"));
    }

    #[test]
    fn test_writable_is_numeric() {
        let names = vec![ParameterName {
            name: String::from("Device.DeviceInfo.ProvisioningCode"),
            writable: true,
        }];
        let xml = save_parameter_names_to_string(&names, &EncodeOptions::compact()).unwrap();
        assert!(xml.contains("<Writable>1</Writable>"));
        assert!(xml.contains("cwmp:ParameterInfoStruct[1]"));

        let xml = save_parameter_names_to_string(&names, &EncodeOptions::default()).unwrap();
        assert!(xml.contains("<ParameterList xmlns:soap-enc=\"http://schemas.xmlsoap.org/soap/encoding/\" soap-enc:arrayType="));
    }
}
