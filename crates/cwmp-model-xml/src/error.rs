// crates/cwmp-model-xml/src/error.rs

use alloc::fmt;
use alloc::string::String;
use cwmp_model::ModelError;
use quick_xml::errors::serialize::DeError;
use quick_xml::errors::serialize::SeError;

/// Errors that can occur while encoding or decoding CWMP XML.
#[derive(Debug)]
pub enum XmlError {
    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// An error from the underlying `quick-xml` serializer.
    XmlSerializing(SeError),

    /// Writing the XML declaration into the output buffer failed.
    FmtError(fmt::Error),

    /// A `Value` carried an `xsi:type` that is not one of the CWMP types.
    UnsupportedType(String),

    /// A required XML element was missing (e.g., `Value`).
    MissingElement { element: &'static str },

    /// The data model rejected a name or a value.
    Model(ModelError),
}

impl From<DeError> for XmlError {
    fn from(e: DeError) -> Self {
        XmlError::XmlParsing(e)
    }
}

impl From<SeError> for XmlError {
    fn from(e: SeError) -> Self {
        XmlError::XmlSerializing(e)
    }
}

impl From<fmt::Error> for XmlError {
    fn from(e: fmt::Error) -> Self {
        XmlError::FmtError(e)
    }
}

impl From<ModelError> for XmlError {
    fn from(e: ModelError) -> Self {
        XmlError::Model(e)
    }
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XmlError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            XmlError::XmlSerializing(e) => write!(f, "XML serializing error: {}", e),
            XmlError::FmtError(e) => write!(f, "Formatting error: {}", e),
            XmlError::UnsupportedType(t) => write!(f, "Unsupported xsi:type: {:?}", t),
            XmlError::MissingElement { element } => {
                write!(f, "Missing required XML element: {}", element)
            }
            XmlError::Model(e) => write!(f, "Data model error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::XmlError;
    use alloc::string::ToString;
    use cwmp_model::ModelError;

    #[test]
    fn test_from_de_error() {
        let xml_err = quick_xml::de::from_str::<crate::model::ParameterValueList>("<a></b>").unwrap_err();
        let err: XmlError = xml_err.into();
        assert!(matches!(err, XmlError::XmlParsing(_)));
    }

    #[test]
    fn test_from_se_error() {
        let xml_err = quick_xml::errors::serialize::SeError::Custom("test error".to_string());
        let err: XmlError = xml_err.into();
        assert!(matches!(err, XmlError::XmlSerializing(_)));
    }

    #[test]
    fn test_from_model_error_keeps_fault_code() {
        let err: XmlError = ModelError::NotWritable("Device.DeviceInfo.Manufacturer".into()).into();
        match err {
            XmlError::Model(e) => assert_eq!(e.fault_code(), 9008),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        let err = XmlError::UnsupportedType("xsd:float".into());
        assert_eq!(err.to_string(), "Unsupported xsi:type: \"xsd:float\"");
        let err = XmlError::MissingElement { element: "Value" };
        assert_eq!(err.to_string(), "Missing required XML element: Value");
    }
}
