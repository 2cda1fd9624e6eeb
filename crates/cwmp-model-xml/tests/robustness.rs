//! Integration tests focused on error handling and edge cases.
//!
//! These tests ensure the codec reports malformed XML, unknown types, bad
//! lexical values and rejected writes without panicking.

use cwmp_model::tr098::{InternetGatewayDevice, ManagementServer};
use cwmp_model::{ModelError, XsdType};
use cwmp_model_xml::{
    XmlError, apply_parameter_values, load_object_from_str, load_parameter_names_from_str,
    load_parameter_values_from_str,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wraps `ParameterValueStruct` elements in a `ParameterList` declaring `count` entries.
fn parameter_list(count: usize, body: &str) -> String {
    format!(
        r#"<ParameterList xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" soap-enc:arrayType="cwmp:ParameterValueStruct[{}]">{}</ParameterList>"#,
        count, body
    )
}

fn value_struct(name: &str, ty: &str, text: &str) -> String {
    format!(
        r#"<ParameterValueStruct><Name>{}</Name><Value xsi:type="{}">{}</Value></ParameterValueStruct>"#,
        name, ty, text
    )
}

#[test]
fn test_malformed_xml() {
    init_logger();
    let xml = "<ParameterList><ParameterValueStruct><Name>Device.</Name>";
    assert!(matches!(
        load_parameter_values_from_str(xml),
        Err(XmlError::XmlParsing(_))
    ));
    assert!(matches!(
        load_object_from_str::<InternetGatewayDevice>("<InternetGatewayDevice><DeviceInfo>"),
        Err(XmlError::XmlParsing(_))
    ));
}

#[test]
fn test_missing_name_is_a_parse_error() {
    init_logger();
    let xml = parameter_list(
        1,
        r#"<ParameterValueStruct><Value xsi:type="xsd:string">x</Value></ParameterValueStruct>"#,
    );
    assert!(matches!(
        load_parameter_values_from_str(&xml),
        Err(XmlError::XmlParsing(_))
    ));
}

#[test]
fn test_missing_value() {
    init_logger();
    let xml = parameter_list(
        1,
        "<ParameterValueStruct><Name>InternetGatewayDevice.Time.Enable</Name></ParameterValueStruct>",
    );
    assert!(matches!(
        load_parameter_values_from_str(&xml),
        Err(XmlError::MissingElement { element: "Value" })
    ));
}

#[test]
fn test_unknown_xsi_type() {
    init_logger();
    let xml = parameter_list(
        1,
        &value_struct("InternetGatewayDevice.DeviceInfo.UpTime", "xsd:float", "1.5"),
    );
    match load_parameter_values_from_str(&xml) {
        Err(XmlError::UnsupportedType(t)) => assert_eq!(t, "xsd:float"),
        other => panic!("expected UnsupportedType, got {:?}", other),
    }
}

#[test]
fn test_bad_lexical_value() {
    init_logger();
    let xml = parameter_list(
        1,
        &value_struct(
            "InternetGatewayDevice.ManagementServer.PeriodicInformInterval",
            "xsd:unsignedInt",
            "-5",
        ),
    );
    match load_parameter_values_from_str(&xml) {
        Err(XmlError::Model(ModelError::InvalidValue { ty, value })) => {
            assert_eq!(ty, XsdType::UnsignedInt);
            assert_eq!(value, "-5");
        }
        other => panic!("expected InvalidValue, got {:?}", other),
    }

    let xml = parameter_list(
        1,
        &value_struct(
            "InternetGatewayDevice.ManagementServer.PeriodicInformTime",
            "xsd:dateTime",
            "yesterday",
        ),
    );
    assert!(matches!(
        load_parameter_values_from_str(&xml),
        Err(XmlError::Model(ModelError::InvalidValue { .. }))
    ));
}

#[test]
fn test_bad_element_text_in_document() {
    init_logger();
    let xml = "<ManagementServer><PeriodicInformInterval>soon</PeriodicInformInterval></ManagementServer>";
    assert!(matches!(
        load_object_from_str::<ManagementServer>(xml),
        Err(XmlError::XmlParsing(_))
    ));
}

#[test]
fn test_array_type_count_mismatch_is_tolerated() {
    init_logger();
    let body = value_struct("InternetGatewayDevice.Time.NTPServer1", "xsd:string", "ntp1");
    let values = load_parameter_values_from_str(&parameter_list(4, &body)).unwrap();
    assert_eq!(values.len(), 1);

    let names = load_parameter_names_from_str(
        r#"<ParameterList soap-enc:arrayType="cwmp:ParameterInfoStruct[]"></ParameterList>"#,
    )
    .unwrap();
    assert!(names.is_empty());
}

#[test]
fn test_apply_rejects_read_only_and_leaves_tree_unchanged() {
    init_logger();
    let mut igd = InternetGatewayDevice::default();
    let body = [
        value_struct(
            "InternetGatewayDevice.ManagementServer.PeriodicInformInterval",
            "xsd:unsignedInt",
            "60",
        ),
        value_struct(
            "InternetGatewayDevice.DeviceInfo.Manufacturer",
            "xsd:string",
            "Evil Corp",
        ),
    ]
    .concat();
    let err = apply_parameter_values(&mut igd, &parameter_list(2, &body)).unwrap_err();
    match err {
        XmlError::Model(e) => {
            assert_eq!(
                e,
                ModelError::NotWritable("InternetGatewayDevice.DeviceInfo.Manufacturer".into())
            );
            assert_eq!(e.fault_code(), 9008);
        }
        other => panic!("expected NotWritable, got {:?}", other),
    }
    assert_eq!(igd, InternetGatewayDevice::default());
}

#[test]
fn test_apply_type_mismatch() {
    init_logger();
    let mut igd = InternetGatewayDevice::default();
    let body = value_struct(
        "InternetGatewayDevice.ManagementServer.PeriodicInformEnable",
        "xsd:dateTime",
        "2026-01-01T00:00:00Z",
    );
    match apply_parameter_values(&mut igd, &parameter_list(1, &body)) {
        Err(XmlError::Model(e)) => assert_eq!(e.fault_code(), 9006),
        other => panic!("expected TypeMismatch, got {:?}", other),
    }
}

#[test]
fn test_apply_unknown_parameter() {
    init_logger();
    let mut igd = InternetGatewayDevice::default();
    let body = value_struct("InternetGatewayDevice.Bogus.Thing", "xsd:string", "x");
    match apply_parameter_values(&mut igd, &parameter_list(1, &body)) {
        Err(XmlError::Model(e)) => assert_eq!(e.fault_code(), 9005),
        other => panic!("expected not found, got {:?}", other),
    }
}
