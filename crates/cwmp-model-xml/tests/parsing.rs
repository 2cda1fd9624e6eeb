// crates/cwmp-model-xml/tests/parsing.rs

use cwmp_model::tr098::{DeviceInfo, InternetGatewayDevice, LANDevice};
use cwmp_model::tr181::{Device, Ethernet, Interface};
use cwmp_model::{DateTime, ParamList, ParameterName, ParameterValue, tree, validate};
use cwmp_model_xml::{
    EncodeOptions, apply_parameter_values, load_object_from_str, load_parameter_names_from_str,
    load_parameter_values_from_str, save_object_to_string, save_parameter_names_to_string,
    save_tree_values_to_string,
};
use std::fs;
use std::path::PathBuf;

/// Helper function to load a test file from the `tests/data/` directory.
fn load_test_file(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e))
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_load_igd_document() {
    init_logger();
    let xml = load_test_file("igd_document.xml");
    let igd: InternetGatewayDevice = load_object_from_str(&xml).expect("Failed to parse IGD document");

    let info = igd.device_info.as_ref().unwrap();
    assert_eq!(info.manufacturer.as_deref(), Some("ACME Networks"));
    assert_eq!(info.up_time, Some(86400));
    assert_eq!(info.first_use_date, Some(DateTime::new("2025-11-03T08:15:00Z")));
    assert_eq!(info.model_name, None);
    assert_eq!(
        info.additional_software_version,
        ParamList::new().with("boot-1.1").with("dsp-7.2")
    );

    assert_eq!(igd.lan_device.len(), 1);
    let lan = &igd.lan_device[0];
    assert_eq!(lan.lan_ethernet_interface_config.len(), 2);
    assert_eq!(lan.lan_ethernet_interface_config[1].enable, Some(false));
    let hosts = lan.lan_host_config_management.as_ref().unwrap();
    assert_eq!(hosts.dhcp_lease_time, Some(-1));
    assert_eq!(hosts.dns_servers.as_slice(), ["192.168.1.1", "8.8.8.8"]);
    assert!(lan.wlan_configuration.is_empty());

    let mapping = &igd.wan_device[0].wan_connection_device[0].wanip_connection[0].port_mapping[0];
    assert_eq!(mapping.external_port, Some(8080));
    assert_eq!(mapping.port_mapping_protocol.as_deref(), Some("TCP"));

    // The fixture is a consistent tree
    assert_eq!(validate(&igd), Vec::new());
}

#[test]
fn test_document_round_trip() {
    init_logger();
    let xml = load_test_file("igd_document.xml");
    let igd: InternetGatewayDevice = load_object_from_str(&xml).unwrap();

    let saved = save_object_to_string(&igd, &EncodeOptions::default()).unwrap();
    assert!(saved.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<InternetGatewayDevice>"));
    // Unset parameters and empty tables are omitted
    assert!(!saved.contains("ModelName"));
    assert!(!saved.contains("WLANConfiguration"));
    assert!(saved.contains("<DNSServers>192.168.1.1,8.8.8.8</DNSServers>"));

    let reloaded: InternetGatewayDevice = load_object_from_str(&saved).unwrap();
    assert_eq!(reloaded, igd);
}

#[test]
fn test_object_element_names() {
    init_logger();
    let info = DeviceInfo {
        manufacturer_oui: Some("00D09E".into()),
        up_time: Some(7),
        ..Default::default()
    };
    let xml = save_object_to_string(&info, &EncodeOptions::compact()).unwrap();
    assert_eq!(
        xml,
        "<DeviceInfo><ManufacturerOUI>00D09E</ManufacturerOUI><UpTime>7</UpTime></DeviceInfo>"
    );
}

#[test]
fn test_load_parameter_values() {
    init_logger();
    let xml = load_test_file("parameter_values.xml");
    let values = load_parameter_values_from_str(&xml).unwrap();
    assert_eq!(values.len(), 5);
    assert_eq!(
        values[0],
        (
            "InternetGatewayDevice.ManagementServer.PeriodicInformEnable".to_string(),
            ParameterValue::Boolean(true)
        )
    );
    assert_eq!(values[1].1, ParameterValue::UnsignedInt(300));
    assert_eq!(
        values[2].1,
        ParameterValue::DateTime(DateTime::new("2026-01-01T03:00:00Z"))
    );
    // No xsi:type means xsd:string
    assert_eq!(values[3].1, ParameterValue::String("pool.ntp.org".into()));
}

#[test]
fn test_apply_parameter_values() {
    init_logger();
    let mut igd = InternetGatewayDevice {
        lan_device: vec![LANDevice::default()],
        ..Default::default()
    };
    let xml = load_test_file("parameter_values.xml");
    assert_eq!(apply_parameter_values(&mut igd, &xml).unwrap(), 5);

    let ms = igd.management_server.as_ref().unwrap();
    assert_eq!(ms.periodic_inform_enable, Some(true));
    assert_eq!(ms.periodic_inform_interval, Some(300));
    assert_eq!(
        igd.time.as_ref().and_then(|t| t.ntp_server1.as_deref()),
        Some("pool.ntp.org")
    );
    let lan = igd.lan_device[0].lan_host_config_management.as_ref().unwrap();
    assert_eq!(lan.dns_servers.as_slice(), ["192.168.1.1", "9.9.9.9"]);
}

fn sample_device() -> Device {
    Device {
        ethernet: Some(Ethernet {
            interface_number_of_entries: Some(1),
            interface: vec![Interface {
                enable: Some(true),
                name: Some("eth0".into()),
                max_bit_rate: Some(-1),
                lower_layers: ParamList::new().with("Device.Optical.Interface.1"),
                ..Default::default()
            }],
        }),
        ..Default::default()
    }
}

#[test]
fn test_tree_values_round_trip() {
    init_logger();
    let device = sample_device();
    let xml = save_tree_values_to_string(&device, "Device.Ethernet.", &EncodeOptions::default()).unwrap();
    assert!(xml.contains("cwmp:ParameterValueStruct[5]"));
    assert!(xml.contains("<Value xsi:type=\"xsd:int\">-1</Value>"));

    let parsed = load_parameter_values_from_str(&xml).unwrap();
    assert_eq!(parsed, tree::get_parameter_values(&device, "Device.Ethernet.").unwrap());
}

#[test]
fn test_parameter_names_round_trip() {
    init_logger();
    let xml = load_test_file("parameter_names.xml");
    let names = load_parameter_names_from_str(&xml).unwrap();
    assert_eq!(
        names,
        vec![
            ParameterName {
                name: "Device.Ethernet.".into(),
                writable: false
            },
            ParameterName {
                name: "Device.Ethernet.InterfaceNumberOfEntries".into(),
                writable: false
            },
            ParameterName {
                name: "Device.Ethernet.Interface.1.Enable".into(),
                writable: true
            },
        ]
    );

    let device = sample_device();
    let from_tree = tree::get_parameter_names(&device, "Device.Ethernet.Interface.1.", true).unwrap();
    let saved = save_parameter_names_to_string(&from_tree, &EncodeOptions::compact()).unwrap();
    assert_eq!(load_parameter_names_from_str(&saved).unwrap(), from_tree);
}
