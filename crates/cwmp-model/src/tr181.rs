// crates/cwmp-model/src/tr181.rs

//! TR-181 `Device:2` root data model (device info, bridging, Ethernet).

use crate::macros::managed_object;
use crate::meta::{Access, ActiveNotify, SizeRange, ValueRange};
use crate::types::DateTime;
use alloc::string::String;

const INTERFACE_STATUS: &[&str] = &[
    "Up",
    "Down",
    "Unknown",
    "Dormant",
    "NotPresent",
    "LowerLayerDown",
    "Error",
];

managed_object! {
    /// The root object of a TR-181 device.
    pub struct Device ("Device.") as "Device" {
        params {
            root_data_model_version: String => "RootDataModelVersion" {
                size: SizeRange::max(32),
                forced_inform: true,
            };
        }
        objects {
            device_info: DeviceInfo => "DeviceInfo";
            bridging: Bridging => "Bridging";
            ethernet: Ethernet => "Ethernet";
        }
    }
}

managed_object! {
    pub struct DeviceInfo ("Device.DeviceInfo.") as "DeviceInfo" {
        params {
            manufacturer: String => "Manufacturer" { size: SizeRange::max(64) };
            manufacturer_oui: String => "ManufacturerOUI" { size: SizeRange::exact(6) };
            model_name: String => "ModelName" { size: SizeRange::max(64) };
            description: String => "Description" { size: SizeRange::max(256) };
            product_class: String => "ProductClass" { size: SizeRange::max(64) };
            serial_number: String => "SerialNumber" { size: SizeRange::max(64) };
            hardware_version: String => "HardwareVersion" {
                size: SizeRange::max(64),
                forced_inform: true,
            };
            software_version: String => "SoftwareVersion" {
                size: SizeRange::max(64),
                forced_inform: true,
                active_notify: ActiveNotify::ForceEnabled,
            };
            provisioning_code: String => "ProvisioningCode" {
                access: Access::ReadWrite,
                size: SizeRange::max(64),
                forced_inform: true,
                active_notify: ActiveNotify::ForceEnabled,
            };
            up_time: u32 => "UpTime" { active_notify: ActiveNotify::CanDeny };
            first_use_date: DateTime => "FirstUseDate";
        }
        lists {
            additional_hardware_version => "AdditionalHardwareVersion" { size: SizeRange::max(64) };
            additional_software_version => "AdditionalSoftwareVersion" { size: SizeRange::max(64) };
        }
    }
}

// --- Bridging ---

managed_object! {
    /// Layer 2 bridges (802.1D and 802.1Q).
    pub struct Bridging ("Device.Bridging.") as "Bridging" {
        params {
            max_bridge_entries: u32 => "MaxBridgeEntries";
            max_dbridge_entries: u32 => "MaxDBridgeEntries";
            max_qbridge_entries: u32 => "MaxQBridgeEntries";
            max_vlan_entries: u32 => "MaxVLANEntries";
            bridge_number_of_entries: u32 => "BridgeNumberOfEntries";
        }
        tables {
            bridge: Bridge => "Bridge" {
                access: Access::ReadWrite,
                num_entries_parameter: Some("BridgeNumberOfEntries"),
            };
        }
    }
}

managed_object! {
    pub struct Bridge ("Device.Bridging.Bridge.{i}.") as "Bridge" {
        params {
            enable: bool => "Enable" { access: Access::ReadWrite };
            status: String => "Status" { enumeration: &["Disabled", "Enabled", "Error"] };
            alias: String => "Alias" { access: Access::ReadWrite, size: SizeRange::max(64) };
            standard: String => "Standard" {
                access: Access::ReadWrite,
                enumeration: &["802.1D-2004", "802.1Q-2005", "802.1Q-2011"],
            };
            port_number_of_entries: u32 => "PortNumberOfEntries";
            vlan_number_of_entries: u32 => "VLANNumberOfEntries";
            vlan_port_number_of_entries: u32 => "VLANPortNumberOfEntries";
        }
        tables {
            port: Port => "Port" {
                access: Access::ReadWrite,
                num_entries_parameter: Some("PortNumberOfEntries"),
            };
            vlan: VLAN => "VLAN" {
                access: Access::ReadWrite,
                num_entries_parameter: Some("VLANNumberOfEntries"),
            };
            vlan_port: VLANPort => "VLANPort" {
                access: Access::ReadWrite,
                num_entries_parameter: Some("VLANPortNumberOfEntries"),
            };
        }
        unique { ["Alias"] }
    }
}

managed_object! {
    /// A bridge port. `ManagementPort` marks the port facing the host stack.
    pub struct Port ("Device.Bridging.Bridge.{i}.Port.{i}.") as "Port" {
        params {
            enable: bool => "Enable" { access: Access::ReadWrite };
            status: String => "Status" { enumeration: INTERFACE_STATUS };
            alias: String => "Alias" { access: Access::ReadWrite, size: SizeRange::max(64) };
            name: String => "Name" { size: SizeRange::max(64) };
            last_change: u32 => "LastChange" { active_notify: ActiveNotify::CanDeny };
            management_port: bool => "ManagementPort" { access: Access::ReadWrite };
            default_user_priority: u32 => "DefaultUserPriority" {
                access: Access::ReadWrite,
                range: ValueRange::new(0, 7),
            };
            /// Port VLAN ID applied to untagged ingress frames.
            pvid: i32 => "PVID" { access: Access::ReadWrite, range: ValueRange::new(1, 4094) };
            acceptable_frame_types: String => "AcceptableFrameTypes" {
                access: Access::ReadWrite,
                enumeration: &["AdmitAll", "AdmitOnlyVLANTagged", "AdmitOnlyPrioUntagged"],
            };
            ingress_filtering: bool => "IngressFiltering" { access: Access::ReadWrite };
            priority_tagging: bool => "PriorityTagging" { access: Access::ReadWrite };
        }
        lists {
            lower_layers => "LowerLayers" { access: Access::ReadWrite, size: SizeRange::max(1024) };
            priority_regeneration => "PriorityRegeneration" { access: Access::ReadWrite };
        }
        objects {
            stats: PortStats => "Stats";
        }
        unique { ["Alias"] ["Name"] }
    }
}

managed_object! {
    pub struct PortStats ("Device.Bridging.Bridge.{i}.Port.{i}.Stats.") as "Stats" {
        params {
            bytes_sent: u64 => "BytesSent" { active_notify: ActiveNotify::CanDeny };
            bytes_received: u64 => "BytesReceived" { active_notify: ActiveNotify::CanDeny };
            packets_sent: u64 => "PacketsSent" { active_notify: ActiveNotify::CanDeny };
            packets_received: u64 => "PacketsReceived" { active_notify: ActiveNotify::CanDeny };
            errors_sent: u32 => "ErrorsSent" { active_notify: ActiveNotify::CanDeny };
            errors_received: u32 => "ErrorsReceived" { active_notify: ActiveNotify::CanDeny };
            discard_packets_sent: u32 => "DiscardPacketsSent" { active_notify: ActiveNotify::CanDeny };
            discard_packets_received: u32 => "DiscardPacketsReceived" { active_notify: ActiveNotify::CanDeny };
            unknown_proto_packets_received: u32 => "UnknownProtoPacketsReceived" {
                active_notify: ActiveNotify::CanDeny,
            };
        }
    }
}

managed_object! {
    /// An 802.1Q VLAN of a bridge.
    pub struct VLAN ("Device.Bridging.Bridge.{i}.VLAN.{i}.") as "VLAN" {
        params {
            enable: bool => "Enable" { access: Access::ReadWrite };
            alias: String => "Alias" { access: Access::ReadWrite, size: SizeRange::max(64) };
            name: String => "Name" { access: Access::ReadWrite, size: SizeRange::max(64) };
            vlanid: i32 => "VLANID" { access: Access::ReadWrite, range: ValueRange::new(1, 4094) };
        }
        unique { ["VLANID"] ["Alias"] }
    }
}

managed_object! {
    /// Membership of a port in a VLAN.
    pub struct VLANPort ("Device.Bridging.Bridge.{i}.VLANPort.{i}.") as "VLANPort" {
        params {
            enable: bool => "Enable" { access: Access::ReadWrite };
            alias: String => "Alias" { access: Access::ReadWrite, size: SizeRange::max(64) };
            /// Path of a `VLAN` row of the same bridge.
            vlan: String => "VLAN" { access: Access::ReadWrite, size: SizeRange::max(256) };
            /// Path of a `Port` row of the same bridge.
            port: String => "Port" { access: Access::ReadWrite, size: SizeRange::max(256) };
            untagged: bool => "Untagged" { access: Access::ReadWrite };
        }
        unique { ["VLAN", "Port"] ["Alias"] }
    }
}

// --- Ethernet ---

managed_object! {
    pub struct Ethernet ("Device.Ethernet.") as "Ethernet" {
        params {
            interface_number_of_entries: u32 => "InterfaceNumberOfEntries";
        }
        tables {
            interface: Interface => "Interface" {
                num_entries_parameter: Some("InterfaceNumberOfEntries"),
            };
        }
    }
}

managed_object! {
    /// A physical Ethernet port. Rows are fixed by the hardware.
    pub struct Interface ("Device.Ethernet.Interface.{i}.") as "Interface" {
        params {
            enable: bool => "Enable" { access: Access::ReadWrite };
            status: String => "Status" { enumeration: INTERFACE_STATUS };
            alias: String => "Alias" { access: Access::ReadWrite, size: SizeRange::max(64) };
            name: String => "Name" { size: SizeRange::max(64) };
            last_change: u32 => "LastChange" { active_notify: ActiveNotify::CanDeny };
            upstream: bool => "Upstream";
            mac_address: String => "MACAddress" { size: SizeRange::max(17) };
            /// Mbps. -1 means auto.
            max_bit_rate: i32 => "MaxBitRate" { access: Access::ReadWrite, range: ValueRange::min(-1) };
            current_bit_rate: u32 => "CurrentBitRate";
            duplex_mode: String => "DuplexMode" {
                access: Access::ReadWrite,
                enumeration: &["Half", "Full", "Auto"],
            };
            eee_capability: bool => "EEECapability";
        }
        lists {
            lower_layers => "LowerLayers" { access: Access::ReadWrite, size: SizeRange::max(1024) };
        }
        objects {
            stats: InterfaceStats => "Stats";
        }
        unique { ["Alias"] ["Name"] }
    }
}

managed_object! {
    pub struct InterfaceStats ("Device.Ethernet.Interface.{i}.Stats.") as "Stats" {
        params {
            bytes_sent: u64 => "BytesSent" { active_notify: ActiveNotify::CanDeny };
            bytes_received: u64 => "BytesReceived" { active_notify: ActiveNotify::CanDeny };
            packets_sent: u64 => "PacketsSent" { active_notify: ActiveNotify::CanDeny };
            packets_received: u64 => "PacketsReceived" { active_notify: ActiveNotify::CanDeny };
            errors_sent: u32 => "ErrorsSent" { active_notify: ActiveNotify::CanDeny };
            errors_received: u32 => "ErrorsReceived" { active_notify: ActiveNotify::CanDeny };
            broadcast_packets_sent: u64 => "BroadcastPacketsSent" { active_notify: ActiveNotify::CanDeny };
            broadcast_packets_received: u64 => "BroadcastPacketsReceived" {
                active_notify: ActiveNotify::CanDeny,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::schema_errors;
    use crate::object::{ManagedObject, ObjectType};
    use crate::value::ParameterValue;
    use alloc::vec::Vec;

    #[test]
    fn test_schema_is_consistent() {
        assert_eq!(schema_errors(Device::object_info()), Vec::<String>::new());
    }

    #[test]
    fn test_vlan_metadata() {
        let vlan = VLAN::object_info();
        let id = vlan.parameter("VLANID").unwrap();
        assert_eq!(id.range, ValueRange::new(1, 4094));
        assert!(id.is_writable());
        assert!(vlan.unique_keys.contains(&&["VLANID"][..]));
        assert_eq!(
            Port::object_info().parameter("PVID").unwrap().range,
            ValueRange::new(1, 4094)
        );
    }

    #[test]
    fn test_counter64_fields() {
        let mut stats = InterfaceStats::default();
        stats
            .set_parameter("BytesSent", ParameterValue::String("18446744073709551615".into()))
            .unwrap();
        assert_eq!(stats.bytes_sent, Some(u64::MAX));
    }

    #[test]
    fn test_fixed_and_dynamic_tables() {
        let ethernet = Ethernet::object_info().table("Interface").unwrap();
        assert_eq!(ethernet.access, Access::ReadOnly);
        let bridges = Bridging::object_info().table("Bridge").unwrap();
        assert_eq!(bridges.access, Access::ReadWrite);
    }
}
