// crates/cwmp-model/src/tr098.rs

//! TR-098 `InternetGatewayDevice:1` root data model.
//!
//! The `Services` object hosts the TR-104 and TR-196 service tables and the root
//! carries the TR-143 diagnostics objects.

use crate::macros::managed_object;
use crate::meta::{Access, ActiveNotify, SizeRange, ValueRange};
use crate::types::DateTime;
use crate::{tr104, tr143, tr196};
use alloc::string::String;

// --- Root ---

managed_object! {
    /// The root object of a TR-098 Internet Gateway Device.
    pub struct InternetGatewayDevice ("InternetGatewayDevice.") as "InternetGatewayDevice" {
        params {
            lan_device_number_of_entries: u32 => "LANDeviceNumberOfEntries";
            wan_device_number_of_entries: u32 => "WANDeviceNumberOfEntries";
            device_summary: String => "DeviceSummary" {
                size: SizeRange::max(1024),
                forced_inform: true,
            };
        }
        objects {
            device_info: DeviceInfo => "DeviceInfo";
            management_server: ManagementServer => "ManagementServer";
            time: Time => "Time";
            services: Services => "Services";
            download_diagnostics: tr143::DownloadDiagnostics => "DownloadDiagnostics";
            upload_diagnostics: tr143::UploadDiagnostics => "UploadDiagnostics";
            udp_echo_config: tr143::UDPEchoConfig => "UDPEchoConfig";
        }
        tables {
            lan_device: LANDevice => "LANDevice" {
                num_entries_parameter: Some("LANDeviceNumberOfEntries"),
            };
            wan_device: WANDevice => "WANDevice" {
                num_entries_parameter: Some("WANDeviceNumberOfEntries"),
            };
        }
    }
}

managed_object! {
    /// General device information, most of it reported in every Inform.
    pub struct DeviceInfo ("InternetGatewayDevice.DeviceInfo.") as "DeviceInfo" {
        params {
            manufacturer: String => "Manufacturer" { size: SizeRange::max(64) };
            /// Organizationally unique identifier, six hex digits.
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
            modem_firmware_version: String => "ModemFirmwareVersion" { size: SizeRange::max(64) };
            spec_version: String => "SpecVersion" {
                size: SizeRange::max(16),
                forced_inform: true,
            };
            provisioning_code: String => "ProvisioningCode" {
                access: Access::ReadWrite,
                size: SizeRange::max(64),
                forced_inform: true,
                active_notify: ActiveNotify::ForceEnabled,
            };
            /// Seconds since boot.
            up_time: u32 => "UpTime" { active_notify: ActiveNotify::CanDeny };
            first_use_date: DateTime => "FirstUseDate";
            device_log: String => "DeviceLog" {
                size: SizeRange::max(32768),
                active_notify: ActiveNotify::CanDeny,
            };
            vendor_config_file_number_of_entries: u32 => "VendorConfigFileNumberOfEntries";
        }
        lists {
            enabled_options => "EnabledOptions" { size: SizeRange::max(1024) };
            additional_hardware_version => "AdditionalHardwareVersion" { size: SizeRange::max(64) };
            additional_software_version => "AdditionalSoftwareVersion" { size: SizeRange::max(64) };
        }
        tables {
            vendor_config_file: VendorConfigFile => "VendorConfigFile" {
                num_entries_parameter: Some("VendorConfigFileNumberOfEntries"),
            };
        }
    }
}

managed_object! {
    pub struct VendorConfigFile ("InternetGatewayDevice.DeviceInfo.VendorConfigFile.{i}.") as "VendorConfigFile" {
        params {
            name: String => "Name" { size: SizeRange::max(64) };
            version: String => "Version" { size: SizeRange::max(16) };
            date: DateTime => "Date";
            description: String => "Description" { size: SizeRange::max(256) };
        }
    }
}

managed_object! {
    /// CPE parameters relating to its association with an ACS.
    pub struct ManagementServer ("InternetGatewayDevice.ManagementServer.") as "ManagementServer" {
        params {
            url: String => "URL" { access: Access::ReadWrite, size: SizeRange::max(256) };
            username: String => "Username" { access: Access::ReadWrite, size: SizeRange::max(256) };
            password: String => "Password" { access: Access::ReadWrite, size: SizeRange::max(256) };
            periodic_inform_enable: bool => "PeriodicInformEnable" { access: Access::ReadWrite };
            periodic_inform_interval: u32 => "PeriodicInformInterval" {
                access: Access::ReadWrite,
                range: ValueRange::min(1),
            };
            periodic_inform_time: DateTime => "PeriodicInformTime" { access: Access::ReadWrite };
            parameter_key: String => "ParameterKey" {
                size: SizeRange::max(32),
                forced_inform: true,
            };
            connection_request_url: String => "ConnectionRequestURL" {
                size: SizeRange::max(256),
                forced_inform: true,
                active_notify: ActiveNotify::ForceEnabled,
            };
            connection_request_username: String => "ConnectionRequestUsername" {
                access: Access::ReadWrite,
                size: SizeRange::max(256),
            };
            connection_request_password: String => "ConnectionRequestPassword" {
                access: Access::ReadWrite,
                size: SizeRange::max(256),
            };
            upgrades_managed: bool => "UpgradesManaged" { access: Access::ReadWrite };
            kick_url: String => "KickURL" { size: SizeRange::max(256) };
            download_progress_url: String => "DownloadProgressURL" { size: SizeRange::max(256) };
            default_active_notification_throttle: u32 => "DefaultActiveNotificationThrottle" {
                access: Access::ReadWrite,
            };
            cwmp_retry_minimum_wait_interval: u32 => "CWMPRetryMinimumWaitInterval" {
                access: Access::ReadWrite,
                range: ValueRange::new(1, 65535),
            };
            cwmp_retry_interval_multiplier: u32 => "CWMPRetryIntervalMultiplier" {
                access: Access::ReadWrite,
                range: ValueRange::new(1000, 65535),
            };
            udp_connection_request_address: String => "UDPConnectionRequestAddress" {
                size: SizeRange::max(256),
            };
            stun_enable: bool => "STUNEnable" { access: Access::ReadWrite };
        }
    }
}

managed_object! {
    pub struct Time ("InternetGatewayDevice.Time.") as "Time" {
        params {
            enable: bool => "Enable" { access: Access::ReadWrite };
            status: String => "Status" {
                enumeration: &[
                    "Disabled",
                    "Unsynchronized",
                    "Synchronized",
                    "Error_FailedToSynchronize",
                    "Error",
                ],
            };
            ntp_server1: String => "NTPServer1" { access: Access::ReadWrite, size: SizeRange::max(64) };
            ntp_server2: String => "NTPServer2" { access: Access::ReadWrite, size: SizeRange::max(64) };
            ntp_server3: String => "NTPServer3" { access: Access::ReadWrite, size: SizeRange::max(64) };
            current_local_time: DateTime => "CurrentLocalTime";
            local_time_zone: String => "LocalTimeZone" { access: Access::ReadWrite, size: SizeRange::max(6) };
            local_time_zone_name: String => "LocalTimeZoneName" {
                access: Access::ReadWrite,
                size: SizeRange::max(64),
            };
        }
    }
}

managed_object! {
    /// Container for the service objects (VoiceService, FAPService).
    pub struct Services ("InternetGatewayDevice.Services.") as "Services" {
        params {
            voice_service_number_of_entries: u32 => "VoiceServiceNumberOfEntries";
            fap_service_number_of_entries: u32 => "FAPServiceNumberOfEntries";
        }
        tables {
            voice_service: tr104::VoiceService => "VoiceService" {
                num_entries_parameter: Some("VoiceServiceNumberOfEntries"),
            };
            fap_service: tr196::FAPService => "FAPService" {
                num_entries_parameter: Some("FAPServiceNumberOfEntries"),
            };
        }
    }
}

// --- LAN side ---

managed_object! {
    /// One LAN-side layer 2 interface group.
    pub struct LANDevice ("InternetGatewayDevice.LANDevice.{i}.") as "LANDevice" {
        params {
            lan_ethernet_interface_number_of_entries: u32 => "LANEthernetInterfaceNumberOfEntries";
            lanwlan_configuration_number_of_entries: u32 => "LANWLANConfigurationNumberOfEntries";
        }
        objects {
            lan_host_config_management: LANHostConfigManagement => "LANHostConfigManagement";
            hosts: Hosts => "Hosts";
        }
        tables {
            lan_ethernet_interface_config: LANEthernetInterfaceConfig => "LANEthernetInterfaceConfig" {
                num_entries_parameter: Some("LANEthernetInterfaceNumberOfEntries"),
            };
            wlan_configuration: WLANConfiguration => "WLANConfiguration" {
                num_entries_parameter: Some("LANWLANConfigurationNumberOfEntries"),
            };
        }
    }
}

managed_object! {
    /// DHCP server and LAN addressing configuration.
    pub struct LANHostConfigManagement ("InternetGatewayDevice.LANDevice.{i}.LANHostConfigManagement.") as "LANHostConfigManagement" {
        params {
            dhcp_server_configurable: bool => "DHCPServerConfigurable" { access: Access::ReadWrite };
            dhcp_server_enable: bool => "DHCPServerEnable" { access: Access::ReadWrite };
            dhcp_relay: bool => "DHCPRelay";
            min_address: String => "MinAddress" { access: Access::ReadWrite, size: SizeRange::max(15) };
            max_address: String => "MaxAddress" { access: Access::ReadWrite, size: SizeRange::max(15) };
            subnet_mask: String => "SubnetMask" { access: Access::ReadWrite, size: SizeRange::max(15) };
            domain_name: String => "DomainName" { access: Access::ReadWrite, size: SizeRange::max(64) };
            /// Lease time in seconds. -1 means infinite.
            dhcp_lease_time: i32 => "DHCPLeaseTime" {
                access: Access::ReadWrite,
                range: ValueRange::min(-1),
            };
            ip_interface_number_of_entries: u32 => "IPInterfaceNumberOfEntries";
        }
        lists {
            reserved_addresses => "ReservedAddresses" { access: Access::ReadWrite, size: SizeRange::max(256) };
            dns_servers => "DNSServers" { access: Access::ReadWrite, size: SizeRange::max(64) };
            ip_routers => "IPRouters" { access: Access::ReadWrite, size: SizeRange::max(64) };
        }
        tables {
            ip_interface: IPInterface => "IPInterface" {
                access: Access::ReadWrite,
                num_entries_parameter: Some("IPInterfaceNumberOfEntries"),
            };
        }
    }
}

managed_object! {
    pub struct IPInterface ("InternetGatewayDevice.LANDevice.{i}.LANHostConfigManagement.IPInterface.{i}.") as "IPInterface" {
        params {
            enable: bool => "Enable" { access: Access::ReadWrite };
            ip_interface_ip_address: String => "IPInterfaceIPAddress" {
                access: Access::ReadWrite,
                size: SizeRange::max(15),
            };
            ip_interface_subnet_mask: String => "IPInterfaceSubnetMask" {
                access: Access::ReadWrite,
                size: SizeRange::max(15),
            };
            ip_interface_address_type: String => "IPInterfaceAddressingType" {
                access: Access::ReadWrite,
                enumeration: &["DHCP", "Static", "AutoIP"],
            };
        }
    }
}

managed_object! {
    pub struct LANEthernetInterfaceConfig ("InternetGatewayDevice.LANDevice.{i}.LANEthernetInterfaceConfig.{i}.") as "LANEthernetInterfaceConfig" {
        params {
            enable: bool => "Enable" { access: Access::ReadWrite };
            status: String => "Status" { enumeration: &["Up", "NoLink", "Error", "Disabled"] };
            mac_address: String => "MACAddress" { size: SizeRange::max(17) };
            max_bit_rate: String => "MaxBitRate" {
                access: Access::ReadWrite,
                enumeration: &["10", "100", "1000", "Auto"],
            };
            duplex_mode: String => "DuplexMode" {
                access: Access::ReadWrite,
                enumeration: &["Half", "Full", "Auto"],
            };
        }
        objects {
            stats: LANEthernetInterfaceStats => "Stats";
        }
    }
}

managed_object! {
    pub struct LANEthernetInterfaceStats ("InternetGatewayDevice.LANDevice.{i}.LANEthernetInterfaceConfig.{i}.Stats.") as "Stats" {
        params {
            bytes_sent: u32 => "BytesSent" { active_notify: ActiveNotify::CanDeny };
            bytes_received: u32 => "BytesReceived" { active_notify: ActiveNotify::CanDeny };
            packets_sent: u32 => "PacketsSent" { active_notify: ActiveNotify::CanDeny };
            packets_received: u32 => "PacketsReceived" { active_notify: ActiveNotify::CanDeny };
        }
    }
}

managed_object! {
    /// One 802.11 access point.
    pub struct WLANConfiguration ("InternetGatewayDevice.LANDevice.{i}.WLANConfiguration.{i}.") as "WLANConfiguration" {
        params {
            enable: bool => "Enable" { access: Access::ReadWrite };
            status: String => "Status" { enumeration: &["Up", "Error", "Disabled"] };
            bssid: String => "BSSID" { size: SizeRange::max(17) };
            max_bit_rate: String => "MaxBitRate" { access: Access::ReadWrite, size: SizeRange::max(4) };
            channel: u32 => "Channel" { access: Access::ReadWrite, range: ValueRange::new(0, 255) };
            ssid: String => "SSID" { access: Access::ReadWrite, size: SizeRange::max(32) };
            beacon_type: String => "BeaconType" {
                access: Access::ReadWrite,
                enumeration: &[
                    "None",
                    "Basic",
                    "WPA",
                    "11i",
                    "BasicandWPA",
                    "Basicand11i",
                    "WPAand11i",
                    "BasicandWPAand11i",
                ],
            };
            mac_address_control_enabled: bool => "MACAddressControlEnabled" { access: Access::ReadWrite };
            standard: String => "Standard" { enumeration: &["a", "b", "g", "g-only", "n"] };
            wep_key_index: u32 => "WEPKeyIndex" { access: Access::ReadWrite, range: ValueRange::new(1, 4) };
            key_passphrase: String => "KeyPassphrase" { access: Access::ReadWrite, size: SizeRange::max(63) };
            basic_encryption_modes: String => "BasicEncryptionModes" {
                access: Access::ReadWrite,
                enumeration: &["None", "WEPEncryption"],
            };
            ssid_advertisement_enabled: bool => "SSIDAdvertisementEnabled" { access: Access::ReadWrite };
            radio_enabled: bool => "RadioEnabled" { access: Access::ReadWrite };
            total_associations: u32 => "TotalAssociations";
        }
        lists {
            wep_encryption_level => "WEPEncryptionLevel" {
                size: SizeRange::max(64),
                enumeration: &["Disabled", "40-bit", "104-bit"],
            };
            possible_channels => "PossibleChannels" { size: SizeRange::max(1024) };
        }
        tables {
            associated_device: AssociatedDevice => "AssociatedDevice" {
                num_entries_parameter: Some("TotalAssociations"),
            };
        }
    }
}

managed_object! {
    pub struct AssociatedDevice ("InternetGatewayDevice.LANDevice.{i}.WLANConfiguration.{i}.AssociatedDevice.{i}.") as "AssociatedDevice" {
        params {
            associated_device_mac_address: String => "AssociatedDeviceMACAddress" { size: SizeRange::max(17) };
            associated_device_ip_address: String => "AssociatedDeviceIPAddress" { size: SizeRange::max(64) };
            associated_device_authentication_state: bool => "AssociatedDeviceAuthenticationState";
        }
        unique { ["AssociatedDeviceMACAddress"] }
    }
}

managed_object! {
    pub struct Hosts ("InternetGatewayDevice.LANDevice.{i}.Hosts.") as "Hosts" {
        params {
            host_number_of_entries: u32 => "HostNumberOfEntries";
        }
        tables {
            host: Host => "Host" { num_entries_parameter: Some("HostNumberOfEntries") };
        }
    }
}

managed_object! {
    /// A device seen on the LAN.
    pub struct Host ("InternetGatewayDevice.LANDevice.{i}.Hosts.Host.{i}.") as "Host" {
        params {
            ip_address: String => "IPAddress" { size: SizeRange::max(15) };
            address_source: String => "AddressSource" { enumeration: &["DHCP", "Static", "AutoIP"] };
            lease_time_remaining: i32 => "LeaseTimeRemaining" {
                range: ValueRange::min(-1),
                active_notify: ActiveNotify::CanDeny,
            };
            mac_address: String => "MACAddress" { size: SizeRange::max(17) };
            host_name: String => "HostName" { size: SizeRange::max(64) };
            interface_type: String => "InterfaceType" {
                enumeration: &["Ethernet", "USB", "802.11", "HomePNA", "HomePlug", "Other"],
            };
            active: bool => "Active";
        }
        unique { ["MACAddress"] }
    }
}

// --- WAN side ---

managed_object! {
    /// One WAN-side physical interface.
    pub struct WANDevice ("InternetGatewayDevice.WANDevice.{i}.") as "WANDevice" {
        params {
            wan_connection_number_of_entries: u32 => "WANConnectionNumberOfEntries";
        }
        objects {
            wan_common_interface_config: WANCommonInterfaceConfig => "WANCommonInterfaceConfig";
            wandsl_interface_config: WANDSLInterfaceConfig => "WANDSLInterfaceConfig";
        }
        tables {
            wan_connection_device: WANConnectionDevice => "WANConnectionDevice" {
                access: Access::ReadWrite,
                num_entries_parameter: Some("WANConnectionNumberOfEntries"),
            };
        }
    }
}

managed_object! {
    pub struct WANCommonInterfaceConfig ("InternetGatewayDevice.WANDevice.{i}.WANCommonInterfaceConfig.") as "WANCommonInterfaceConfig" {
        params {
            enabled_for_internet: bool => "EnabledForInternet" { access: Access::ReadWrite };
            wan_access_type: String => "WANAccessType" { enumeration: &["DSL", "Ethernet", "POTS"] };
            layer1_upstream_max_bit_rate: u32 => "Layer1UpstreamMaxBitRate";
            layer1_downstream_max_bit_rate: u32 => "Layer1DownstreamMaxBitRate";
            physical_link_status: String => "PhysicalLinkStatus" {
                enumeration: &["Up", "Down", "Initializing", "Unavailable"],
            };
            total_bytes_sent: u32 => "TotalBytesSent" { active_notify: ActiveNotify::CanDeny };
            total_bytes_received: u32 => "TotalBytesReceived" { active_notify: ActiveNotify::CanDeny };
        }
    }
}

managed_object! {
    /// Physical layer of a DSL WAN interface.
    pub struct WANDSLInterfaceConfig ("InternetGatewayDevice.WANDevice.{i}.WANDSLInterfaceConfig.") as "WANDSLInterfaceConfig" {
        params {
            enable: bool => "Enable" { access: Access::ReadWrite };
            status: String => "Status" {
                enumeration: &["Up", "Initializing", "EstablishingLink", "NoSignal", "Error", "Disabled"],
            };
            modulation_type: String => "ModulationType" {
                enumeration: &[
                    "ADSL_G.dmt",
                    "ADSL_G.lite",
                    "ADSL_G.dmt.bis",
                    "ADSL_re-adsl",
                    "ADSL_2plus",
                    "ADLS_four",
                    "ADSL_ANSI_T1.413",
                    "G.shdsl",
                    "IDSL",
                    "HDSL",
                    "SDSL",
                    "VDSL",
                ],
            };
            upstream_curr_rate: u32 => "UpstreamCurrRate";
            downstream_curr_rate: u32 => "DownstreamCurrRate";
            upstream_max_rate: u32 => "UpstreamMaxRate";
            downstream_max_rate: u32 => "DownstreamMaxRate";
            /// In 0.1 dB.
            upstream_noise_margin: i32 => "UpstreamNoiseMargin";
            downstream_noise_margin: i32 => "DownstreamNoiseMargin";
            upstream_attenuation: i32 => "UpstreamAttenuation";
            downstream_attenuation: i32 => "DownstreamAttenuation";
        }
        objects {
            stats: WANDSLInterfaceStats => "Stats";
        }
    }
}

managed_object! {
    pub struct WANDSLInterfaceStats ("InternetGatewayDevice.WANDevice.{i}.WANDSLInterfaceConfig.Stats.") as "Stats" {
        objects {
            total: WANDSLStatsTotal => "Total";
            showtime: WANDSLStatsShowtime => "Showtime";
        }
    }
}

managed_object! {
    /// Counters since the CPE was last reset.
    pub struct WANDSLStatsTotal ("InternetGatewayDevice.WANDevice.{i}.WANDSLInterfaceConfig.Stats.Total.") as "Total" {
        params {
            receive_blocks: u32 => "ReceiveBlocks";
            transmit_blocks: u32 => "TransmitBlocks";
            cell_delin: u32 => "CellDelin";
            link_retrain: u32 => "LinkRetrain";
            init_errors: u32 => "InitErrors";
            errored_secs: u32 => "ErroredSecs";
            severely_errored_secs: u32 => "SeverelyErroredSecs";
            fec_errors: u32 => "FECErrors";
            crc_errors: u32 => "CRCErrors";
        }
    }
}

managed_object! {
    /// Counters since the most recent DSL showtime.
    pub struct WANDSLStatsShowtime ("InternetGatewayDevice.WANDevice.{i}.WANDSLInterfaceConfig.Stats.Showtime.") as "Showtime" {
        params {
            receive_blocks: u32 => "ReceiveBlocks";
            transmit_blocks: u32 => "TransmitBlocks";
            cell_delin: u32 => "CellDelin";
            link_retrain: u32 => "LinkRetrain";
            errored_secs: u32 => "ErroredSecs";
            severely_errored_secs: u32 => "SeverelyErroredSecs";
            fec_errors: u32 => "FECErrors";
            crc_errors: u32 => "CRCErrors";
        }
    }
}

managed_object! {
    pub struct WANConnectionDevice ("InternetGatewayDevice.WANDevice.{i}.WANConnectionDevice.{i}.") as "WANConnectionDevice" {
        params {
            wanip_connection_number_of_entries: u32 => "WANIPConnectionNumberOfEntries";
            wanppp_connection_number_of_entries: u32 => "WANPPPConnectionNumberOfEntries";
        }
        objects {
            wandsl_link_config: WANDSLLinkConfig => "WANDSLLinkConfig";
        }
        tables {
            wanip_connection: WANIPConnection => "WANIPConnection" {
                access: Access::ReadWrite,
                num_entries_parameter: Some("WANIPConnectionNumberOfEntries"),
            };
            wanppp_connection: WANPPPConnection => "WANPPPConnection" {
                access: Access::ReadWrite,
                num_entries_parameter: Some("WANPPPConnectionNumberOfEntries"),
            };
        }
    }
}

managed_object! {
    pub struct WANDSLLinkConfig ("InternetGatewayDevice.WANDevice.{i}.WANConnectionDevice.{i}.WANDSLLinkConfig.") as "WANDSLLinkConfig" {
        params {
            enable: bool => "Enable" { access: Access::ReadWrite };
            link_status: String => "LinkStatus" {
                enumeration: &["Up", "Down", "Initializing", "Unavailable"],
            };
            link_type: String => "LinkType" {
                access: Access::ReadWrite,
                enumeration: &["EoA", "IPoA", "PPPoA", "PPPoE", "CIP", "Unconfigured"],
            };
            /// `PVC:VPI/VCI`
            destination_address: String => "DestinationAddress" {
                access: Access::ReadWrite,
                size: SizeRange::max(256),
            };
            atm_encapsulation: String => "ATMEncapsulation" {
                access: Access::ReadWrite,
                enumeration: &["LLC", "VCMUX"],
            };
        }
    }
}

managed_object! {
    /// A routed or bridged IP connection on the WAN.
    pub struct WANIPConnection ("InternetGatewayDevice.WANDevice.{i}.WANConnectionDevice.{i}.WANIPConnection.{i}.") as "WANIPConnection" {
        params {
            enable: bool => "Enable" { access: Access::ReadWrite };
            connection_status: String => "ConnectionStatus" {
                enumeration: &[
                    "Unconfigured",
                    "Connecting",
                    "Connected",
                    "PendingDisconnect",
                    "Disconneting",
                    "Disconnected",
                ],
            };
            connection_type: String => "ConnectionType" {
                access: Access::ReadWrite,
                enumeration: &["Unconfigured", "IP_Routed", "IP_Bridged"],
            };
            name: String => "Name" { access: Access::ReadWrite, size: SizeRange::max(256) };
            uptime: u32 => "Uptime" { active_notify: ActiveNotify::CanDeny };
            addressing_type: String => "AddressingType" {
                access: Access::ReadWrite,
                enumeration: &["DHCP", "Static"],
            };
            external_ip_address: String => "ExternalIPAddress" {
                access: Access::ReadWrite,
                size: SizeRange::max(15),
                active_notify: ActiveNotify::ForceDefaultEnabled,
            };
            subnet_mask: String => "SubnetMask" { access: Access::ReadWrite, size: SizeRange::max(15) };
            default_gateway: String => "DefaultGateway" { access: Access::ReadWrite, size: SizeRange::max(15) };
            dns_enabled: bool => "DNSEnabled" { access: Access::ReadWrite };
            mac_address: String => "MACAddress" { access: Access::ReadWrite, size: SizeRange::max(17) };
            nat_enabled: bool => "NATEnabled" { access: Access::ReadWrite };
            port_mapping_number_of_entries: u32 => "PortMappingNumberOfEntries";
        }
        lists {
            dns_servers => "DNSServers" { access: Access::ReadWrite, size: SizeRange::max(64) };
        }
        tables {
            port_mapping: PortMapping => "PortMapping" {
                access: Access::ReadWrite,
                num_entries_parameter: Some("PortMappingNumberOfEntries"),
            };
        }
    }
}

managed_object! {
    /// A NAT port forwarding rule.
    pub struct PortMapping ("InternetGatewayDevice.WANDevice.{i}.WANConnectionDevice.{i}.WANIPConnection.{i}.PortMapping.{i}.") as "PortMapping" {
        params {
            port_mapping_enabled: bool => "PortMappingEnabled" { access: Access::ReadWrite };
            /// Seconds. 0 means static.
            port_mapping_lease_duration: u32 => "PortMappingLeaseDuration" { access: Access::ReadWrite };
            /// Empty matches any remote host.
            remote_host: String => "RemoteHost" { access: Access::ReadWrite, size: SizeRange::max(15) };
            external_port: u32 => "ExternalPort" {
                access: Access::ReadWrite,
                range: ValueRange::new(0, 65535),
            };
            internal_port: u32 => "InternalPort" {
                access: Access::ReadWrite,
                range: ValueRange::new(1, 65535),
            };
            port_mapping_protocol: String => "PortMappingProtocol" {
                access: Access::ReadWrite,
                enumeration: &["TCP", "UDP"],
            };
            internal_client: String => "InternalClient" { access: Access::ReadWrite, size: SizeRange::max(256) };
            port_mapping_description: String => "PortMappingDescription" {
                access: Access::ReadWrite,
                size: SizeRange::max(256),
            };
        }
        unique { ["RemoteHost", "ExternalPort", "PortMappingProtocol"] }
    }
}

managed_object! {
    pub struct WANPPPConnection ("InternetGatewayDevice.WANDevice.{i}.WANConnectionDevice.{i}.WANPPPConnection.{i}.") as "WANPPPConnection" {
        params {
            enable: bool => "Enable" { access: Access::ReadWrite };
            connection_status: String => "ConnectionStatus" {
                enumeration: &[
                    "Unconfigured",
                    "Connecting",
                    "Authenticating",
                    "Connected",
                    "PendingDisconnect",
                    "Disconneting",
                    "Disconnected",
                ],
            };
            connection_type: String => "ConnectionType" {
                access: Access::ReadWrite,
                enumeration: &[
                    "Unconfigured",
                    "IP_Routed",
                    "DHCP_Spoofed",
                    "PPPoE_Bridged",
                    "PPTP_Relay",
                    "L2TP_Relay",
                    "PPPoE_Relay",
                ],
            };
            name: String => "Name" { access: Access::ReadWrite, size: SizeRange::max(256) };
            uptime: u32 => "Uptime" { active_notify: ActiveNotify::CanDeny };
            username: String => "Username" { access: Access::ReadWrite, size: SizeRange::max(64) };
            password: String => "Password" { access: Access::ReadWrite, size: SizeRange::max(64) };
            external_ip_address: String => "ExternalIPAddress" {
                size: SizeRange::max(15),
                active_notify: ActiveNotify::ForceDefaultEnabled,
            };
            max_mru_size: u32 => "MaxMRUSize" {
                access: Access::ReadWrite,
                range: ValueRange::new(1, 1540),
            };
            nat_enabled: bool => "NATEnabled" { access: Access::ReadWrite };
            transport_type: String => "TransportType" {
                enumeration: &["PPPoA", "PPPoE", "L2TP", "PPTP"],
            };
        }
    }
}
