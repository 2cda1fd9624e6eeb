// crates/cwmp-model/src/tr104.rs

//! TR-104 VoiceService, mounted at `InternetGatewayDevice.Services.VoiceService.{i}.`.

use crate::macros::managed_object;
use crate::meta::{Access, ActiveNotify, SizeRange, ValueRange};
use crate::types::{DateTime, HexBinary};
use alloc::string::String;

managed_object! {
    /// One VoIP service instance.
    pub struct VoiceService ("InternetGatewayDevice.Services.VoiceService.{i}.") as "VoiceService" {
        params {
            voice_profile_number_of_entries: u32 => "VoiceProfileNumberOfEntries";
        }
        objects {
            capabilities: Capabilities => "Capabilities";
            dect: DECT => "DECT";
        }
        tables {
            voice_profile: VoiceProfile => "VoiceProfile" {
                access: Access::ReadWrite,
                num_entries_parameter: Some("VoiceProfileNumberOfEntries"),
            };
        }
    }
}

managed_object! {
    /// What the voice service supports. All read-only.
    pub struct Capabilities ("InternetGatewayDevice.Services.VoiceService.{i}.Capabilities.") as "Capabilities" {
        params {
            max_profile_count: u32 => "MaxProfileCount";
            max_line_count: u32 => "MaxLineCount";
            max_session_count: u32 => "MaxSessionCount";
            rtcp: bool => "RTCP";
            srtp: bool => "SRTP";
            fax_t38: bool => "FaxT38";
            dscp_coupled: bool => "DSCPCoupled";
        }
        lists {
            signaling_protocols => "SignalingProtocols" { size: SizeRange::max(256) };
            regions => "Regions" { size: SizeRange::max(256) };
        }
        tables {
            codecs: Codecs => "Codecs";
        }
    }
}

managed_object! {
    pub struct Codecs ("InternetGatewayDevice.Services.VoiceService.{i}.Capabilities.Codecs.{i}.") as "Codecs" {
        params {
            entry_id: u32 => "EntryID" { range: ValueRange::min(1) };
            codec: String => "Codec" { size: SizeRange::max(64) };
            /// Bits per second.
            bit_rate: u32 => "BitRate";
            silence_suppression: bool => "SilenceSuppression";
        }
        lists {
            packetization_period => "PacketizationPeriod" { size: SizeRange::max(64) };
        }
        unique { ["EntryID"] }
    }
}

managed_object! {
    pub struct VoiceProfile ("InternetGatewayDevice.Services.VoiceService.{i}.VoiceProfile.{i}.") as "VoiceProfile" {
        params {
            enable: String => "Enable" {
                access: Access::ReadWrite,
                enumeration: &["Disabled", "Quiescent", "Enabled"],
            };
            reset: bool => "Reset" { access: Access::ReadWrite };
            number_of_lines: u32 => "NumberOfLines";
            name: String => "Name" { access: Access::ReadWrite, size: SizeRange::max(64) };
            signaling_protocol: String => "SignalingProtocol" {
                access: Access::ReadWrite,
                size: SizeRange::max(64),
            };
            max_sessions: u32 => "MaxSessions" { access: Access::ReadWrite };
            dtmf_method: String => "DTMFMethod" {
                access: Access::ReadWrite,
                enumeration: &["InBand", "RFC2833", "SIPInfo"],
            };
            /// ISO 3166-1 alpha-2 country code.
            region: String => "Region" { access: Access::ReadWrite, size: SizeRange::max(2) };
        }
        objects {
            sip: VoiceProfileSIP => "SIP";
        }
        tables {
            line: Line => "Line" {
                access: Access::ReadWrite,
                num_entries_parameter: Some("NumberOfLines"),
            };
        }
    }
}

managed_object! {
    /// SIP settings shared by all lines of a profile.
    pub struct VoiceProfileSIP ("InternetGatewayDevice.Services.VoiceService.{i}.VoiceProfile.{i}.SIP.") as "SIP" {
        params {
            proxy_server: String => "ProxyServer" { access: Access::ReadWrite, size: SizeRange::max(256) };
            proxy_server_port: u32 => "ProxyServerPort" {
                access: Access::ReadWrite,
                range: ValueRange::new(0, 65535),
            };
            proxy_server_transport: String => "ProxyServerTransport" {
                access: Access::ReadWrite,
                enumeration: &["UDP", "TCP", "TLS", "SCTP"],
            };
            registrar_server: String => "RegistrarServer" {
                access: Access::ReadWrite,
                size: SizeRange::max(256),
            };
            registrar_server_port: u32 => "RegistrarServerPort" {
                access: Access::ReadWrite,
                range: ValueRange::new(0, 65535),
            };
            user_agent_domain: String => "UserAgentDomain" {
                access: Access::ReadWrite,
                size: SizeRange::max(256),
            };
            user_agent_port: u32 => "UserAgentPort" {
                access: Access::ReadWrite,
                range: ValueRange::new(0, 65535),
            };
            outbound_proxy: String => "OutboundProxy" { access: Access::ReadWrite, size: SizeRange::max(256) };
            outbound_proxy_port: u32 => "OutboundProxyPort" {
                access: Access::ReadWrite,
                range: ValueRange::new(0, 65535),
            };
            register_expires: u32 => "RegisterExpires" {
                access: Access::ReadWrite,
                range: ValueRange::min(1),
            };
            /// Diffserv code point for outgoing SIP signaling.
            dscp_mark: u32 => "DSCPMark" {
                access: Access::ReadWrite,
                range: ValueRange::new(0, 63),
            };
            /// -1 means untagged.
            vlanid_mark: i32 => "VLANIDMark" {
                access: Access::ReadWrite,
                range: ValueRange::new(-1, 4094),
            };
        }
    }
}

managed_object! {
    pub struct Line ("InternetGatewayDevice.Services.VoiceService.{i}.VoiceProfile.{i}.Line.{i}.") as "Line" {
        params {
            enable: String => "Enable" {
                access: Access::ReadWrite,
                enumeration: &["Disabled", "Quiescent", "Enabled"],
            };
            directory_number: String => "DirectoryNumber" { access: Access::ReadWrite, size: SizeRange::max(32) };
            status: String => "Status" {
                enumeration: &[
                    "Up",
                    "Initializing",
                    "Registering",
                    "Unregistering",
                    "Error",
                    "Testing",
                    "Quiescent",
                    "Disabled",
                ],
            };
            call_state: String => "CallState" {
                enumeration: &["Idle", "Calling", "Ringing", "Connecting", "InCall", "Hold", "Disconnecting"],
            };
        }
        objects {
            sip: LineSIP => "SIP";
            stats: LineStats => "Stats";
        }
    }
}

managed_object! {
    pub struct LineSIP ("InternetGatewayDevice.Services.VoiceService.{i}.VoiceProfile.{i}.Line.{i}.SIP.") as "SIP" {
        params {
            auth_user_name: String => "AuthUserName" { access: Access::ReadWrite, size: SizeRange::max(128) };
            auth_password: String => "AuthPassword" { access: Access::ReadWrite, size: SizeRange::max(128) };
            uri: String => "URI" { access: Access::ReadWrite, size: SizeRange::max(389) };
        }
    }
}

managed_object! {
    pub struct LineStats ("InternetGatewayDevice.Services.VoiceService.{i}.VoiceProfile.{i}.Line.{i}.Stats.") as "Stats" {
        params {
            reset_statistics: bool => "ResetStatistics" { access: Access::ReadWrite };
            packets_sent: u32 => "PacketsSent" { active_notify: ActiveNotify::CanDeny };
            packets_received: u32 => "PacketsReceived" { active_notify: ActiveNotify::CanDeny };
            bytes_sent: u32 => "BytesSent" { active_notify: ActiveNotify::CanDeny };
            bytes_received: u32 => "BytesReceived" { active_notify: ActiveNotify::CanDeny };
            packets_lost: u32 => "PacketsLost" { active_notify: ActiveNotify::CanDeny };
            incoming_calls_received: u32 => "IncomingCallsReceived";
            outgoing_calls_attempted: u32 => "OutgoingCallsAttempted";
        }
    }
}

// --- DECT ---

managed_object! {
    pub struct DECT ("InternetGatewayDevice.Services.VoiceService.{i}.DECT.") as "DECT" {
        params {
            base_number_of_entries: u32 => "BaseNumberOfEntries";
            portable_number_of_entries: u32 => "PortableNumberOfEntries";
        }
        tables {
            base: Base => "Base" { num_entries_parameter: Some("BaseNumberOfEntries") };
            portable: Portable => "Portable" { num_entries_parameter: Some("PortableNumberOfEntries") };
        }
    }
}

managed_object! {
    /// A DECT base station.
    pub struct Base ("InternetGatewayDevice.Services.VoiceService.{i}.DECT.Base.{i}.") as "Base" {
        params {
            enable: bool => "Enable" { access: Access::ReadWrite };
            status: String => "Status" { enumeration: &["Up", "Disabled", "Error"] };
            alias: String => "Alias" { access: Access::ReadWrite, size: SizeRange::max(64) };
            name: String => "Name" { size: SizeRange::max(64) };
            standard: String => "Standard" {
                enumeration: &["DECT", "CAT-iq 1.0", "CAT-iq 2.0", "CAT-iq 2.1", "CAT-iq 3.0", "CAT-iq 4.0"],
            };
            /// Radio Fixed Part Identity, 40 bits.
            rfpi: HexBinary => "RFPI" { size: SizeRange::exact(5) };
            repeater_support_enabled: bool => "RepeaterSupportEnabled" { access: Access::ReadWrite };
            pin: HexBinary => "PIN" { access: Access::ReadWrite, size: SizeRange::exact(4) };
        }
        objects {
            stats: BaseStats => "Stats";
        }
        unique { ["RFPI"] ["Alias"] }
    }
}

managed_object! {
    pub struct BaseStats ("InternetGatewayDevice.Services.VoiceService.{i}.DECT.Base.{i}.Stats.") as "Stats" {
        params {
            handovers: u32 => "Handovers";
            handover_failures: u32 => "HandoverFailures";
            control_field_errors: u32 => "ControlFieldErrors";
            payload_field_errors: u32 => "PayloadFieldErrors";
        }
    }
}

managed_object! {
    /// A DECT handset registered with the base.
    pub struct Portable ("InternetGatewayDevice.Services.VoiceService.{i}.DECT.Portable.{i}.") as "Portable" {
        params {
            enable: bool => "Enable" { access: Access::ReadWrite };
            status: String => "Status" { enumeration: &["Up", "Disabled", "Error"] };
            alias: String => "Alias" { access: Access::ReadWrite, size: SizeRange::max(64) };
            registration_status: String => "RegistrationStatus" { enumeration: &["In range", "Out of range"] };
            /// International Portable User Identity.
            ipui: HexBinary => "IPUI" { size: SizeRange::exact(13) };
            ipei: HexBinary => "IPEI" { size: SizeRange::exact(5) };
            portable_type: String => "PortableType" { size: SizeRange::max(64) };
            subscription_time: DateTime => "SubscriptionTime";
            last_update_date_time: DateTime => "LastUpdateDateTime";
        }
        unique { ["IPUI"] ["Alias"] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{ManagedObject, ObjectType};
    use crate::value::ParameterValue;
    use alloc::vec;

    #[test]
    fn test_sip_bounds() {
        let sip = VoiceProfileSIP::object_info();
        assert_eq!(sip.parameter("DSCPMark").unwrap().range, ValueRange::new(0, 63));
        assert_eq!(
            sip.parameter("ProxyServerPort").unwrap().range,
            ValueRange::new(0, 65535)
        );
        assert_eq!(
            sip.parameter("VLANIDMark").unwrap().range,
            ValueRange::new(-1, 4094)
        );
    }

    #[test]
    fn test_hex_binary_parameter() {
        let mut base = Base::default();
        base.set_parameter("RFPI", ParameterValue::String("0a1b2c3d4e".into()))
            .unwrap();
        assert_eq!(base.rfpi, Some(HexBinary(vec![0x0A, 0x1B, 0x2C, 0x3D, 0x4E])));
        assert_eq!(
            base.parameter("RFPI"),
            Ok(Some(ParameterValue::HexBinary(HexBinary(vec![
                0x0A, 0x1B, 0x2C, 0x3D, 0x4E
            ]))))
        );
        assert_eq!(Base::object_info().unique_keys.len(), 2);
    }

    #[test]
    fn test_line_count_is_number_of_lines() {
        let table = VoiceProfile::object_info().table("Line").unwrap();
        assert_eq!(table.num_entries_parameter, Some("NumberOfLines"));
        assert_eq!(table.access, Access::ReadWrite);
    }
}
