// crates/cwmp-model/src/tr143.rs

//! TR-143 throughput and UDP echo diagnostics, mounted under the TR-098 root.

use crate::macros::managed_object;
use crate::meta::{Access, SizeRange, ValueRange};
use crate::types::DateTime;
use alloc::string::String;

/// States an ACS may read back from a completed download test.
pub const DOWNLOAD_DIAGNOSTICS_STATES: &[&str] = &[
    "None",
    "Requested",
    "Completed",
    "Error_InitConnectionFailed",
    "Error_NoResponse",
    "Error_TransferFailed",
    "Error_PasswordRequestFailed",
    "Error_LoginFailed",
    "Error_NoTransferMode",
    "Error_NoPASV",
    "Error_IncorrectSize",
    "Error_Timeout",
];

pub const UPLOAD_DIAGNOSTICS_STATES: &[&str] = &[
    "None",
    "Requested",
    "Completed",
    "Error_InitConnectionFailed",
    "Error_NoResponse",
    "Error_PasswordRequestFailed",
    "Error_LoginFailed",
    "Error_NoTransferMode",
    "Error_NoPASV",
    "Error_NoCWD",
    "Error_NoSTOR",
    "Error_NoTransferComplete",
];

managed_object! {
    /// HTTP/FTP download throughput test.
    ///
    /// The ACS writes `DiagnosticsState` = `Requested` to start a test; the
    /// timestamps are filled in by the CPE when it completes.
    pub struct DownloadDiagnostics ("InternetGatewayDevice.DownloadDiagnostics.") as "DownloadDiagnostics" {
        params {
            diagnostics_state: String => "DiagnosticsState" {
                access: Access::ReadWrite,
                enumeration: DOWNLOAD_DIAGNOSTICS_STATES,
            };
            interface: String => "Interface" { access: Access::ReadWrite, size: SizeRange::max(256) };
            download_url: String => "DownloadURL" { access: Access::ReadWrite, size: SizeRange::max(256) };
            dscp: u32 => "DSCP" { access: Access::ReadWrite, range: ValueRange::new(0, 63) };
            ethernet_priority: u32 => "EthernetPriority" {
                access: Access::ReadWrite,
                range: ValueRange::new(0, 7),
            };
            /// Request time.
            rom_time: DateTime => "ROMTime";
            /// Begin of transmission.
            bom_time: DateTime => "BOMTime";
            /// End of transmission.
            eom_time: DateTime => "EOMTime";
            test_bytes_received: u32 => "TestBytesReceived";
            total_bytes_received: u32 => "TotalBytesReceived";
            tcp_open_request_time: DateTime => "TCPOpenRequestTime";
            tcp_open_response_time: DateTime => "TCPOpenResponseTime";
        }
    }
}

managed_object! {
    /// HTTP/FTP upload throughput test.
    pub struct UploadDiagnostics ("InternetGatewayDevice.UploadDiagnostics.") as "UploadDiagnostics" {
        params {
            diagnostics_state: String => "DiagnosticsState" {
                access: Access::ReadWrite,
                enumeration: UPLOAD_DIAGNOSTICS_STATES,
            };
            interface: String => "Interface" { access: Access::ReadWrite, size: SizeRange::max(256) };
            upload_url: String => "UploadURL" { access: Access::ReadWrite, size: SizeRange::max(256) };
            dscp: u32 => "DSCP" { access: Access::ReadWrite, range: ValueRange::new(0, 63) };
            ethernet_priority: u32 => "EthernetPriority" {
                access: Access::ReadWrite,
                range: ValueRange::new(0, 7),
            };
            test_file_length: u32 => "TestFileLength" { access: Access::ReadWrite };
            rom_time: DateTime => "ROMTime";
            bom_time: DateTime => "BOMTime";
            eom_time: DateTime => "EOMTime";
            total_bytes_sent: u32 => "TotalBytesSent";
            tcp_open_request_time: DateTime => "TCPOpenRequestTime";
            tcp_open_response_time: DateTime => "TCPOpenResponseTime";
        }
    }
}

managed_object! {
    pub struct UDPEchoConfig ("InternetGatewayDevice.UDPEchoConfig.") as "UDPEchoConfig" {
        params {
            enable: bool => "Enable" { access: Access::ReadWrite };
            interface: String => "Interface" { access: Access::ReadWrite, size: SizeRange::max(256) };
            source_ip_address: String => "SourceIPAddress" { access: Access::ReadWrite, size: SizeRange::max(45) };
            udp_port: u32 => "UDPPort" { access: Access::ReadWrite, range: ValueRange::new(1, 65535) };
            echo_plus_enabled: bool => "EchoPlusEnabled" { access: Access::ReadWrite };
            echo_plus_supported: bool => "EchoPlusSupported";
            packets_received: u32 => "PacketsReceived";
            packets_responded: u32 => "PacketsResponded";
            bytes_received: u32 => "BytesReceived";
            bytes_responded: u32 => "BytesResponded";
            time_first_packet_received: DateTime => "TimeFirstPacketReceived";
            time_last_packet_received: DateTime => "TimeLastPacketReceived";
        }
    }
}
