// crates/cwmp-model/src/tr196.rs

//! TR-196 Femto Access Point service, mounted at `InternetGatewayDevice.Services.FAPService.{i}.`.

use crate::macros::managed_object;
use crate::meta::{Access, SizeRange, ValueRange};
use alloc::string::String;

managed_object! {
    pub struct FAPService ("InternetGatewayDevice.Services.FAPService.{i}.") as "FAPService" {
        params {
            device_type: String => "DeviceType" { enumeration: &["Standalone", "Integrated"] };
            /// Distinguished-name prefix used when building the FAP identity.
            dn_prefix: String => "DNPrefix" { access: Access::ReadWrite, size: SizeRange::max(256) };
        }
        objects {
            capabilities: Capabilities => "Capabilities";
            fap_control: FAPControl => "FAPControl";
        }
    }
}

managed_object! {
    pub struct Capabilities ("InternetGatewayDevice.Services.FAPService.{i}.Capabilities.") as "Capabilities" {
        params {
            gps_equipped: bool => "GPSEquipped";
            /// In dBm.
            max_tx_power: u32 => "MaxTxPower";
            beacon: bool => "Beacon";
        }
        lists {
            supported_systems => "SupportedSystems" { enumeration: &["UMTS", "LTE", "CDMA2000"] };
        }
    }
}

managed_object! {
    pub struct FAPControl ("InternetGatewayDevice.Services.FAPService.{i}.FAPControl.") as "FAPControl" {
        objects {
            umts: UMTS => "UMTS";
        }
    }
}

managed_object! {
    /// Operational control of the UMTS radio.
    pub struct UMTS ("InternetGatewayDevice.Services.FAPService.{i}.FAPControl.UMTS.") as "UMTS" {
        params {
            op_state: bool => "OpState";
            /// Setting it to true asks the FAP to bring the radio up.
            admin_state: bool => "AdminState" { access: Access::ReadWrite };
            rf_tx_status: bool => "RFTxStatus";
        }
        objects {
            gateway: Gateway => "Gateway";
        }
    }
}

managed_object! {
    /// Security gateway and FAP gateway addresses.
    pub struct Gateway ("InternetGatewayDevice.Services.FAPService.{i}.FAPControl.UMTS.Gateway.") as "Gateway" {
        params {
            sec_gw_server1: String => "SecGWServer1" { access: Access::ReadWrite, size: SizeRange::max(64) };
            sec_gw_server2: String => "SecGWServer2" { access: Access::ReadWrite, size: SizeRange::max(64) };
            sec_gw_server3: String => "SecGWServer3" { access: Access::ReadWrite, size: SizeRange::max(64) };
            fap_gw_server1: String => "FAPGWServer1" { access: Access::ReadWrite, size: SizeRange::max(64) };
            fap_gw_server2: String => "FAPGWServer2" { access: Access::ReadWrite, size: SizeRange::max(64) };
            fap_gw_server3: String => "FAPGWServer3" { access: Access::ReadWrite, size: SizeRange::max(64) };
            fap_gw_port: u32 => "FAPGWPort" { access: Access::ReadWrite, range: ValueRange::new(0, 65535) };
        }
    }
}
