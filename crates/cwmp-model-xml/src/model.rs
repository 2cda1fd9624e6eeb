// crates/cwmp-model-xml/src/model.rs

//! Internal `serde` structures that map directly to the CWMP `ParameterList`
//! encodings. These are used for raw deserialization and serialization.

#![allow(clippy::pedantic)] // XML schema names are not idiomatic Rust

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub const SOAP_ENC_NS: &str = "http://schemas.xmlsoap.org/soap/encoding/";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

// The deserializer matches attributes by local name, so prefixed attributes are
// written with their prefix and read without it.

/// `<ParameterList soap-enc:arrayType="cwmp:ParameterValueStruct[N]">`
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename = "ParameterList")]
pub struct ParameterValueList {
    #[serde(rename = "@xmlns:soap-enc", skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub xmlns_soap_enc: Option<String>,

    #[serde(rename = "@xmlns:xsd", skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub xmlns_xsd: Option<String>,

    #[serde(rename = "@xmlns:xsi", skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub xmlns_xsi: Option<String>,

    #[serde(
        rename(serialize = "@soap-enc:arrayType", deserialize = "@arrayType"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub array_type: Option<String>,

    #[serde(rename = "ParameterValueStruct", default)]
    pub items: Vec<ParameterValueStruct>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ParameterValueStruct {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Value", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// `<Value xsi:type="xsd:unsignedInt">300</Value>`
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Value {
    #[serde(
        rename(serialize = "@xsi:type", deserialize = "@type"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub xsi_type: Option<String>,

    #[serde(rename = "$text", default)]
    pub text: String,
}

/// `<ParameterList soap-enc:arrayType="cwmp:ParameterInfoStruct[N]">`
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename = "ParameterList")]
pub struct ParameterInfoList {
    #[serde(rename = "@xmlns:soap-enc", skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub xmlns_soap_enc: Option<String>,

    #[serde(
        rename(serialize = "@soap-enc:arrayType", deserialize = "@arrayType"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub array_type: Option<String>,

    #[serde(rename = "ParameterInfoStruct", default)]
    pub items: Vec<ParameterInfoStruct>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ParameterInfoStruct {
    #[serde(rename = "Name")]
    pub name: String,

    /// `xsd:boolean` lexical form (`0`/`1`/`true`/`false`).
    #[serde(rename = "Writable", default, skip_serializing_if = "Option::is_none")]
    pub writable: Option<String>,
}
