// crates/cwmp-model/src/types.rs

//! Primitive parameter types of the CWMP data models (TR-106, Section 3.2).

use crate::error::ModelError;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use core::fmt;
use core::ops::{Deref, DerefMut};

/// The XML Schema type a parameter is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XsdType {
    Boolean,
    /// 32-bit signed integer.
    Int,
    /// 32-bit unsigned integer.
    UnsignedInt,
    /// 64-bit signed integer.
    Long,
    /// 64-bit unsigned integer.
    UnsignedLong,
    String,
    DateTime,
    Base64,
    HexBinary,
}

impl XsdType {
    /// The qualified name used in `xsi:type` attributes.
    pub fn xsi_type(self) -> &'static str {
        match self {
            XsdType::Boolean => "xsd:boolean",
            XsdType::Int => "xsd:int",
            XsdType::UnsignedInt => "xsd:unsignedInt",
            XsdType::Long => "xsd:long",
            XsdType::UnsignedLong => "xsd:unsignedLong",
            XsdType::String => "xsd:string",
            XsdType::DateTime => "xsd:dateTime",
            XsdType::Base64 => "xsd:base64",
            XsdType::HexBinary => "xsd:hexBinary",
        }
    }

    /// Parses an `xsi:type` value. The namespace prefix is optional.
    pub fn from_xsi_type(s: &str) -> Option<Self> {
        let local = s.rsplit(':').next().unwrap_or(s);
        match local {
            "boolean" => Some(XsdType::Boolean),
            "int" => Some(XsdType::Int),
            "unsignedInt" => Some(XsdType::UnsignedInt),
            "long" => Some(XsdType::Long),
            "unsignedLong" => Some(XsdType::UnsignedLong),
            "string" => Some(XsdType::String),
            "dateTime" => Some(XsdType::DateTime),
            "base64" | "base64Binary" => Some(XsdType::Base64),
            "hexBinary" => Some(XsdType::HexBinary),
            _ => None,
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            XsdType::Int | XsdType::UnsignedInt | XsdType::Long | XsdType::UnsignedLong
        )
    }
}

// --- dateTime ---

/// A TR-106 `dateTime` value, kept in its lexical form.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DateTime(pub String);

impl DateTime {
    /// The "Unknown Time" value (TR-106, Section 3.2.1).
    pub const UNKNOWN: &'static str = "0001-01-01T00:00:00Z";

    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks the lexical shape `YYYY-MM-DDThh:mm:ss[.f+][Z|(+|-)hh:mm]`.
    pub fn is_well_formed(&self) -> bool {
        let b = self.0.as_bytes();
        if b.len() < 19 {
            return false;
        }
        let digits = |r: core::ops::Range<usize>| b[r].iter().all(u8::is_ascii_digit);
        let fixed = digits(0..4)
            && b[4] == b'-'
            && digits(5..7)
            && b[7] == b'-'
            && digits(8..10)
            && b[10] == b'T'
            && digits(11..13)
            && b[13] == b':'
            && digits(14..16)
            && b[16] == b':'
            && digits(17..19);
        if !fixed {
            return false;
        }
        let month = (b[5] - b'0') * 10 + (b[6] - b'0');
        let day = (b[8] - b'0') * 10 + (b[9] - b'0');
        let hour = (b[11] - b'0') * 10 + (b[12] - b'0');
        let minute = (b[14] - b'0') * 10 + (b[15] - b'0');
        let second = (b[17] - b'0') * 10 + (b[18] - b'0');
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return false;
        }
        if hour > 23 || minute > 59 || second > 60 {
            return false;
        }

        let mut rest = &b[19..];
        if let Some(frac) = rest.strip_prefix(b".") {
            let n = frac.iter().take_while(|c| c.is_ascii_digit()).count();
            if n == 0 {
                return false;
            }
            rest = &frac[n..];
        }
        match rest {
            [] | [b'Z'] => true,
            [sign, h1, h2, b':', m1, m2] if *sign == b'+' || *sign == b'-' => {
                [h1, h2, m1, m2].iter().all(|c| c.is_ascii_digit())
            }
            _ => false,
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// --- Binary types ---

/// A `hexBinary` parameter value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HexBinary(pub Vec<u8>);

impl HexBinary {
    /// Upper-case hex, no prefix.
    pub fn to_lexical(&self) -> String {
        hex::encode_upper(&self.0)
    }

    /// Accepts either case; surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, ModelError> {
        hex::decode(s.trim())
            .map(HexBinary)
            .map_err(|_| ModelError::InvalidValue {
                ty: XsdType::HexBinary,
                value: s.to_string(),
            })
    }
}

/// A `base64` parameter value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Base64(pub Vec<u8>);

impl Base64 {
    pub fn to_lexical(&self) -> String {
        STANDARD.encode(&self.0)
    }

    pub fn parse(s: &str) -> Result<Self, ModelError> {
        STANDARD
            .decode(s.trim())
            .map(Base64)
            .map_err(|_| ModelError::InvalidValue {
                ty: XsdType::Base64,
                value: s.to_string(),
            })
    }
}

// --- Lists ---

/// A list-valued parameter: an ordered sequence of strings, comma-separated on the wire.
///
/// List fields are never absent; a freshly constructed object holds an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParamList(pub Vec<String>);

impl ParamList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, item: impl Into<String>) {
        self.0.push(item.into());
    }

    /// Appends one item and returns the list, for chained construction.
    pub fn with(mut self, item: impl Into<String>) -> Self {
        self.push(item);
        self
    }

    /// Splits on commas when present, otherwise on whitespace. Items are trimmed
    /// and empty items are dropped.
    pub fn parse(s: &str) -> Self {
        let items = if s.contains(',') {
            s.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect()
        } else {
            s.split_whitespace().map(String::from).collect()
        };
        Self(items)
    }

    pub fn to_lexical(&self) -> String {
        self.0.join(",")
    }
}

impl Deref for ParamList {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ParamList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<S: Into<String>> FromIterator<S> for ParamList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for ParamList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_lexical())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{Base64, HexBinary, ParamList};
    use alloc::string::String;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for HexBinary {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_lexical())
        }
    }

    impl<'de> Deserialize<'de> for HexBinary {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            HexBinary::parse(&s).map_err(serde::de::Error::custom)
        }
    }

    impl Serialize for Base64 {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_lexical())
        }
    }

    impl<'de> Deserialize<'de> for Base64 {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            Base64::parse(&s).map_err(serde::de::Error::custom)
        }
    }

    impl Serialize for ParamList {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_lexical())
        }
    }

    impl<'de> Deserialize<'de> for ParamList {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            Ok(ParamList::parse(&s))
        }
    }
}
