// crates/cwmp-model/src/meta.rs

//! Static metadata describing every object, table and parameter of a data model.
//!
//! All of it is `'static` and built at compile time by the model modules.

use crate::error::ModelError;
use crate::path;
use crate::types::XsdType;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Defines the access rights for a parameter or a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    #[default]
    ReadOnly,
    /// Writable parameter, or a table the ACS may add rows to.
    ReadWrite,
}

/// Notification policy of a parameter (TR-106 `activeNotify`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveNotify {
    #[default]
    Normal,
    /// Active notification is always on and cannot be turned off.
    ForceEnabled,
    /// Active notification is on by default.
    ForceDefaultEnabled,
    /// The CPE may refuse requests for active notification.
    CanDeny,
}

/// Notification attribute as set by SetParameterAttributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notification {
    #[default]
    Off,
    Passive,
    Active,
}

impl Notification {
    pub fn code(self) -> u8 {
        match self {
            Notification::Off => 0,
            Notification::Passive => 1,
            Notification::Active => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Notification::Off),
            1 => Some(Notification::Passive),
            2 => Some(Notification::Active),
            _ => None,
        }
    }
}

/// Allowed length: characters for strings, bytes for binary types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    pub min: u32,
    pub max: u32,
}

impl SizeRange {
    pub const UNBOUNDED: SizeRange = SizeRange { min: 0, max: u32::MAX };

    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// `string(:max)`
    pub const fn max(max: u32) -> Self {
        Self { min: 0, max }
    }

    /// Exact length, as used for fixed-size identifiers.
    pub const fn exact(len: u32) -> Self {
        Self { min: len, max: len }
    }

    pub fn contains(&self, len: usize) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let len = u64::try_from(len).unwrap_or(u64::MAX);
        len >= u64::from(self.min) && len <= u64::from(self.max)
    }

    pub fn is_unbounded(&self) -> bool {
        *self == Self::UNBOUNDED
    }
}

/// Inclusive numeric bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: i128,
    pub max: i128,
}

impl ValueRange {
    pub const UNBOUNDED: ValueRange = ValueRange {
        min: i128::MIN,
        max: i128::MAX,
    };

    pub const fn new(min: i128, max: i128) -> Self {
        Self { min, max }
    }

    pub const fn min(min: i128) -> Self {
        Self { min, max: i128::MAX }
    }

    pub fn contains(&self, v: i128) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Metadata of one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterInfo {
    /// Standard name, e.g. `SoftwareVersion`.
    pub name: &'static str,
    /// Declared type. List-valued parameters are `String`.
    pub ty: XsdType,
    pub access: Access,
    /// Comma-separated list of `ty` items.
    pub list: bool,
    pub size: SizeRange,
    pub range: ValueRange,
    /// Allowed values. Empty means unrestricted.
    pub enumeration: &'static [&'static str],
    /// Always reported in Inform.
    pub forced_inform: bool,
    pub active_notify: ActiveNotify,
}

impl ParameterInfo {
    pub const fn new(name: &'static str, ty: XsdType) -> Self {
        Self {
            name,
            ty,
            access: Access::ReadOnly,
            list: false,
            size: SizeRange::UNBOUNDED,
            range: ValueRange::UNBOUNDED,
            enumeration: &[],
            forced_inform: false,
            active_notify: ActiveNotify::Normal,
        }
    }

    pub const fn list(name: &'static str) -> Self {
        let mut info = Self::new(name, XsdType::String);
        info.list = true;
        info
    }

    pub fn is_writable(&self) -> bool {
        self.access == Access::ReadWrite
    }

    /// Checks a SetParameterAttributes notification request against the policy.
    pub fn check_notification(&self, requested: Notification) -> Result<(), ModelError> {
        let accepted = match self.active_notify {
            ActiveNotify::ForceEnabled => requested == Notification::Active,
            ActiveNotify::CanDeny => requested != Notification::Active,
            ActiveNotify::Normal | ActiveNotify::ForceDefaultEnabled => true,
        };
        if accepted {
            Ok(())
        } else {
            Err(ModelError::NotificationRejected(String::from(self.name)))
        }
    }
}

/// A one-to-one child object.
#[derive(Debug, Clone, Copy)]
pub struct ChildInfo {
    pub name: &'static str,
    pub info: fn() -> &'static ObjectInfo,
}

impl ChildInfo {
    pub const fn new(name: &'static str, info: fn() -> &'static ObjectInfo) -> Self {
        Self { name, info }
    }
}

/// A multi-instance child object (`Name.{i}.`).
#[derive(Debug, Clone, Copy)]
pub struct TableInfo {
    pub name: &'static str,
    /// Metadata of one row.
    pub info: fn() -> &'static ObjectInfo,
    /// `ReadWrite` allows AddObject.
    pub access: Access,
    /// Parent parameter holding the row count.
    pub num_entries_parameter: Option<&'static str>,
    pub max_entries: Option<u32>,
}

impl TableInfo {
    pub const fn new(name: &'static str, info: fn() -> &'static ObjectInfo) -> Self {
        Self {
            name,
            info,
            access: Access::ReadOnly,
            num_entries_parameter: None,
            max_entries: None,
        }
    }
}

/// Metadata of an object type.
#[derive(Debug)]
pub struct ObjectInfo {
    /// Path template, e.g. `InternetGatewayDevice.LANDevice.{i}.Hosts.`.
    pub name: &'static str,
    /// XML element name (the last name segment).
    pub xml_name: &'static str,
    pub parameters: &'static [ParameterInfo],
    pub objects: &'static [ChildInfo],
    pub tables: &'static [TableInfo],
    /// Sets of parameters whose combined value is unique across the rows of a table.
    pub unique_keys: &'static [&'static [&'static str]],
}

impl ObjectInfo {
    pub fn parameter(&self, name: &str) -> Option<&'static ParameterInfo> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn object(&self, name: &str) -> Option<&'static ChildInfo> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn table(&self, name: &str) -> Option<&'static TableInfo> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// First segment of the path, i.e. the root object name.
    pub fn root_name(&self) -> &'static str {
        self.name.split('.').next().unwrap_or(self.name)
    }
}

// --- Consistency check ---

/// Checks that a subtree's metadata is internally consistent. Returns one message per problem.
pub fn schema_errors(root: &'static ObjectInfo) -> Vec<String> {
    let mut errors = Vec::new();
    check_object(root, &mut errors);
    errors
}

fn check_object(info: &'static ObjectInfo, errors: &mut Vec<String>) {
    if !info.name.ends_with('.') {
        errors.push(format!("{}: path does not end in '.'", info.name));
    }
    let last = info
        .name
        .trim_end_matches('.')
        .rsplit('.')
        .find(|s| *s != "{i}")
        .unwrap_or("");
    if info.xml_name != last {
        errors.push(format!(
            "{}: xml name {:?} differs from last segment {:?}",
            info.name, info.xml_name, last
        ));
    }

    for p in info.parameters {
        if !path::is_valid_name(p.name) {
            errors.push(format!("{}{}: invalid parameter name", info.name, p.name));
        }
        if p.size.min > p.size.max {
            errors.push(format!("{}{}: size min exceeds max", info.name, p.name));
        }
        if p.range.min > p.range.max {
            errors.push(format!("{}{}: range min exceeds max", info.name, p.name));
        }
    }

    for key in info.unique_keys {
        for k in *key {
            if info.parameter(k).is_none() {
                errors.push(format!("{}: unique key {:?} is not a parameter", info.name, k));
            }
        }
    }

    for child in info.objects {
        let child_info = (child.info)();
        let expected = format!("{}{}.", info.name, child.name);
        if child_info.name != expected {
            errors.push(format!(
                "{}: child {} has path {}, expected {}",
                info.name, child.name, child_info.name, expected
            ));
        }
        check_object(child_info, errors);
    }

    for table in info.tables {
        let row_info = (table.info)();
        let expected = format!("{}{}.{{i}}.", info.name, table.name);
        if row_info.name != expected {
            errors.push(format!(
                "{}: table {} has path {}, expected {}",
                info.name, table.name, row_info.name, expected
            ));
        }
        if let Some(count) = table.num_entries_parameter {
            match info.parameter(count) {
                Some(p) if p.ty == XsdType::UnsignedInt && !p.list => {}
                Some(_) => errors.push(format!(
                    "{}{}: entry count must be an unsignedInt",
                    info.name, count
                )),
                None => errors.push(format!(
                    "{}: entry count {} of table {} does not exist",
                    info.name, count, table.name
                )),
            }
        }
        check_object(row_info, errors);
    }
}
