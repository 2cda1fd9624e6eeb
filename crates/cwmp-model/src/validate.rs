// crates/cwmp-model/src/validate.rs

//! On-demand checking of the constraints declared in the metadata.
//!
//! Field writes never check anything; `validate` reports every problem in a tree.

use crate::meta::{ObjectInfo, ParameterInfo};
use crate::object::ManagedObject;
use crate::types::ParamList;
use crate::value::ParameterValue;
use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// String or binary length outside the declared size.
    Size,
    /// Numeric value outside the declared range.
    Range,
    /// Value (or list item) not among the enumerated values.
    Enumeration,
    /// Malformed `dateTime`.
    DateTimeFormat,
    /// Two rows of a table share the same unique key.
    DuplicateKey,
    /// A `NumberOfEntries` parameter disagrees with the row count.
    EntryCount,
}

/// One constraint violation, located by full path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            ViolationKind::Size => "length out of range",
            ViolationKind::Range => "value out of range",
            ViolationKind::Enumeration => "value not in enumeration",
            ViolationKind::DateTimeFormat => "malformed dateTime",
            ViolationKind::DuplicateKey => "duplicate unique key",
            ViolationKind::EntryCount => "entry count does not match the table",
        };
        write!(f, "{}: {}", self.path, what)
    }
}

/// Checks every populated parameter and every table of the tree.
pub fn validate(root: &dyn ManagedObject) -> Vec<Violation> {
    let mut out = Vec::new();
    let prefix = format!("{}.", root.info().root_name());
    check_object(root, &prefix, &mut out);
    out
}

fn check_object(obj: &dyn ManagedObject, prefix: &str, out: &mut Vec<Violation>) {
    let info = obj.info();
    for p in info.parameters {
        if let Ok(Some(value)) = obj.parameter(p.name) {
            check_value(p, &value, &format!("{}{}", prefix, p.name), out);
        }
    }
    for c in info.objects {
        if let Ok(Some(child)) = obj.child(c.name) {
            check_object(child, &format!("{}{}.", prefix, c.name), out);
        }
    }
    for t in info.tables {
        let count = obj.instance_count(t.name).unwrap_or(0);
        let table_path = format!("{}{}.", prefix, t.name);

        if let Some(count_param) = t.num_entries_parameter {
            let declared = obj
                .parameter(count_param)
                .ok()
                .flatten()
                .and_then(|v| v.as_integer());
            if declared.is_some_and(|n| n != count as i128) {
                out.push(Violation {
                    path: format!("{}{}", prefix, count_param),
                    kind: ViolationKind::EntryCount,
                });
            }
        }

        let rows: Vec<&dyn ManagedObject> = (1..=u32::try_from(count).unwrap_or(u32::MAX))
            .filter_map(|n| obj.instance(t.name, n).ok())
            .collect();
        check_unique_keys((t.info)(), &rows, &table_path, out);
        for (i, row) in rows.iter().enumerate() {
            check_object(*row, &format!("{}{}.", table_path, i + 1), out);
        }
    }
}

fn check_value(p: &ParameterInfo, value: &ParameterValue, path: &str, out: &mut Vec<Violation>) {
    let mut report = |kind| {
        out.push(Violation {
            path: String::from(path),
            kind,
        })
    };

    if !p.size.is_unbounded() {
        let len = match value {
            ParameterValue::String(s) => Some(s.chars().count()),
            ParameterValue::HexBinary(b) => Some(b.0.len()),
            ParameterValue::Base64(b) => Some(b.0.len()),
            _ => None,
        };
        if len.is_some_and(|len| !p.size.contains(len)) {
            report(ViolationKind::Size);
        }
    }

    if let Some(n) = value.as_integer() {
        if !p.range.contains(n) {
            report(ViolationKind::Range);
        }
    }

    if !p.enumeration.is_empty() {
        if let ParameterValue::String(s) = value {
            let ok = if p.list {
                ParamList::parse(s)
                    .iter()
                    .all(|item| p.enumeration.contains(&item.as_str()))
            } else {
                p.enumeration.contains(&s.as_str())
            };
            if !ok {
                report(ViolationKind::Enumeration);
            }
        }
    }

    if let ParameterValue::DateTime(dt) = value {
        if !dt.is_well_formed() {
            report(ViolationKind::DateTimeFormat);
        }
    }
}

/// Rows missing any key parameter do not take part in the check.
fn check_unique_keys(
    row_info: &ObjectInfo,
    rows: &[&dyn ManagedObject],
    table_path: &str,
    out: &mut Vec<Violation>,
) {
    for key in row_info.unique_keys {
        let mut seen = BTreeSet::new();
        for (i, row) in rows.iter().enumerate() {
            let tuple: Option<Vec<String>> = key
                .iter()
                .map(|k| row.parameter(k).ok().flatten().map(|v| v.to_lexical()))
                .collect();
            let Some(tuple) = tuple else { continue };
            if !seen.insert(tuple) {
                out.push(Violation {
                    path: format!("{}{}.", table_path, i + 1),
                    kind: ViolationKind::DuplicateKey,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tr181::{Bridge, Bridging, Device, VLAN};
    use alloc::string::ToString;

    fn vlan(id: i32) -> VLAN {
        VLAN {
            vlanid: Some(id),
            ..Default::default()
        }
    }

    fn device_with_vlans(vlans: alloc::vec::Vec<VLAN>) -> Device {
        Device {
            bridging: Some(Bridging {
                bridge: alloc::vec![Bridge {
                    vlan: vlans,
                    ..Default::default()
                }],
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_tree_has_no_violations() {
        let d = device_with_vlans(alloc::vec![vlan(1), vlan(4094)]);
        assert_eq!(validate(&d), Vec::new());
    }

    #[test]
    fn test_vlan_range_and_duplicate_key() {
        let d = device_with_vlans(alloc::vec![vlan(10), vlan(0), vlan(10)]);
        let violations = validate(&d);
        assert_eq!(
            violations,
            alloc::vec![
                Violation {
                    path: "Device.Bridging.Bridge.1.VLAN.3.".into(),
                    kind: ViolationKind::DuplicateKey
                },
                Violation {
                    path: "Device.Bridging.Bridge.1.VLAN.2.VLANID".into(),
                    kind: ViolationKind::Range
                },
            ]
        );
    }

    #[test]
    fn test_entry_count_mismatch() {
        let mut d = device_with_vlans(alloc::vec![vlan(5)]);
        d.bridging.as_mut().unwrap().bridge[0].vlan_number_of_entries = Some(3);
        let violations = validate(&d);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::EntryCount);
        assert_eq!(
            violations[0].to_string(),
            "Device.Bridging.Bridge.1.VLANNumberOfEntries: entry count does not match the table"
        );
    }
}
