// crates/cwmp-model/src/tree.rs

//! Path-based access to a whole data-model tree, with the semantics of the
//! TR-069 Get/SetParameterValues, GetParameterNames and AddObject RPCs.
//!
//! One-to-one children that are not populated are still part of the schema:
//! paths through them resolve, reads find nothing and writes create them.

use crate::error::ModelError;
use crate::log::{LogContext, my_debug, my_trace, my_warn};
use crate::meta::{Access, ObjectInfo, ParameterInfo, TableInfo};
use crate::object::ManagedObject;
use crate::path::{self, Segment};
use crate::value::ParameterValue;
use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// One entry of a GetParameterNames response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterName {
    /// Full path; objects end in `.`.
    pub name: String,
    pub writable: bool,
}

impl ParameterName {
    fn new(name: String, writable: bool) -> Self {
        Self { name, writable }
    }
}

#[derive(Debug, Clone, Copy)]
enum Leaf {
    Object,
    Table(&'static TableInfo),
    Parameter(&'static ParameterInfo),
}

/// Result of walking a path on a shared tree.
struct Resolved<'a> {
    /// The addressed object (or the parent of a table or parameter). `None` when
    /// an absent one-to-one child lies on the path.
    obj: Option<&'a dyn ManagedObject>,
    info: &'static ObjectInfo,
    leaf: Leaf,
    /// Set when `obj` is a table row.
    row_of: Option<&'static TableInfo>,
}

fn not_found(path: &str) -> ModelError {
    if path::is_partial(path) {
        ModelError::ObjectNotFound(String::from(path))
    } else {
        ModelError::ParameterNotFound(String::from(path))
    }
}

fn context(root: &dyn ManagedObject, operation: &'static str) -> LogContext {
    LogContext {
        model: root.info().root_name(),
        operation,
    }
}

/// The root object path, e.g. `Device.`.
fn root_path(root: &dyn ManagedObject) -> String {
    format!("{}.", root.info().root_name())
}

fn segments<'p>(root: &dyn ManagedObject, path: &'p str) -> Result<Vec<Segment<'p>>, ModelError> {
    let segments = path::split_path(path)?;
    match segments.first() {
        Some(Segment::Name(n)) if *n == root.info().root_name() => Ok(segments),
        Some(Segment::Name(_)) => Err(not_found(path)),
        _ => Err(ModelError::InvalidPath(String::from(path))),
    }
}

fn resolve<'a>(root: &'a dyn ManagedObject, path: &str) -> Result<Resolved<'a>, ModelError> {
    let partial = path::is_partial(path);
    let segments = segments(root, path)?;
    let mut cur = Resolved {
        obj: Some(root),
        info: root.info(),
        leaf: Leaf::Object,
        row_of: None,
    };

    let mut iter = segments[1..].iter().peekable();
    while let Some(seg) = iter.next() {
        let Segment::Name(name) = *seg else {
            return Err(ModelError::InvalidPath(String::from(path)));
        };
        let is_last = iter.peek().is_none();

        if let Some(child) = cur.info.object(name) {
            let obj = match cur.obj {
                Some(o) => o.child(name)?,
                None => None,
            };
            cur = Resolved {
                obj,
                info: (child.info)(),
                leaf: Leaf::Object,
                row_of: None,
            };
        } else if let Some(table) = cur.info.table(name) {
            match iter.next() {
                None => cur.leaf = Leaf::Table(table),
                Some(Segment::Instance(n)) => {
                    let row = match cur.obj {
                        Some(o) => o.instance(name, *n)?,
                        None => {
                            return Err(ModelError::InstanceNotFound {
                                table: String::from(name),
                                instance: *n,
                            });
                        }
                    };
                    cur = Resolved {
                        obj: Some(row),
                        info: (table.info)(),
                        leaf: Leaf::Object,
                        row_of: Some(table),
                    };
                }
                Some(_) => return Err(ModelError::InvalidPath(String::from(path))),
            }
        } else if let Some(param) = cur.info.parameter(name) {
            if !is_last || partial {
                return Err(ModelError::InvalidPath(String::from(path)));
            }
            cur.leaf = Leaf::Parameter(param);
        } else {
            return Err(not_found(path));
        }
    }

    match cur.leaf {
        Leaf::Object | Leaf::Table(_) if !partial => Err(ModelError::ParameterNotFound(String::from(path))),
        _ => Ok(cur),
    }
}

/// Walks a path on a mutable tree, creating absent one-to-one children. Returns the
/// addressed object (or the parent of a table or parameter).
fn resolve_mut<'a>(
    root: &'a mut dyn ManagedObject,
    path: &str,
) -> Result<(&'a mut dyn ManagedObject, Leaf), ModelError> {
    let segments = segments(&*root, path)?;
    let mut info = root.info();
    let mut obj = root;
    let mut leaf = Leaf::Object;

    let mut iter = segments[1..].iter();
    while let Some(seg) = iter.next() {
        let Segment::Name(name) = *seg else {
            return Err(ModelError::InvalidPath(String::from(path)));
        };
        if let Some(child) = info.object(name) {
            obj = obj.child_mut(name)?;
            info = (child.info)();
        } else if let Some(table) = info.table(name) {
            match iter.next() {
                None => leaf = Leaf::Table(table),
                Some(Segment::Instance(n)) => {
                    obj = obj.instance_mut(name, *n)?;
                    info = (table.info)();
                }
                Some(_) => return Err(ModelError::InvalidPath(String::from(path))),
            }
        } else if let Some(param) = info.parameter(name) {
            leaf = Leaf::Parameter(param);
        } else {
            return Err(not_found(path));
        }
    }
    Ok((obj, leaf))
}

// --- Reads ---

/// Returns the value of one parameter. An unset parameter is `ParameterNotFound`.
pub fn get_parameter_value(
    root: &dyn ManagedObject,
    path: &str,
) -> Result<ParameterValue, ModelError> {
    let ctx = context(root, "GetParameterValues");
    if path::is_partial(path) {
        return Err(ModelError::InvalidPath(String::from(path)));
    }
    let cur = resolve(root, path)?;
    my_trace!(ctx, "Resolved {}", path);
    let Leaf::Parameter(p) = cur.leaf else {
        return Err(ModelError::ParameterNotFound(String::from(path)));
    };
    match cur.obj {
        Some(obj) => obj
            .parameter(p.name)?
            .ok_or_else(|| ModelError::ParameterNotFound(String::from(path))),
        None => Err(ModelError::ParameterNotFound(String::from(path))),
    }
}

/// Returns one parameter for a full path, or every populated parameter below a
/// partial path in schema order. The empty path addresses the root.
pub fn get_parameter_values(
    root: &dyn ManagedObject,
    path: &str,
) -> Result<Vec<(String, ParameterValue)>, ModelError> {
    let ctx = context(root, "GetParameterValues");
    let path = if path.is_empty() { root_path(root) } else { String::from(path) };
    if !path::is_partial(&path) {
        let value = get_parameter_value(root, &path)?;
        return Ok(vec![(path, value)]);
    }

    let cur = resolve(root, &path)?;
    my_trace!(ctx, "Resolved {}", path);
    let mut out = Vec::new();
    let all = |_: &ParameterInfo| true;
    match (cur.leaf, cur.obj) {
        (Leaf::Table(t), Some(parent)) => collect_rows(parent, t, &path, &all, &mut out)?,
        (_, Some(obj)) => collect_values(obj, &path, &all, &mut out)?,
        (_, None) => {}
    }
    my_debug!(ctx, "{} values below {}", out.len(), path);
    Ok(out)
}

fn collect_values(
    obj: &dyn ManagedObject,
    prefix: &str,
    filter: &dyn Fn(&ParameterInfo) -> bool,
    out: &mut Vec<(String, ParameterValue)>,
) -> Result<(), ModelError> {
    let info = obj.info();
    for p in info.parameters {
        if !filter(p) {
            continue;
        }
        if let Some(v) = obj.parameter(p.name)? {
            out.push((format!("{}{}", prefix, p.name), v));
        }
    }
    for c in info.objects {
        if let Some(child) = obj.child(c.name)? {
            collect_values(child, &format!("{}{}.", prefix, c.name), filter, out)?;
        }
    }
    for t in info.tables {
        collect_rows(obj, t, &format!("{}{}.", prefix, t.name), filter, out)?;
    }
    Ok(())
}

fn collect_rows(
    parent: &dyn ManagedObject,
    table: &TableInfo,
    table_path: &str,
    filter: &dyn Fn(&ParameterInfo) -> bool,
    out: &mut Vec<(String, ParameterValue)>,
) -> Result<(), ModelError> {
    for n in 1..=instance_number(parent.instance_count(table.name)?) {
        let row = parent.instance(table.name, n)?;
        collect_values(row, &format!("{}{}.", table_path, n), filter, out)?;
    }
    Ok(())
}

fn instance_number(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Returns the values of every populated forced-inform parameter.
pub fn forced_inform_parameters(
    root: &dyn ManagedObject,
) -> Result<Vec<(String, ParameterValue)>, ModelError> {
    let mut out = Vec::new();
    collect_values(root, &root_path(root), &|p| p.forced_inform, &mut out)?;
    Ok(out)
}

/// Looks up the metadata of the parameter a full path names.
pub fn parameter_info(
    root: &dyn ManagedObject,
    path: &str,
) -> Result<&'static ParameterInfo, ModelError> {
    match resolve(root, path)?.leaf {
        Leaf::Parameter(p) => Ok(p),
        _ => Err(ModelError::ParameterNotFound(String::from(path))),
    }
}

/// GetParameterNames.
///
/// With `next_level` only the immediate children of a partial path are listed.
/// Without it the object itself and everything below it are.
pub fn get_parameter_names(
    root: &dyn ManagedObject,
    path: &str,
    next_level: bool,
) -> Result<Vec<ParameterName>, ModelError> {
    let ctx = context(root, "GetParameterNames");
    if path.is_empty() && next_level {
        return Ok(vec![ParameterName::new(root_path(root), false)]);
    }
    let path = if path.is_empty() { root_path(root) } else { String::from(path) };
    let cur = resolve(root, &path)?;
    my_trace!(ctx, "Resolved {}", path);

    let mut out = Vec::new();
    match cur.leaf {
        Leaf::Parameter(p) => {
            if next_level {
                return Err(ModelError::InvalidArguments(
                    "NextLevel is true for a parameter path",
                ));
            }
            out.push(ParameterName::new(path.clone(), p.is_writable()));
        }
        Leaf::Table(t) => {
            let writable = t.access == Access::ReadWrite;
            if !next_level {
                out.push(ParameterName::new(path.clone(), writable));
            }
            let count = match cur.obj {
                Some(parent) => parent.instance_count(t.name)?,
                None => 0,
            };
            for n in 1..=instance_number(count) {
                let row_path = format!("{}{}.", path, n);
                out.push(ParameterName::new(row_path.clone(), writable));
                if !next_level {
                    let row = cur.obj.map(|o| o.instance(t.name, n)).transpose()?;
                    describe(row, (t.info)(), &row_path, &mut out)?;
                }
            }
        }
        Leaf::Object => {
            let writable = cur.row_of.is_some_and(|t| t.access == Access::ReadWrite);
            if next_level {
                describe_next_level(cur.info, &path, &mut out);
            } else {
                out.push(ParameterName::new(path.clone(), writable));
                describe(cur.obj, cur.info, &path, &mut out)?;
            }
        }
    }
    my_debug!(ctx, "{} names below {}", out.len(), path);
    Ok(out)
}

fn describe_next_level(info: &'static ObjectInfo, prefix: &str, out: &mut Vec<ParameterName>) {
    for p in info.parameters {
        out.push(ParameterName::new(format!("{}{}", prefix, p.name), p.is_writable()));
    }
    for c in info.objects {
        out.push(ParameterName::new(format!("{}{}.", prefix, c.name), false));
    }
    for t in info.tables {
        out.push(ParameterName::new(
            format!("{}{}.", prefix, t.name),
            t.access == Access::ReadWrite,
        ));
    }
}

fn describe(
    obj: Option<&dyn ManagedObject>,
    info: &'static ObjectInfo,
    prefix: &str,
    out: &mut Vec<ParameterName>,
) -> Result<(), ModelError> {
    for p in info.parameters {
        out.push(ParameterName::new(format!("{}{}", prefix, p.name), p.is_writable()));
    }
    for c in info.objects {
        let child_path = format!("{}{}.", prefix, c.name);
        out.push(ParameterName::new(child_path.clone(), false));
        let child = obj.map(|o| o.child(c.name)).transpose()?.flatten();
        describe(child, (c.info)(), &child_path, out)?;
    }
    for t in info.tables {
        let writable = t.access == Access::ReadWrite;
        let table_path = format!("{}{}.", prefix, t.name);
        out.push(ParameterName::new(table_path.clone(), writable));
        let Some(parent) = obj else { continue };
        for n in 1..=instance_number(parent.instance_count(t.name)?) {
            let row_path = format!("{}{}.", table_path, n);
            out.push(ParameterName::new(row_path.clone(), writable));
            describe(Some(parent.instance(t.name, n)?), (t.info)(), &row_path, out)?;
        }
    }
    Ok(())
}

// --- Writes ---

/// Resolves, access-checks and coerces one write without touching the tree.
fn prepare(
    root: &dyn ManagedObject,
    ctx: &LogContext,
    path: &str,
    value: ParameterValue,
    check_access: bool,
) -> Result<ParameterValue, ModelError> {
    if path::is_partial(path) {
        return Err(ModelError::InvalidPath(String::from(path)));
    }
    let Leaf::Parameter(p) = resolve(root, path)?.leaf else {
        return Err(ModelError::ParameterNotFound(String::from(path)));
    };
    if check_access && !p.is_writable() {
        my_warn!(*ctx, "Rejected write to read-only {}", path);
        return Err(ModelError::NotWritable(String::from(path)));
    }
    value.coerce(p.ty).inspect_err(|e| {
        my_warn!(*ctx, "Rejected value for {}: {}", path, e);
    })
}

fn apply(
    root: &mut dyn ManagedObject,
    ctx: &LogContext,
    path: &str,
    value: ParameterValue,
) -> Result<(), ModelError> {
    let (obj, leaf) = resolve_mut(root, path)?;
    let Leaf::Parameter(p) = leaf else {
        return Err(ModelError::ParameterNotFound(String::from(path)));
    };
    my_debug!(*ctx, "Set {} = {}", path, value);
    obj.set_parameter(p.name, value)
}

/// Sets one parameter, coercing the value to the declared type.
///
/// With `check_access` a read-only parameter is refused with `NotWritable`.
pub fn set_parameter_value(
    root: &mut dyn ManagedObject,
    path: &str,
    value: ParameterValue,
    check_access: bool,
) -> Result<(), ModelError> {
    let ctx = context(&*root, "SetParameterValues");
    let value = prepare(&*root, &ctx, path, value, check_access)?;
    apply(root, &ctx, path, value)
}

/// SetParameterValues: every entry is validated before any is written, so on
/// error the tree is unchanged. Access is always checked.
pub fn set_parameter_values<S: AsRef<str>>(
    root: &mut dyn ManagedObject,
    values: &[(S, ParameterValue)],
) -> Result<(), ModelError> {
    let ctx = context(&*root, "SetParameterValues");
    let mut seen = BTreeSet::new();
    let mut prepared = Vec::with_capacity(values.len());
    for (path, value) in values {
        let path = path.as_ref();
        if !seen.insert(path) {
            my_warn!(ctx, "Duplicate parameter {} in request", path);
            return Err(ModelError::InvalidArguments(
                "parameter appears more than once",
            ));
        }
        prepared.push((path, prepare(&*root, &ctx, path, value.clone(), true)?));
    }
    for (path, value) in prepared {
        apply(root, &ctx, path, value)?;
    }
    Ok(())
}

/// AddObject: appends a row to the table named by `table_path` (`X.Table.`) and
/// returns its instance number. The table's entry count is updated when declared.
pub fn add_object(
    root: &mut dyn ManagedObject,
    table_path: &str,
    check_access: bool,
) -> Result<u32, ModelError> {
    let ctx = context(&*root, "AddObject");
    if !path::is_partial(table_path) {
        return Err(ModelError::InvalidPath(String::from(table_path)));
    }
    let cur = resolve(&*root, table_path)?;
    let Leaf::Table(table) = cur.leaf else {
        return Err(ModelError::InvalidPath(String::from(table_path)));
    };
    if check_access && table.access != Access::ReadWrite {
        my_warn!(ctx, "Rejected AddObject on fixed table {}", table_path);
        return Err(ModelError::NotWritable(String::from(table_path)));
    }
    let count = match cur.obj {
        Some(parent) => parent.instance_count(table.name)?,
        None => 0,
    };
    if let Some(max) = table.max_entries {
        if count >= max as usize {
            my_warn!(ctx, "Table {} is full ({} entries)", table_path, count);
            return Err(ModelError::ResourcesExceeded(String::from(table_path)));
        }
    }

    let (parent, _) = resolve_mut(root, table_path)?;
    let number = parent.add_instance(table.name)?;
    if let Some(count_param) = table.num_entries_parameter {
        parent.set_parameter(count_param, ParameterValue::UnsignedInt(number))?;
    }
    my_debug!(ctx, "Added {}{}.", table_path, number);
    Ok(number)
}

/// Rewrites every declared `*NumberOfEntries` parameter from the row counts.
pub fn sync_entry_counts(root: &mut dyn ManagedObject) -> Result<(), ModelError> {
    let info = root.info();
    for t in info.tables {
        let count = root.instance_count(t.name)?;
        if let Some(count_param) = t.num_entries_parameter {
            root.set_parameter(count_param, ParameterValue::UnsignedInt(instance_number(count)))?;
        }
        for n in 1..=instance_number(count) {
            sync_entry_counts(root.instance_mut(t.name, n)?)?;
        }
    }
    for c in info.objects {
        if root.child(c.name)?.is_some() {
            sync_entry_counts(root.child_mut(c.name)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macros::managed_object;
    use crate::tr181::{Bridge, Device, DeviceInfo, VLAN};
    use crate::{ParamList, XsdType};

    managed_object! {
        pub struct Rack ("Rack.") as "Rack" {
            params {
                slot_number_of_entries: u32 => "SlotNumberOfEntries";
            }
            tables {
                slot: Slot => "Slot" {
                    access: Access::ReadWrite,
                    num_entries_parameter: Some("SlotNumberOfEntries"),
                    max_entries: Some(2),
                };
            }
        }
    }

    managed_object! {
        pub struct Slot ("Rack.Slot.{i}.") as "Slot" {
            params {
                label: String => "Label" { access: Access::ReadWrite };
            }
        }
    }

    fn device() -> Device {
        Device {
            device_info: Some(DeviceInfo {
                manufacturer: Some("ACME".into()),
                software_version: Some("1.2.3".into()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_root_name_must_match() {
        let d = device();
        assert_eq!(
            get_parameter_value(&d, "InternetGatewayDevice.DeviceInfo.Manufacturer"),
            Err(ModelError::ParameterNotFound(
                "InternetGatewayDevice.DeviceInfo.Manufacturer".into()
            ))
        );
        assert_eq!(
            get_parameter_value(&d, "Device.DeviceInfo.Manufacturer"),
            Ok(ParameterValue::String("ACME".into()))
        );
    }

    #[test]
    fn test_unset_parameter_is_not_found() {
        let d = device();
        assert_eq!(
            get_parameter_value(&d, "Device.DeviceInfo.ModelName"),
            Err(ModelError::ParameterNotFound("Device.DeviceInfo.ModelName".into()))
        );
        // Unknown names are not found either
        assert!(matches!(
            get_parameter_value(&d, "Device.DeviceInfo.Bogus"),
            Err(ModelError::ParameterNotFound(_))
        ));
        // A parameter name used as an object
        assert!(matches!(
            get_parameter_values(&d, "Device.DeviceInfo.Manufacturer."),
            Err(ModelError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_set_through_absent_child_creates_it() {
        let mut d = Device::default();
        set_parameter_value(
            &mut d,
            "Device.DeviceInfo.ProvisioningCode",
            ParameterValue::String("ABC".into()),
            true,
        )
        .unwrap();
        assert_eq!(
            d.device_info.as_ref().and_then(|i| i.provisioning_code.as_deref()),
            Some("ABC")
        );
    }

    #[test]
    fn test_placeholder_is_not_a_concrete_path() {
        let d = device();
        assert!(matches!(
            get_parameter_values(&d, "Device.Bridging.Bridge.{i}."),
            Err(ModelError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_add_object_updates_entry_count() {
        let mut d = Device::default();
        let n = add_object(&mut d, "Device.Bridging.Bridge.", true).unwrap();
        assert_eq!(n, 1);
        let n = add_object(&mut d, "Device.Bridging.Bridge.1.VLAN.", true).unwrap();
        assert_eq!(n, 1);
        let bridging = d.bridging.as_ref().unwrap();
        assert_eq!(bridging.bridge_number_of_entries, Some(1));
        assert_eq!(bridging.bridge[0].vlan_number_of_entries, Some(1));
        assert_eq!(bridging.bridge[0].vlan, vec![VLAN::default()]);
    }

    #[test]
    fn test_sync_entry_counts() {
        let mut d = Device::default();
        let mut bridge = Bridge::default();
        bridge.vlan.push(VLAN::default());
        bridge.vlan.push(VLAN::default());
        d.bridging.get_or_insert_with(Default::default).bridge.push(bridge);
        sync_entry_counts(&mut d).unwrap();
        let bridging = d.bridging.as_ref().unwrap();
        assert_eq!(bridging.bridge_number_of_entries, Some(1));
        assert_eq!(bridging.bridge[0].vlan_number_of_entries, Some(2));
    }

    #[test]
    fn test_list_parameter_through_tree() {
        let mut d = device();
        d.device_info.as_mut().unwrap().additional_software_version =
            ParamList::new().with("boot-1.0").with("dsp-2.1");
        assert_eq!(
            get_parameter_value(&d, "Device.DeviceInfo.AdditionalSoftwareVersion"),
            Ok(ParameterValue::String("boot-1.0,dsp-2.1".into()))
        );
        let info = parameter_info(&d, "Device.DeviceInfo.AdditionalSoftwareVersion").unwrap();
        assert!(info.list);
        assert_eq!(info.ty, XsdType::String);
    }

    #[test]
    fn test_add_object_respects_max_entries() {
        let mut rack = Rack::default();
        assert_eq!(add_object(&mut rack, "Rack.Slot.", true), Ok(1));
        assert_eq!(add_object(&mut rack, "Rack.Slot.", true), Ok(2));
        let err = add_object(&mut rack, "Rack.Slot.", true).unwrap_err();
        assert_eq!(err, ModelError::ResourcesExceeded("Rack.Slot.".into()));
        assert_eq!(err.fault_code(), 9004);
        assert_eq!(rack.slot.len(), 2);
        assert_eq!(rack.slot_number_of_entries, Some(2));
    }

    #[test]
    fn test_names_of_a_parameter_path() {
        let mut rack = Rack::default();
        add_object(&mut rack, "Rack.Slot.", true).unwrap();
        assert_eq!(
            get_parameter_names(&rack, "Rack.Slot.1.Label", false),
            Ok(vec![ParameterName::new(String::from("Rack.Slot.1.Label"), true)])
        );
        assert_eq!(
            get_parameter_names(&rack, "Rack.SlotNumberOfEntries", false),
            Ok(vec![ParameterName::new(String::from("Rack.SlotNumberOfEntries"), false)])
        );
    }

    #[test]
    fn test_add_object_needs_a_table_path() {
        let mut rack = Rack::default();
        assert!(matches!(
            add_object(&mut rack, "Rack.Slot", true),
            Err(ModelError::InvalidPath(_))
        ));
        assert!(matches!(
            add_object(&mut rack, "Rack.", true),
            Err(ModelError::InvalidPath(_))
        ));
        assert!(matches!(
            add_object(&mut rack, "Rack.Shelf.", true),
            Err(ModelError::ObjectNotFound(_))
        ));
    }
}
