// crates/cwmp-model/src/path.rs

//! Dotted CWMP parameter paths, e.g. `InternetGatewayDevice.LANDevice.1.Hosts.`.

use crate::error::ModelError;
use alloc::string::String;
use alloc::vec::Vec;

/// The `{i}` placeholder used in path templates.
pub const PLACEHOLDER: &str = "{i}";

/// One segment of a dotted path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Name(&'a str),
    /// 1-based instance number of a table row.
    Instance(u32),
    Placeholder,
}

/// Returns true for a path naming an object (trailing `.`).
pub fn is_partial(path: &str) -> bool {
    path.ends_with('.')
}

/// TR-106 name syntax: a letter or `_`, then letters, digits, `_` or `-`.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Splits a path into segments. The trailing `.` of a partial path does not
/// produce an empty segment.
pub fn split_path(path: &str) -> Result<Vec<Segment<'_>>, ModelError> {
    let invalid = || ModelError::InvalidPath(String::from(path));
    let body = path.strip_suffix('.').unwrap_or(path);
    if body.is_empty() {
        return Err(invalid());
    }

    body.split('.')
        .map(|seg| {
            if seg == PLACEHOLDER {
                Ok(Segment::Placeholder)
            } else if seg.bytes().all(|b| b.is_ascii_digit()) && !seg.is_empty() {
                match seg.parse::<u32>() {
                    Ok(0) | Err(_) => Err(invalid()),
                    Ok(n) => Ok(Segment::Instance(n)),
                }
            } else if is_valid_name(seg) {
                Ok(Segment::Name(seg))
            } else {
                Err(invalid())
            }
        })
        .collect()
}

/// Replaces every instance number with `{i}`.
pub fn template_of(concrete: &str) -> Result<String, ModelError> {
    let segments = split_path(concrete)?;
    let mut out = String::with_capacity(concrete.len());
    for (i, seg) in segments.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        match seg {
            Segment::Name(n) => out.push_str(n),
            Segment::Instance(_) | Segment::Placeholder => out.push_str(PLACEHOLDER),
        }
    }
    if is_partial(concrete) {
        out.push('.');
    }
    Ok(out)
}

/// Returns true when `concrete` is an instance of `template`.
pub fn matches_template(concrete: &str, template: &str) -> bool {
    if is_partial(concrete) != is_partial(template) {
        return false;
    }
    let (Ok(c), Ok(t)) = (split_path(concrete), split_path(template)) else {
        return false;
    };
    c.len() == t.len()
        && c.iter().zip(t.iter()).all(|pair| match pair {
            (Segment::Name(a), Segment::Name(b)) => a == b,
            (Segment::Instance(_), Segment::Placeholder) => true,
            _ => false,
        })
}

/// Fills each `{i}` of a template with the next instance number.
pub fn instantiate(template: &str, instances: &[u32]) -> Result<String, ModelError> {
    let placeholders = template.split('.').filter(|s| *s == PLACEHOLDER).count();
    if placeholders != instances.len() || instances.contains(&0) {
        return Err(ModelError::InvalidArguments(
            "instance numbers do not match the template",
        ));
    }
    let mut numbers = instances.iter();
    let filled: Vec<String> = template
        .split('.')
        .map(|seg| match (seg, seg == PLACEHOLDER) {
            (_, true) => numbers
                .next()
                .map(|n| alloc::format!("{}", n))
                .unwrap_or_default(),
            (s, false) => String::from(s),
        })
        .collect();
    Ok(filled.join("."))
}

/// Appends one segment to a partial path.
pub fn join(prefix: &str, name: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + name.len() + 1);
    out.push_str(prefix);
    if !prefix.is_empty() && !prefix.ends_with('.') {
        out.push('.');
    }
    out.push_str(name);
    out
}
