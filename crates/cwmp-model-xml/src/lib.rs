// crates/cwmp-model-xml/src/lib.rs

#![no_std]
#![doc = "XML encodings for CWMP (TR-069) managed objects."]
#![doc = ""]
#![doc = "This `no_std + alloc` library provides:"]
#![doc = "- `save_object_to_string` / `load_object_from_str`: one element per field documents"]
#![doc = "  for any model struct, named by the standard parameter names."]
#![doc = "- `save_parameter_values_to_string` / `load_parameter_values_from_str`: the CWMP"]
#![doc = "  `ParameterList` of `ParameterValueStruct`, typed by `xsi:type`."]
#![doc = "- `save_parameter_names_to_string` / `load_parameter_names_from_str`: the same for"]
#![doc = "  `ParameterInfoStruct`."]
#![doc = "- `save_tree_values_to_string` / `apply_parameter_values`: the glue to `cwmp_model::tree`."]

extern crate alloc;

// --- Crate Modules ---

mod builder;
mod error;
mod model;
mod parser;
mod resolver;

// --- Public API Re-exports ---

pub use builder::{
    save_object_to_string, save_parameter_names_to_string, save_parameter_values_to_string,
    save_tree_values_to_string,
};
pub use error::XmlError;
pub use parser::{load_object_from_str, load_parameter_names_from_str, load_parameter_values_from_str};
pub use resolver::apply_parameter_values;

/// Output settings shared by every `save_*` function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Spaces per nesting level. `None` writes everything on one line.
    pub indent: Option<usize>,
    /// Writes `<?xml version="1.0" encoding="UTF-8"?>` before the root element.
    pub xml_declaration: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            indent: Some(2),
            xml_declaration: true,
        }
    }
}

impl EncodeOptions {
    /// Single-line output without a declaration, for embedding in a SOAP body.
    pub fn compact() -> Self {
        Self {
            indent: None,
            xml_declaration: false,
        }
    }
}
