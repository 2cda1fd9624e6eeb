#![cfg_attr(not(feature = "std"), no_std)]
#![doc = "Typed bindings for the Broadband Forum CWMP (TR-069) data models."]
#![doc = ""]
#![doc = "Every managed object of the standard tree is a plain struct carrying static"]
#![doc = "metadata (path, access, constraints, notification policy). The `tree` module"]
#![doc = "addresses a whole tree by dotted parameter path, and `validate` checks the"]
#![doc = "declared constraints on demand."]

// 'alloc' is used for dynamic allocation (e.g., String parameters, table rows)
extern crate alloc;

// --- Foundation Modules ---
pub mod error;
pub(crate) mod log;
pub mod meta;
pub mod path;
pub mod types;
pub mod value;

// --- Managed Object Abstraction ---
pub(crate) mod macros;
pub mod object;

// --- Tree Runtime ---
pub mod tree;
pub mod validate;

// --- Data Models ---
pub mod tr098;
pub mod tr104;
pub mod tr143;
pub mod tr181;
pub mod tr196;

// --- Top-level Exports ---
pub use error::ModelError;
pub use meta::{
    Access, ActiveNotify, ChildInfo, Notification, ObjectInfo, ParameterInfo, SizeRange,
    TableInfo, ValueRange,
};
pub use object::{ManagedObject, ObjectType, ParamField};
pub use tree::ParameterName;
pub use types::{Base64, DateTime, HexBinary, ParamList, XsdType};
pub use validate::{Violation, ViolationKind, validate};
pub use value::ParameterValue;
