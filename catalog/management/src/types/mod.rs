//! Catalog Management data types.
//!
//! Every type mirrors a JSON schema of the service. Optional fields are
//! `Option` and are left out of the serialized form when `None`, so a
//! value built from a few fields serializes to exactly those keys.

mod account;
mod audit;
mod catalog;
mod deploy;
mod instance;
mod license;
mod object;
mod offering;
mod repo;

pub use account::*;
pub use audit::*;
pub use catalog::*;
pub use deploy::*;
pub use instance::*;
pub use license::*;
pub use object::*;
pub use offering::*;
pub use repo::*;

/// Free-form JSON metadata.
pub type Metadata = serde_json::Map<String, serde_json::Value>;
