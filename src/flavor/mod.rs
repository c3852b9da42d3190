//! Flavor System
//!
//! The command vocabulary a parser is built from.

pub mod registry;
pub mod schema;

pub use registry::FlavorRegistry;
pub use schema::{CommandDef, Flavor, FlavorFile, FlavorMeta};

/// Name of the embedded flavor, used when nothing else is selected
pub const DEFAULT_FLAVOR: &str = "octolapse";
