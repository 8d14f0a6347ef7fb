//! Registry validation checks.
//!
//! Each check accumulates every finding it can make rather than stopping at
//! the first one. Findings are returned as values; printing and counting is
//! left to the driver.

mod consistency;
mod structure;
mod versions;

pub use consistency::check_index_consistency;
pub use structure::validate_structure;
pub use versions::{DownloadRef, VersionReport, validate_versions};
