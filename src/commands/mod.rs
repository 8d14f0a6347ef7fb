//! Command entry points.

use anyhow::Result;

use crate::runtime::Runtime;

mod check;
pub mod config;
mod report;

pub use check::check;
pub use report::{Report, Summary};

use config::{Config, Options};

/// Validate the registry described by `options`.
#[tracing::instrument(skip(runtime))]
pub async fn run<R: Runtime>(runtime: R, options: Options) -> Result<Summary> {
    let config = Config::new(runtime, options)?;
    Ok(check(&config).await)
}
