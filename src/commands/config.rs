use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, redirect::Policy};
use std::path::PathBuf;
use std::time::Duration;

use crate::{
    http::{CheckUrl, HttpClient, MAX_REDIRECTS},
    runtime::Runtime,
};

pub const INDEX_FILE: &str = "index.json";
pub const PACKAGES_DIR: &str = "packages";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = concat!("regcheck/", env!("REGCHECK_VERSION"));

/// User-facing settings, as parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Registry root; `index.json` and `packages/` are resolved against it.
    pub root: Option<PathBuf>,
    pub index: Option<PathBuf>,
    pub packages: Option<PathBuf>,
    pub timeout_secs: u64,
    /// Skip download URL reachability checks.
    pub offline: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root: None,
            index: None,
            packages: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            offline: false,
        }
    }
}

pub struct Config<R: Runtime, C: CheckUrl> {
    pub runtime: R,
    /// `None` in offline mode.
    pub checker: Option<C>,
    pub index_path: PathBuf,
    pub packages_dir: PathBuf,
}

impl<R: Runtime> Config<R, HttpClient> {
    pub fn new(runtime: R, options: Options) -> Result<Self> {
        let root = options.root.unwrap_or_else(|| PathBuf::from("."));
        let index_path = options.index.unwrap_or_else(|| root.join(INDEX_FILE));
        let packages_dir = options.packages.unwrap_or_else(|| root.join(PACKAGES_DIR));

        debug!(
            "Registry index {:?}, packages {:?}",
            index_path, packages_dir
        );

        let checker = if options.offline {
            debug!("Offline mode: download URLs will not be checked");
            None
        } else {
            let client = Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_secs(options.timeout_secs))
                .redirect(Policy::limited(MAX_REDIRECTS))
                .build()
                .context("Failed to build HTTP client")?;
            Some(HttpClient::new(client))
        };

        Ok(Self {
            runtime,
            checker,
            index_path,
            packages_dir,
        })
    }
}
