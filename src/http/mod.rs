//! HTTP reachability checks for download URLs.

mod client;
mod status;

pub use client::{CheckUrl, HttpClient, MAX_REDIRECTS};
#[cfg(test)]
pub use client::MockCheckUrl;
pub use status::UrlStatus;
