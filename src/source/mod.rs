//! Obtaining raw log text: paste-link validation, the gist API, local files.

mod client;
mod file;
mod gist;
mod url;

pub use client::{HttpClient, ReqwestClient};
pub use file::read_log_file;
pub use gist::{GistFetcher, LogFetcher, parse_gist};
pub use url::PasteUrl;
