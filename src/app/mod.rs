//! Site-level helpers: page discovery, exclusion matching, URL building.

mod files;
mod url;

pub use files::{discover_pages, is_excluded, page_identity};
pub use url::page_url;
