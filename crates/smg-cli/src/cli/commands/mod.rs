//! CLI command handlers, one file per command.

mod index;
mod sitemap;

pub use index::run_index;
pub use sitemap::run_sitemap;
