pub mod config;
pub mod logging;

pub mod fetch_head;
pub mod generator;
pub mod input;
pub mod lastmod;
pub mod sitemap;
