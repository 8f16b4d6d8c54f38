//! HTTP clients for the outbound poetry and text services

pub mod poetrydb_client;
pub mod wikisource_client;

pub use poetrydb_client::PoetryDbClient;
pub use wikisource_client::WikisourceClient;
