pub mod config;
pub mod logging;

pub mod batch;
pub mod fetcher;
pub mod filename;
pub mod transport;
