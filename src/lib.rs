pub mod config;
pub mod discovery;
pub mod logging;
pub mod version;
