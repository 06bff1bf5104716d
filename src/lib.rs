pub mod error;
pub mod loader;
pub mod logging;
pub mod output;
pub mod reports;
