pub mod app;
pub mod args;
pub mod dir;
pub mod logger;
pub mod services;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
