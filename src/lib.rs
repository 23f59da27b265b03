pub mod cli;
pub mod config;
pub mod logging;
pub mod model;
pub mod server;
pub mod store;
pub mod ui;
