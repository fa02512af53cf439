pub mod client;
pub mod config;
pub mod domain;
pub mod fees;
pub mod logging;
pub mod session;
pub mod views;
