pub mod client_config;
pub mod nest;
pub mod node;
pub mod panel_connection;
pub mod server;
pub mod user;
