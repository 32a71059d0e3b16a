pub mod nest_service;
pub mod node_service;
pub mod provisioning_service;
pub mod server_service;
pub mod user_service;
