pub mod create_server_request;
pub mod create_user_request;
pub mod update_server_request;
