pub mod api_client;
pub mod endpoint;
pub mod envelope_codec;
pub mod transport;
