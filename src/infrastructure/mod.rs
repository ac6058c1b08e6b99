// Infrastructure layer - Configuration, simulated device and HTTP adapters
pub mod config;
pub mod http_response;
pub mod simulated_vest;
