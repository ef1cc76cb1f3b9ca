pub mod credential_middleware;
pub mod http;
pub mod logger;
