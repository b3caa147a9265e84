pub mod api_error;
pub mod config;
pub mod envelope;
pub mod export;
pub mod list_query;
pub mod logger;
