pub mod config;
pub mod errors;
pub mod llm_client;
pub mod render;
pub mod routes;
pub mod snapshot;
pub mod state;
