pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod materializer;
pub mod matrix;
pub mod persistence;
pub mod protocol;
pub mod ranker;
pub mod resolver;
pub mod server;
pub mod transport;
pub mod types;
pub mod url;
