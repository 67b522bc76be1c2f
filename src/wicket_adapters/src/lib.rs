pub mod auth;
pub mod cache;
pub mod config;
pub mod http;
pub mod persistence;
