//! Catalog-RS Library
//!
//! Core library modules for the catalog-rs content catalog service.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod server;
pub mod services;
pub mod state;
pub mod store;

pub use state::AppState;
