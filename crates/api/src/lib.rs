//! HTTP API: routing and request/response mapping for the part dashboard.

pub mod app;
pub mod config;
