//! HTTP API: routing, request validation and response shaping for the user
//! directory.

pub mod app;
pub mod config;
pub mod middleware;
