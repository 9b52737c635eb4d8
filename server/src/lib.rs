//! Ripple Server
//!
//! Social networking backend: user profiles, symmetric friend
//! relationships, and token-based authentication.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod social;
