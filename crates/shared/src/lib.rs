//! Client-wide errors and configuration for the PayPal REST client.
//!
//! This crate provides types used across the other crates:
//! - Client error type with HTTP status mapping
//! - Client configuration management

pub mod config;
pub mod error;

pub use config::{ClientConfig, Environment};
pub use error::{ClientError, ClientResult};
