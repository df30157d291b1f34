//! Shared configuration and validation helpers for GiveHub.
//!
//! This crate provides the pieces every other crate needs:
//! - Configuration management (files + environment overrides)
//! - Format validators for email addresses and phone numbers

pub mod config;
pub mod validation;

pub use config::AppConfig;
