//! Core business rules for GiveHub.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and derived-value
//! calculations live here.
//!
//! # Modules
//!
//! - `event` - Event validation, lifecycle, home partition, derived statistics
//! - `ngo` - Organization validation and deletion-guard semantics
//! - `registration` - Registration validation and duplicate-guard semantics

pub mod event;
pub mod ngo;
pub mod registration;
