//! # catalog-core
//!
//! Core types and error types for the catalog workspace.
//!
//! This crate provides the foundational types shared across all catalog crates:
//! - Catalog entities (items and their sparse detail payload)
//! - Fetch lifecycle state surfaced to the presentation layer
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
