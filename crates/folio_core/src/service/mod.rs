//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate snapshot persistence into catalog-level APIs.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod catalog;
