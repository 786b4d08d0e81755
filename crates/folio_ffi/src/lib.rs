//! FFI bridge crate for the Folio UI shell.
//! Exposes use-case level catalog APIs via flutter_rust_bridge.

pub mod api;
