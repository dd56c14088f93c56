//! WebAssembly bindings for the dis8080 disassembler.
//!
//! This module provides JavaScript-callable interfaces to the decoder,
//! enabling browser-based disassembly of 8080 binaries.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::{disassemble, disassemble_listing, DisassemblyLine};
