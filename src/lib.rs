//! # Intel 8080 Disassembler
//!
//! A table-driven disassembler for the Intel 8080 instruction set. It turns a
//! flat binary image into a listing with one line per instruction, annotated
//! with the offset and raw bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use dis8080::{disassemble, format_instruction};
//!
//! let code = [0x01, 0x34, 0x12, 0xC3, 0x00, 0x10];
//! let lines: Vec<String> = disassemble(&code).iter().map(format_instruction).collect();
//!
//! assert_eq!(lines[0], "0000 01 34 12 LXI    B,$1234");
//! assert_eq!(lines[1], "0003 c3 00 10 JMP    $1000");
//! ```
//!
//! ## Architecture
//!
//! - **Decode table**: every opcode maps to a static [`InstructionDescriptor`]
//!   through an exhaustive `match`, so the table cannot have holes
//! - **Renderer**: stateless formatting of one instruction from its descriptor
//!   and the bytes at the cursor
//! - **Driver**: owns the cursor and advances it by each consumed length
//!
//! Decoding never fails. Undefined opcodes render as `--` and an instruction
//! cut off by the end of the image reads its missing operand bytes as zero.
//!
//! ## Modules
//!
//! - `operand` - Operand class enumeration
//! - `opcodes` - Decode table
//! - `disassembler` - Driver, decoder and formatter
//! - `image` - Program image loading
//! - `error` - Load errors and exit codes

pub mod disassembler;
pub mod error;
pub mod image;
pub mod opcodes;
pub mod operand;
pub mod wasm;

// Re-export public API
pub use disassembler::formatter::{format_instruction, render};
pub use disassembler::{disassemble, listing, write_listing, Instruction};
pub use error::LoadError;
pub use image::ProgramImage;
pub use opcodes::{lookup, InstructionDescriptor, OPCODE_TABLE, UNDEFINED};
pub use operand::OperandClass;
