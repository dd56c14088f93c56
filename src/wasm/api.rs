//! WASM API for the 8080 disassembler.
//!
//! Provides JavaScript-callable functions returning either structured
//! per-instruction results or the plain text listing.

use crate::disassembler::formatter::{format_instruction, format_operand};
use wasm_bindgen::prelude::*;

/// One disassembled instruction
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    offset: usize,
    bytes: Vec<u8>,
    mnemonic: String,
    operand: String,
    text: String,
    truncated: bool,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn mnemonic(&self) -> String {
        self.mnemonic.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn operand(&self) -> String {
        self.operand.clone()
    }

    /// Full listing line, as printed by the command-line tool
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

/// Disassemble a binary image passed from JavaScript
#[wasm_bindgen]
pub fn disassemble(image: &js_sys::Uint8Array) -> Vec<JsValue> {
    let bytes = image.to_vec();

    crate::disassemble(&bytes)
        .iter()
        .map(|instr| {
            let raw = instr.bytes();
            let line = DisassemblyLine {
                offset: instr.offset,
                operand: format_operand(&instr.descriptor, &raw),
                mnemonic: instr.mnemonic().to_string(),
                text: format_instruction(instr),
                truncated: instr.is_truncated(),
                bytes: raw,
            };
            JsValue::from(line)
        })
        .collect()
}

/// Disassemble a binary image into the newline-terminated text listing
#[wasm_bindgen(js_name = disassembleListing)]
pub fn disassemble_listing(image: &[u8]) -> String {
    crate::listing(image)
}
