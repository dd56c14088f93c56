//! 8080 Disassembler Module
//!
//! Converts a flat binary image into a human-readable listing, one line per
//! instruction.

pub mod decoder;
pub mod formatter;

use std::io::{self, Write};

use crate::opcodes::{lookup, InstructionDescriptor};

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Byte offset of the opcode within the image
    pub offset: usize,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Decode table entry for `opcode`
    pub descriptor: InstructionDescriptor,

    /// Operand bytes actually present in the image (0-2)
    pub operand_bytes: Vec<u8>,

    /// Bytes consumed from the image (1-3), short of
    /// `descriptor.size_bytes` only at a truncated tail
    pub size_bytes: u8,
}

impl Instruction {
    /// Instruction mnemonic (e.g., "MOV", "JMP", "--")
    pub fn mnemonic(&self) -> &'static str {
        self.descriptor.mnemonic
    }

    /// Raw bytes in storage order, opcode first
    pub fn bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size_bytes as usize);
        bytes.push(self.opcode);
        bytes.extend_from_slice(&self.operand_bytes);
        bytes
    }

    /// True when the image ended before the instruction's last operand byte
    pub fn is_truncated(&self) -> bool {
        self.size_bytes < self.descriptor.size_bytes
    }
}

/// Disassemble a byte slice into a vector of instructions
///
/// Every byte of `bytes` belongs to exactly one returned instruction.
/// Undefined opcodes decode as the one-byte `--` instruction.
pub fn disassemble(bytes: &[u8]) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut cursor = 0;

    log::debug!("disassembling {} bytes", bytes.len());

    while let Some(instr) = decoder::decode_instruction(&bytes[cursor..], cursor) {
        log::trace!("{:04x}: {} ({} bytes)", cursor, instr.mnemonic(), instr.size_bytes);
        cursor += instr.size_bytes as usize;
        instructions.push(instr);
    }

    log::debug!("decoded {} instructions", instructions.len());
    instructions
}

/// Render the full listing of `bytes` as a string, one line per instruction
pub fn listing(bytes: &[u8]) -> String {
    disassemble(bytes)
        .iter()
        .map(|instr| formatter::format_instruction(instr) + "\n")
        .collect()
}

/// Stream the listing of `bytes` to `out`
///
/// Looks up each opcode, renders the line, writes it followed by a newline
/// and advances by the consumed length until the end of `bytes`.
///
/// # Returns
///
/// The number of lines written
pub fn write_listing<W: Write>(bytes: &[u8], out: &mut W) -> io::Result<usize> {
    let mut cursor = 0;
    let mut lines = 0;

    while cursor < bytes.len() {
        let descriptor = lookup(bytes[cursor]);
        let (line, consumed) = formatter::render(&bytes[cursor..], cursor, &descriptor);
        if consumed < descriptor.size_bytes as usize {
            warn_truncated(cursor, &descriptor, consumed);
        }

        writeln!(out, "{}", line)?;
        cursor += consumed;
        lines += 1;
    }

    log::debug!("wrote {} lines for {} bytes", lines, bytes.len());
    Ok(lines)
}

pub(crate) fn warn_truncated(offset: usize, descriptor: &InstructionDescriptor, available: usize) {
    log::warn!(
        "truncated {} at {:04x}: {} of {} bytes present, missing operand bytes read as 00",
        descriptor.mnemonic,
        offset,
        available,
        descriptor.size_bytes
    );
}
