//! Instruction decoder for the 8080 disassembler

use crate::disassembler::{warn_truncated, Instruction};
use crate::opcodes::OPCODE_TABLE;

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `offset` - The offset of this instruction within the image
///
/// # Returns
///
/// `None` only when `bytes` is empty. An instruction cut short by the end of
/// `bytes` keeps the operand bytes that exist and reports the shorter size.
pub fn decode_instruction(bytes: &[u8], offset: usize) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;
    let descriptor = OPCODE_TABLE[opcode as usize];

    let operand_bytes: Vec<u8> = rest
        .iter()
        .take(descriptor.operand_class.operand_bytes() as usize)
        .copied()
        .collect();
    let size_bytes = 1 + operand_bytes.len() as u8;

    if size_bytes < descriptor.size_bytes {
        warn_truncated(offset, &descriptor, size_bytes as usize);
    }

    Some(Instruction {
        offset,
        opcode,
        descriptor,
        operand_bytes,
        size_bytes,
    })
}
