//! Formatting functions for disassembled instructions
//!
//! Line layout: `oooo bb bb bb MNEM   operand`, with the byte column padded
//! to three slots and lowercase hex throughout.

use crate::disassembler::Instruction;
use crate::opcodes::InstructionDescriptor;
use crate::operand::OperandClass;

/// Width the mnemonic is padded to when an operand follows
pub const MNEMONIC_WIDTH: usize = 4;

/// Gap between the padded mnemonic and the operand
pub const OPERAND_SEPARATOR: &str = "   ";

/// Byte slots reserved in the byte column (the longest instruction)
const BYTE_SLOTS: usize = 3;

/// Render one listing line for the instruction at the start of `bytes`
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the opcode
/// * `offset` - Offset of the opcode within the image
/// * `descriptor` - Decode table entry for `bytes[0]`
///
/// # Returns
///
/// The line (no trailing newline) and the number of bytes consumed. The
/// consumed count is `descriptor.size_bytes` unless `bytes` ends first, in
/// which case it is `bytes.len()` and missing operand bytes render as 00.
pub fn render(bytes: &[u8], offset: usize, descriptor: &InstructionDescriptor) -> (String, usize) {
    let consumed = (descriptor.size_bytes as usize).min(bytes.len());
    let present = &bytes[..consumed];

    let mut line = format!("{:04x} ", offset);
    for byte in present {
        line.push_str(&format!("{:02x} ", byte));
    }
    line.push_str(&" ".repeat((BYTE_SLOTS - consumed) * 3));
    line.push_str(descriptor.mnemonic);

    if descriptor.operand_class != OperandClass::None {
        line.push_str(&" ".repeat(MNEMONIC_WIDTH.saturating_sub(descriptor.mnemonic.len())));
        line.push_str(OPERAND_SEPARATOR);
        line.push_str(&format_operand(descriptor, present));
    }

    (line, consumed)
}

/// Format the operand text for `descriptor`
///
/// `bytes` starts at the opcode; operand bytes past its end read as zero.
pub fn format_operand(descriptor: &InstructionDescriptor, bytes: &[u8]) -> String {
    let reg1 = descriptor.register1.unwrap_or_default();
    let reg2 = descriptor.register2.unwrap_or_default();
    let imm8 = byte_at(bytes, 1);
    // Stored low byte first, printed high byte first
    let imm16 = u16::from_le_bytes([byte_at(bytes, 1), byte_at(bytes, 2)]);

    match descriptor.operand_class {
        OperandClass::None => String::new(),
        OperandClass::SingleRegister => reg1.to_string(),
        OperandClass::RegisterPair => format!("{},{}", reg1, reg2),
        OperandClass::Immediate8ToRegister => format!("{},${:02x}", reg1, imm8),
        OperandClass::Immediate16ToRegister => format!("{},${:04x}", reg1, imm16),
        OperandClass::Immediate8Standalone => format!("${:02x}", imm8),
        OperandClass::Immediate16Standalone => format!("${:04x}", imm16),
    }
}

/// Format a decoded instruction as a full listing line
pub fn format_instruction(instr: &Instruction) -> String {
    render(&instr.bytes(), instr.offset, &instr.descriptor).0
}

fn byte_at(bytes: &[u8], index: usize) -> u8 {
    bytes.get(index).copied().unwrap_or(0)
}
