//! # Opcode Decode Table
//!
//! This module contains the 256-entry Intel 8080 decode table that serves as the
//! single source of truth for instruction shape.
//!
//! The table covers:
//! - **244 documented instructions** - Official 8080 opcodes
//! - **12 undefined opcodes** - Marked with the `"--"` mnemonic
//!
//! Each entry records:
//! - Mnemonic (instruction name)
//! - Operand class
//! - Instruction size in bytes
//! - Register operand(s) fixed by the opcode, if any
//!
//! [`lookup`] is an exhaustive `match` over every `u8` value with no wildcard
//! arm, so a missing opcode is a compile error rather than a silent default.

use crate::operand::OperandClass;

/// Mnemonic used for opcodes the 8080 does not define.
pub const UNDEFINED_MNEMONIC: &str = "--";

/// Static description of a single 8080 opcode.
///
/// # Examples
///
/// ```
/// use dis8080::{lookup, OperandClass};
///
/// let lxi = lookup(0x01);
/// assert_eq!(lxi.mnemonic, "LXI");
/// assert_eq!(lxi.operand_class, OperandClass::Immediate16ToRegister);
/// assert_eq!(lxi.size_bytes, 3);
/// assert_eq!(lxi.register1, Some("B"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionDescriptor {
    /// Instruction mnemonic (e.g., "MOV", "LXI", "--" for undefined opcodes).
    pub mnemonic: &'static str,

    /// Shape of the operand, which also fixes the size.
    pub operand_class: OperandClass,

    /// Total instruction size in bytes (opcode + operands), always 1-3.
    ///
    /// Always equal to `operand_class.size_bytes()`.
    pub size_bytes: u8,

    /// First register operand (destination for MOV, the restart vector for RST).
    pub register1: Option<&'static str>,

    /// Second register operand, only set for [`OperandClass::RegisterPair`].
    pub register2: Option<&'static str>,
}

impl InstructionDescriptor {
    const fn new(
        mnemonic: &'static str,
        operand_class: OperandClass,
        register1: Option<&'static str>,
        register2: Option<&'static str>,
    ) -> Self {
        Self {
            mnemonic,
            operand_class,
            size_bytes: operand_class.size_bytes(),
            register1,
            register2,
        }
    }

    /// Whether this descriptor is the undefined-opcode sentinel.
    pub fn is_undefined(&self) -> bool {
        self.mnemonic == UNDEFINED_MNEMONIC
    }
}

/// Sentinel descriptor for undefined opcodes: one byte, no operand.
pub const UNDEFINED: InstructionDescriptor =
    InstructionDescriptor::new(UNDEFINED_MNEMONIC, OperandClass::None, None, None);

const fn none(mnemonic: &'static str) -> InstructionDescriptor {
    InstructionDescriptor::new(mnemonic, OperandClass::None, None, None)
}

const fn reg(mnemonic: &'static str, r: &'static str) -> InstructionDescriptor {
    InstructionDescriptor::new(mnemonic, OperandClass::SingleRegister, Some(r), None)
}

const fn pair(mnemonic: &'static str, dst: &'static str, src: &'static str) -> InstructionDescriptor {
    InstructionDescriptor::new(mnemonic, OperandClass::RegisterPair, Some(dst), Some(src))
}

const fn imm8_to_reg(mnemonic: &'static str, r: &'static str) -> InstructionDescriptor {
    InstructionDescriptor::new(mnemonic, OperandClass::Immediate8ToRegister, Some(r), None)
}

const fn imm16_to_reg(mnemonic: &'static str, r: &'static str) -> InstructionDescriptor {
    InstructionDescriptor::new(mnemonic, OperandClass::Immediate16ToRegister, Some(r), None)
}

const fn imm8(mnemonic: &'static str) -> InstructionDescriptor {
    InstructionDescriptor::new(mnemonic, OperandClass::Immediate8Standalone, None, None)
}

const fn imm16(mnemonic: &'static str) -> InstructionDescriptor {
    InstructionDescriptor::new(mnemonic, OperandClass::Immediate16Standalone, None, None)
}

/// Look up the descriptor for an opcode byte.
///
/// Total over `0x00..=0xFF`; undefined opcodes return [`UNDEFINED`].
pub const fn lookup(opcode: u8) -> InstructionDescriptor {
    match opcode {
        // Loads, increments and rotates
        0x00 => none("NOP"),
        0x01 => imm16_to_reg("LXI", "B"),
        0x02 => reg("STAX", "B"),
        0x03 => reg("INX", "B"),
        0x04 => reg("INR", "B"),
        0x05 => reg("DCR", "B"),
        0x06 => imm8_to_reg("MVI", "B"),
        0x07 => none("RLC"),
        0x09 => reg("DAD", "B"),
        0x0A => reg("LDAX", "B"),
        0x0B => reg("DCX", "B"),
        0x0C => reg("INR", "C"),
        0x0D => reg("DCR", "C"),
        0x0E => imm8_to_reg("MVI", "C"),
        0x0F => none("RRC"),
        0x11 => imm16_to_reg("LXI", "D"),
        0x12 => reg("STAX", "D"),
        0x13 => reg("INX", "D"),
        0x14 => reg("INR", "D"),
        0x15 => reg("DCR", "D"),
        0x16 => imm8_to_reg("MVI", "D"),
        0x17 => none("RAL"),
        0x19 => reg("DAD", "D"),
        0x1A => reg("LDAX", "D"),
        0x1B => reg("DCX", "D"),
        0x1C => reg("INR", "E"),
        0x1D => reg("DCR", "E"),
        0x1E => imm8_to_reg("MVI", "E"),
        0x1F => none("RAR"),
        0x21 => imm16_to_reg("LXI", "H"),
        0x22 => imm16("SHLD"),
        0x23 => reg("INX", "H"),
        0x24 => reg("INR", "H"),
        0x25 => reg("DCR", "H"),
        0x26 => imm8_to_reg("MVI", "H"),
        0x27 => none("DAA"),
        0x29 => reg("DAD", "H"),
        0x2A => imm16("LHLD"),
        0x2B => reg("DCX", "H"),
        0x2C => reg("INR", "L"),
        0x2D => reg("DCR", "L"),
        0x2E => imm8_to_reg("MVI", "L"),
        0x2F => none("CMA"),
        0x31 => imm16_to_reg("LXI", "SP"),
        0x32 => imm16("STA"),
        0x33 => reg("INX", "SP"),
        0x34 => reg("INR", "M"),
        0x35 => reg("DCR", "M"),
        0x36 => imm8_to_reg("MVI", "M"),
        0x37 => none("STC"),
        0x39 => reg("DAD", "SP"),
        0x3A => imm16("LDA"),
        0x3B => reg("DCX", "SP"),
        0x3C => reg("INR", "A"),
        0x3D => reg("DCR", "A"),
        0x3E => imm8_to_reg("MVI", "A"),
        0x3F => none("CMC"),

        // MOV r,r (0x76 is HLT, not MOV M,M)
        0x40 => pair("MOV", "B", "B"),
        0x41 => pair("MOV", "B", "C"),
        0x42 => pair("MOV", "B", "D"),
        0x43 => pair("MOV", "B", "E"),
        0x44 => pair("MOV", "B", "H"),
        0x45 => pair("MOV", "B", "L"),
        0x46 => pair("MOV", "B", "M"),
        0x47 => pair("MOV", "B", "A"),
        0x48 => pair("MOV", "C", "B"),
        0x49 => pair("MOV", "C", "C"),
        0x4A => pair("MOV", "C", "D"),
        0x4B => pair("MOV", "C", "E"),
        0x4C => pair("MOV", "C", "H"),
        0x4D => pair("MOV", "C", "L"),
        0x4E => pair("MOV", "C", "M"),
        0x4F => pair("MOV", "C", "A"),
        0x50 => pair("MOV", "D", "B"),
        0x51 => pair("MOV", "D", "C"),
        0x52 => pair("MOV", "D", "D"),
        0x53 => pair("MOV", "D", "E"),
        0x54 => pair("MOV", "D", "H"),
        0x55 => pair("MOV", "D", "L"),
        0x56 => pair("MOV", "D", "M"),
        0x57 => pair("MOV", "D", "A"),
        0x58 => pair("MOV", "E", "B"),
        0x59 => pair("MOV", "E", "C"),
        0x5A => pair("MOV", "E", "D"),
        0x5B => pair("MOV", "E", "E"),
        0x5C => pair("MOV", "E", "H"),
        0x5D => pair("MOV", "E", "L"),
        0x5E => pair("MOV", "E", "M"),
        0x5F => pair("MOV", "E", "A"),
        0x60 => pair("MOV", "H", "B"),
        0x61 => pair("MOV", "H", "C"),
        0x62 => pair("MOV", "H", "D"),
        0x63 => pair("MOV", "H", "E"),
        0x64 => pair("MOV", "H", "H"),
        0x65 => pair("MOV", "H", "L"),
        0x66 => pair("MOV", "H", "M"),
        0x67 => pair("MOV", "H", "A"),
        0x68 => pair("MOV", "L", "B"),
        0x69 => pair("MOV", "L", "C"),
        0x6A => pair("MOV", "L", "D"),
        0x6B => pair("MOV", "L", "E"),
        0x6C => pair("MOV", "L", "H"),
        0x6D => pair("MOV", "L", "L"),
        0x6E => pair("MOV", "L", "M"),
        0x6F => pair("MOV", "L", "A"),
        0x70 => pair("MOV", "M", "B"),
        0x71 => pair("MOV", "M", "C"),
        0x72 => pair("MOV", "M", "D"),
        0x73 => pair("MOV", "M", "E"),
        0x74 => pair("MOV", "M", "H"),
        0x75 => pair("MOV", "M", "L"),
        0x76 => none("HLT"),
        0x77 => pair("MOV", "M", "A"),
        0x78 => pair("MOV", "A", "B"),
        0x79 => pair("MOV", "A", "C"),
        0x7A => pair("MOV", "A", "D"),
        0x7B => pair("MOV", "A", "E"),
        0x7C => pair("MOV", "A", "H"),
        0x7D => pair("MOV", "A", "L"),
        0x7E => pair("MOV", "A", "M"),
        0x7F => pair("MOV", "A", "A"),

        // Register/memory arithmetic and logic
        0x80 => reg("ADD", "B"),
        0x81 => reg("ADD", "C"),
        0x82 => reg("ADD", "D"),
        0x83 => reg("ADD", "E"),
        0x84 => reg("ADD", "H"),
        0x85 => reg("ADD", "L"),
        0x86 => reg("ADD", "M"),
        0x87 => reg("ADD", "A"),
        0x88 => reg("ADC", "B"),
        0x89 => reg("ADC", "C"),
        0x8A => reg("ADC", "D"),
        0x8B => reg("ADC", "E"),
        0x8C => reg("ADC", "H"),
        0x8D => reg("ADC", "L"),
        0x8E => reg("ADC", "M"),
        0x8F => reg("ADC", "A"),
        0x90 => reg("SUB", "B"),
        0x91 => reg("SUB", "C"),
        0x92 => reg("SUB", "D"),
        0x93 => reg("SUB", "E"),
        0x94 => reg("SUB", "H"),
        0x95 => reg("SUB", "L"),
        0x96 => reg("SUB", "M"),
        0x97 => reg("SUB", "A"),
        0x98 => reg("SBB", "B"),
        0x99 => reg("SBB", "C"),
        0x9A => reg("SBB", "D"),
        0x9B => reg("SBB", "E"),
        0x9C => reg("SBB", "H"),
        0x9D => reg("SBB", "L"),
        0x9E => reg("SBB", "M"),
        0x9F => reg("SBB", "A"),
        0xA0 => reg("ANA", "B"),
        0xA1 => reg("ANA", "C"),
        0xA2 => reg("ANA", "D"),
        0xA3 => reg("ANA", "E"),
        0xA4 => reg("ANA", "H"),
        0xA5 => reg("ANA", "L"),
        0xA6 => reg("ANA", "M"),
        0xA7 => reg("ANA", "A"),
        0xA8 => reg("XRA", "B"),
        0xA9 => reg("XRA", "C"),
        0xAA => reg("XRA", "D"),
        0xAB => reg("XRA", "E"),
        0xAC => reg("XRA", "H"),
        0xAD => reg("XRA", "L"),
        0xAE => reg("XRA", "M"),
        0xAF => reg("XRA", "A"),
        0xB0 => reg("ORA", "B"),
        0xB1 => reg("ORA", "C"),
        0xB2 => reg("ORA", "D"),
        0xB3 => reg("ORA", "E"),
        0xB4 => reg("ORA", "H"),
        0xB5 => reg("ORA", "L"),
        0xB6 => reg("ORA", "M"),
        0xB7 => reg("ORA", "A"),
        0xB8 => reg("CMP", "B"),
        0xB9 => reg("CMP", "C"),
        0xBA => reg("CMP", "D"),
        0xBB => reg("CMP", "E"),
        0xBC => reg("CMP", "H"),
        0xBD => reg("CMP", "L"),
        0xBE => reg("CMP", "M"),
        0xBF => reg("CMP", "A"),

        // Returns, jumps, calls, stack and immediate arithmetic
        0xC0 => none("RNZ"),
        0xC1 => reg("POP", "B"),
        0xC2 => imm16("JNZ"),
        0xC3 => imm16("JMP"),
        0xC4 => imm16("CNZ"),
        0xC5 => reg("PUSH", "B"),
        0xC6 => imm8("ADI"),
        0xC7 => reg("RST", "0"),
        0xC8 => none("RZ"),
        0xC9 => none("RET"),
        0xCA => imm16("JZ"),
        0xCC => imm16("CZ"),
        0xCD => imm16("CALL"),
        0xCE => imm8("ACI"),
        0xCF => reg("RST", "1"),
        0xD0 => none("RNC"),
        0xD1 => reg("POP", "D"),
        0xD2 => imm16("JNC"),
        0xD3 => imm8("OUT"),
        0xD4 => imm16("CNC"),
        0xD5 => reg("PUSH", "D"),
        0xD6 => imm8("SUI"),
        0xD7 => reg("RST", "2"),
        0xD8 => none("RC"),
        0xDA => imm16("JC"),
        0xDB => imm8("IN"),
        0xDC => imm16("CC"),
        0xDE => imm8("SBI"),
        0xDF => reg("RST", "3"),
        0xE0 => none("RPO"),
        0xE1 => reg("POP", "H"),
        0xE2 => imm16("JPO"),
        0xE3 => none("XTHL"),
        0xE4 => imm16("CPO"),
        0xE5 => reg("PUSH", "H"),
        0xE6 => imm8("ANI"),
        0xE7 => reg("RST", "4"),
        0xE8 => none("RPE"),
        0xE9 => none("PCHL"),
        0xEA => imm16("JPE"),
        0xEB => none("XCHG"),
        0xEC => imm16("CPE"),
        0xEE => imm8("XRI"),
        0xEF => reg("RST", "5"),
        0xF0 => none("RP"),
        0xF1 => reg("POP", "PSW"),
        0xF2 => imm16("JP"),
        0xF3 => none("DI"),
        0xF4 => imm16("CP"),
        0xF5 => reg("PUSH", "PSW"),
        0xF6 => imm8("ORI"),
        0xF7 => reg("RST", "6"),
        0xF8 => none("RM"),
        0xF9 => none("SPHL"),
        0xFA => imm16("JM"),
        0xFB => none("EI"),
        0xFC => imm16("CM"),
        0xFE => imm8("CPI"),
        0xFF => reg("RST", "7"),
        // Undefined on the 8080
        0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 | 0xCB | 0xD9 | 0xDD | 0xED | 0xFD => {
            UNDEFINED
        }
    }
}

const fn build_table() -> [InstructionDescriptor; 256] {
    let mut table = [UNDEFINED; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = lookup(i as u8);
        i += 1;
    }
    table
}

/// Complete 256-entry decode table indexed by opcode byte value.
///
/// Built at compile time from [`lookup`].
///
/// ```
/// use dis8080::OPCODE_TABLE;
///
/// assert_eq!(OPCODE_TABLE[0xC3].mnemonic, "JMP");
/// assert_eq!(OPCODE_TABLE[0x08].mnemonic, "--");
/// ```
pub static OPCODE_TABLE: [InstructionDescriptor; 256] = build_table();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_nop() {
        let nop = lookup(0x00);
        assert_eq!(nop.mnemonic, "NOP");
        assert_eq!(nop.operand_class, OperandClass::None);
        assert_eq!(nop.size_bytes, 1);
        assert_eq!(nop.register1, None);
    }

    #[test]
    fn test_lookup_mov_registers() {
        let mov = lookup(0x41);
        assert_eq!(mov.mnemonic, "MOV");
        assert_eq!(mov.operand_class, OperandClass::RegisterPair);
        assert_eq!(mov.register1, Some("B"));
        assert_eq!(mov.register2, Some("C"));
    }

    #[test]
    fn test_hlt_sits_in_mov_block() {
        assert_eq!(lookup(0x76).mnemonic, "HLT");
        assert_eq!(lookup(0x76).operand_class, OperandClass::None);
    }

    #[test]
    fn test_restart_vectors() {
        for (i, opcode) in [0xC7u8, 0xCF, 0xD7, 0xDF, 0xE7, 0xEF, 0xF7, 0xFF].iter().enumerate() {
            let rst = lookup(*opcode);
            assert_eq!(rst.mnemonic, "RST");
            assert_eq!(rst.register1.map(str::to_string), Some(i.to_string()));
        }
    }

    #[test]
    fn test_undefined_opcodes() {
        let undefined: Vec<u8> = (0..=255u8).filter(|&op| lookup(op).is_undefined()).collect();
        assert_eq!(
            undefined,
            vec![0x08, 0x10, 0x18, 0x20, 0x28, 0x30, 0x38, 0xCB, 0xD9, 0xDD, 0xED, 0xFD]
        );
        assert_eq!(lookup(0xCB), UNDEFINED);
    }

    #[test]
    fn test_table_matches_lookup() {
        for opcode in 0..=255u8 {
            assert_eq!(OPCODE_TABLE[opcode as usize], lookup(opcode));
        }
    }
}
