//! # Operand Classes
//!
//! This module defines the seven operand shapes used by 8080 instructions.
//! The class of an opcode fixes both the instruction length and the way its
//! operand text is rendered.

/// 8080 operand class enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: None, SingleRegister, RegisterPair
/// - **1 byte**: Immediate8ToRegister, Immediate8Standalone
/// - **2 bytes**: Immediate16ToRegister, Immediate16Standalone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandClass {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: NOP, RLC, HLT
    None,

    /// One register (or register pair, or restart vector) fixed by the opcode.
    ///
    /// Examples: INR B, PUSH PSW, RST 3
    SingleRegister,

    /// 8-bit immediate loaded into a register.
    ///
    /// Example: MVI B,$05
    Immediate8ToRegister,

    /// 16-bit immediate loaded into a register pair, stored little-endian.
    ///
    /// Example: LXI SP,$2400
    Immediate16ToRegister,

    /// Destination and source register, both fixed by the opcode.
    ///
    /// Example: MOV A,M
    RegisterPair,

    /// 8-bit immediate or port number with no register.
    ///
    /// Examples: ADI $10, OUT $fe
    Immediate8Standalone,

    /// 16-bit address or literal with no register, stored little-endian.
    ///
    /// Examples: JMP $1000, STA $2000
    Immediate16Standalone,
}

impl OperandClass {
    /// Total instruction size in bytes (opcode plus operand bytes).
    pub const fn size_bytes(self) -> u8 {
        match self {
            OperandClass::None | OperandClass::SingleRegister | OperandClass::RegisterPair => 1,
            OperandClass::Immediate8ToRegister | OperandClass::Immediate8Standalone => 2,
            OperandClass::Immediate16ToRegister | OperandClass::Immediate16Standalone => 3,
        }
    }

    /// Number of immediate bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        self.size_bytes() - 1
    }

    /// Whether the operand text names at least one register.
    pub const fn has_register(self) -> bool {
        matches!(
            self,
            OperandClass::SingleRegister
                | OperandClass::RegisterPair
                | OperandClass::Immediate8ToRegister
                | OperandClass::Immediate16ToRegister
        )
    }
}
