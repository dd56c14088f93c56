//! Basic disassembler usage example

use dis8080::disassembler::formatter::format_instruction;
use dis8080::disassemble;

fn main() {
    // Example machine code bytes
    let code = &[
        0x31, 0x00, 0x24, // LXI SP,$2400
        0x3E, 0x2A, // MVI A,$2a
        0xD3, 0x01, // OUT $01
        0x78, // MOV A,B
        0xC3, 0x00, 0x00, // JMP $0000
    ];

    let instructions = disassemble(code);

    println!("Disassembled code:");
    for instr in instructions {
        println!("{}", format_instruction(&instr));
    }
}
