//! Integration tests for the 8080 disassembler

use dis8080::disassembler::formatter::format_instruction;
use dis8080::{disassemble, listing, write_listing, OperandClass};

fn lines(bytes: &[u8]) -> Vec<String> {
    disassemble(bytes).iter().map(format_instruction).collect()
}

#[test]
fn test_nop_line() {
    assert_eq!(lines(&[0x00]), vec!["0000 00       NOP"]);
}

#[test]
fn test_immediate8_to_register_line() {
    assert_eq!(lines(&[0x06, 0x05]), vec!["0000 06 05    MVI    B,$05"]);
}

#[test]
fn test_immediate16_to_register_line() {
    assert_eq!(lines(&[0x01, 0x34, 0x12]), vec!["0000 01 34 12 LXI    B,$1234"]);
}

#[test]
fn test_immediate16_standalone_line() {
    assert_eq!(lines(&[0xC3, 0x00, 0x10]), vec!["0000 c3 00 10 JMP    $1000"]);
}

#[test]
fn test_undefined_opcode_line() {
    assert_eq!(lines(&[0x08]), vec!["0000 08       --"]);
}

#[test]
fn test_multi_instruction_disassembly() {
    let bytes = &[
        0x31, 0x00, 0x24, // LXI SP,$2400
        0x3E, 0x2A,       // MVI A,$2a
        0xD3, 0x01,       // OUT $01
        0x78,             // MOV A,B
        0xF5,             // PUSH PSW
        0xDD,             // undefined
        0xCD, 0xAD, 0xDE, // CALL $dead
        0xEF,             // RST 5
    ];

    assert_eq!(
        lines(bytes),
        vec![
            "0000 31 00 24 LXI    SP,$2400",
            "0003 3e 2a    MVI    A,$2a",
            "0005 d3 01    OUT    $01",
            "0007 78       MOV    A,B",
            "0008 f5       PUSH   PSW",
            "0009 dd       --",
            "000a cd ad de CALL   $dead",
            "000d ef       RST    5",
        ]
    );
}

#[test]
fn test_offsets_follow_consumed_lengths() {
    let bytes = &[0x00, 0x06, 0x01, 0x21, 0x00, 0x20, 0x76];
    let offsets: Vec<usize> = disassemble(bytes).iter().map(|i| i.offset).collect();
    assert_eq!(offsets, vec![0, 1, 3, 6]);
}

#[test]
fn test_truncated_trailing_instruction() {
    let instructions = disassemble(&[0x00, 0x06]);

    assert_eq!(instructions.len(), 2);
    assert_eq!(instructions[1].offset, 1);
    assert_eq!(instructions[1].size_bytes, 1);
    assert!(instructions[1].is_truncated());
    assert_eq!(format_instruction(&instructions[1]), "0001 06       MVI    B,$00");
}

#[test]
fn test_truncated_sixteen_bit_operand() {
    assert_eq!(lines(&[0x32, 0xFF]), vec!["0000 32 ff    STA    $00ff"]);
    assert_eq!(lines(&[0xC3]), vec!["0000 c3       JMP    $0000"]);
}

#[test]
fn test_operand_classes_in_sample_program() {
    let classes: Vec<OperandClass> = disassemble(&[0x00, 0x3C, 0x41, 0x0E, 0x01, 0x11, 0x00, 0x00, 0xFE, 0x09, 0xC2, 0x00, 0x00])
        .iter()
        .map(|i| i.descriptor.operand_class)
        .collect();

    assert_eq!(
        classes,
        vec![
            OperandClass::None,
            OperandClass::SingleRegister,
            OperandClass::RegisterPair,
            OperandClass::Immediate8ToRegister,
            OperandClass::Immediate16ToRegister,
            OperandClass::Immediate8Standalone,
            OperandClass::Immediate16Standalone,
        ]
    );
}

#[test]
fn test_listing_is_idempotent() {
    let bytes: Vec<u8> = (0..=255u8).rev().collect();
    assert_eq!(listing(&bytes), listing(&bytes));

    let mut first = Vec::new();
    let mut second = Vec::new();
    write_listing(&bytes, &mut first).unwrap();
    write_listing(&bytes, &mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_disassembly() {
    assert_eq!(disassemble(&[]).len(), 0);
    assert_eq!(listing(&[]), "");
}
