//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary byte sequences to the disassembler
//! to find edge cases and crashes in instruction decoding and rendering.

#![no_main]

use dis8080::{disassemble, format_instruction, write_listing};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|bytes: &[u8]| {
    // Limit input size to prevent OOM
    if bytes.len() > 65536 {
        return;
    }

    let instructions = disassemble(bytes);

    // Verify invariants
    let mut expected_offset = 0;
    for instr in &instructions {
        // Each instruction starts where the previous one ended
        assert_eq!(instr.offset, expected_offset);

        // Size should be 1-3 bytes and never exceed the table entry
        assert!(instr.size_bytes >= 1 && instr.size_bytes <= 3);
        assert!(instr.size_bytes <= instr.descriptor.size_bytes);
        assert_eq!(instr.operand_bytes.len() + 1, instr.size_bytes as usize);

        // Only the final instruction may be cut short
        if instr.is_truncated() {
            assert_eq!(instr.offset + instr.size_bytes as usize, bytes.len());
        }

        assert!(!format_instruction(instr).ends_with(' '));
        expected_offset += instr.size_bytes as usize;
    }

    // Total size should equal input size
    assert_eq!(expected_offset, bytes.len());

    // The streaming driver agrees with the collected pass
    let mut out = Vec::new();
    let lines = write_listing(bytes, &mut out).unwrap();
    assert_eq!(lines, instructions.len());
});
