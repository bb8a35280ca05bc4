use super::*;

const R0: Word = 32768;
const R1: Word = 32769;
const R2: Word = 32770;

fn binary(opcode: Word, b: Word, c: Word) -> Word {
    let mut r = runtime(&[opcode, R0, b, c, 0]);
    assert_eq!(run(&mut r), "");
    assert_eq!(r.pc(), 5);
    r.registers().get(0).unwrap()
}

#[test]
fn test_add_wraps() {
    for &(b, c) in &[(0, 0), (1, 2), (32758, 15), (32767, 32767), (16384, 16384)] {
        let result = binary(9, b, c);
        assert_eq!(result as u32, (b as u32 + c as u32) % 32768);
        assert!(result < 32768);
    }
}

#[test]
fn test_mult_wraps() {
    for &(b, c) in &[(0, 9), (3, 7), (32767, 32767), (200, 300), (16384, 2)] {
        assert_eq!(binary(10, b, c) as u32, (b as u32 * c as u32) % 32768);
    }
}

#[test]
fn test_mod() {
    assert_eq!(binary(11, 17, 5), 2);
    assert_eq!(binary(11, 4, 9), 4);
}

#[test]
fn test_mod_by_zero_faults() {
    let mut r = runtime(&[11, R0, 17, 0, 0]);
    assert_eq!(run(&mut r), "!DIVISION BY ZERO AT 0 (OPCODE 11)\n");
    assert_eq!(r.pc(), 0);
    assert_eq!(r.registers().get(0), Some(0));
}

#[test]
fn test_bitwise() {
    assert_eq!(binary(12, 0b1100, 0b1010), 0b1000);
    assert_eq!(binary(13, 0b1100, 0b1010), 0b1110);
}

#[test]
fn test_not_stays_in_fifteen_bits() {
    let mut r = runtime(&[14, R0, 0, 14, R1, 32767, 14, R2, 0b101, 0]);
    run(&mut r);
    assert_eq!(r.registers().get(0), Some(32767));
    assert_eq!(r.registers().get(1), Some(0));
    assert_eq!(r.registers().get(2), Some(32767 - 0b101));
}

#[test]
fn test_eq_gt_are_zero_or_one() {
    assert_eq!(binary(4, 7, 7), 1);
    assert_eq!(binary(4, 7, 8), 0);
    assert_eq!(binary(5, 9, 8), 1);
    assert_eq!(binary(5, 8, 8), 0);
    assert_eq!(binary(5, 0, 32767), 0);
}

#[test]
fn test_register_operands() {
    // set r0 60; set r1 5; add r2 r0 r1
    let mut r = runtime(&[1, R0, 60, 1, R1, 5, 9, R2, R0, R1, 0]);
    run(&mut r);
    assert_eq!(r.registers().as_array(), &[60, 5, 65, 0, 0, 0, 0, 0]);
}

#[test]
fn test_literal_destination_faults_before_operands() {
    // add 5 <invalid> 1: the destination is checked first
    let mut r = runtime(&[9, 5, 40000, 1]);
    let out = run(&mut r);
    assert_eq!(out, "!INVALID DESTINATION AT 0 (OPCODE 9); WORD 5\n");
}

#[test]
fn test_invalid_operand() {
    let mut r = runtime(&[2, 32776]);
    assert_eq!(run(&mut r), "!INVALID OPERAND AT 0 (OPCODE 2); WORD 32776\n");
}
