mod common;
use common::*;
use synacor::mach::{Capture, Config, Memory, Quiet, Runtime};

// in r0; out r0; jmp 0
const ECHO: [u16; 6] = [20, R0, 19, R0, 6, 0];

#[test]
fn test_setreg_bypasses_in() {
    let mut r = runtime(&ECHO);
    r.enter("!setreg 7 25734");
    assert_eq!(exec(&mut r), "<7> = 25734\n");
    assert_eq!(r.registers().get(7), Some(25734));
    assert_eq!(r.registers().get(0), Some(0));
    assert_eq!(r.pc(), 0);
}

#[test]
fn test_setreg_bad_index_is_not_fatal() {
    let mut r = runtime(&ECHO);
    r.enter("!setreg 9 1");
    assert_eq!(exec(&mut r), "?BAD ARGUMENT; NO REGISTER 9\n");
    r.enter("ok");
    assert_eq!(exec(&mut r), "ok\n");
}

#[test]
fn test_unrecognized_command() {
    let mut r = runtime(&ECHO);
    r.enter("!frobnicate now");
    r.enter("hi");
    assert_eq!(exec(&mut r), "?UNRECOGNIZED COMMAND; frobnicate\nhi\n");
    assert!(r.fault().is_none());
}

#[test]
fn test_barfreg() {
    let mut r = runtime(&ECHO);
    r.enter("!barfreg");
    assert_eq!(
        exec(&mut r),
        "<0> = 0\n<1> = 0\n<2> = 0\n<3> = 0\n<4> = 0\n<5> = 0\n<6> = 0\n<7> = 0\n"
    );
}

#[test]
fn test_barfstack() {
    // push 5; push 6; then echo
    let mut r = runtime(&[2, 5, 2, 6, 20, R0, 19, R0, 6, 4]);
    r.enter("!barfstack");
    assert_eq!(exec(&mut r), "0: 5\n1: 6\n");
    let mut r = runtime(&ECHO);
    r.enter("!barfstack");
    assert_eq!(exec(&mut r), "STACK EMPTY\n");
}

#[test]
fn test_barfmem_and_dis() {
    let mut r = runtime(&ECHO);
    r.enter("!barfmem 0 2");
    r.enter("!dis 0 2");
    assert_eq!(
        exec(&mut r),
        "0: 20\n1: 32768\n0 (0x0): IN <0>\n2 (0x4): OUT <0>\n"
    );
    r.enter("!barfmem 99");
    r.enter("!dis 6");
    assert_eq!(
        exec(&mut r),
        "?BAD ARGUMENT; ADDRESS 99 OUTSIDE MEMORY OF 6\n?BAD ARGUMENT; ADDRESS 6 OUTSIDE MEMORY OF 6\n"
    );
    assert!(r.fault().is_none());
}

#[test]
fn test_output_before_command_report() {
    let mut r = runtime(&ECHO);
    r.enter("ab!logging off");
    assert_eq!(exec(&mut r), "abLOGGING OFF\n");
}

#[test]
fn test_logging_toggle() {
    let capture = Capture::new();
    let dir = std::env::temp_dir();
    let mut r = runtime_with(&dir, &ECHO, Box::new(capture.clone()));
    r.enter("z");
    exec(&mut r);
    assert!(capture.lines().is_empty());

    r.enter("!logging on");
    assert_eq!(exec(&mut r), "LOGGING ON\n");
    r.enter("y");
    exec(&mut r);
    let lines = capture.lines();
    assert!(lines.contains(&"[TRACE] 0 (0x0): IN <0>".to_string()));
    assert!(lines.contains(&"[TRACE] <0> := 121".to_string()));
    assert!(lines.contains(&"[TRACE] 2 (0x4): OUT <0>".to_string()));

    r.enter("!logging off");
    exec(&mut r);
    let before = capture.lines().len();
    r.enter("x");
    exec(&mut r);
    assert_eq!(capture.lines().len(), before);
}

#[test]
fn test_custom_sentinel() {
    let dir = std::env::temp_dir();
    let config = Config {
        sentinel: b'#',
        snapshot_dir: dir,
        ..Config::default()
    };
    let memory = Memory::from_words(ECHO.to_vec()).unwrap();
    let mut r = Runtime::new(memory, config, Box::new(Quiet::default()));
    r.enter("!barfreg");
    assert_eq!(exec(&mut r), "!barfreg\n");
    r.enter("#setreg 3 12");
    assert_eq!(exec(&mut r), "<3> = 12\n");
    assert_eq!(r.registers().get(3), Some(12));
}
