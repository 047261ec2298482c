use stackmachine::lang::ErrorCode;
use stackmachine::mach::{Buffer, Flow, Interpreter, Val};
use stackmachine::term::{load, session};
use std::path::PathBuf;

fn source_file(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("sm-{}-{}.fs", std::process::id(), name));
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_load() {
    let path = source_file("load", "1 2\n+ .\n\n3\n");
    let mut forth = Interpreter::new(Buffer::default());
    let flow = load(&mut forth, path.to_str().unwrap()).unwrap();
    assert_eq!(flow, Flow::Continue);
    assert_eq!(forth.io().output(), "3 ");
    assert_eq!(forth.machine().elements(), &[Val::Integer(3)]);
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_load_reports_line() {
    let path = source_file("line", "1\n2 nope\n3\n");
    let name = path.to_str().unwrap().to_string();
    let mut forth = Interpreter::new(Buffer::default());
    let e = load(&mut forth, &name).unwrap_err();
    assert_eq!(e.code(), ErrorCode::UndefinedWord);
    assert_eq!(
        e.to_string(),
        format!("undefined word: nope; in line 2 of {}", name)
    );
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_load_missing_file() {
    let mut forth = Interpreter::new(Buffer::default());
    let e = load(&mut forth, "/nonexistent/sm/missing.fs").unwrap_err();
    assert_eq!(e.code(), ErrorCode::FileNotFound);
    assert!(!e.is_fatal());
}

#[test]
fn test_load_bye() {
    let path = source_file("bye", "1 .\nbye\n2 .\n");
    let mut forth = Interpreter::new(Buffer::default());
    let flow = load(&mut forth, path.to_str().unwrap()).unwrap();
    assert_eq!(flow, Flow::Exit);
    assert_eq!(forth.io().output(), "1 ");
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_session() {
    let path = source_file("session", "40 2\n");
    let files = vec![
        "/nonexistent/sm/missing.fs".to_string(),
        path.to_str().unwrap().to_string(),
    ];
    let mut buffer = Buffer::new(&["+ ."]);
    session(Interpreter::new(&mut buffer), &files, false).unwrap();
    assert_eq!(
        buffer.output(),
        "error: file not found: /nonexistent/sm/missing.fs\n ok\n42  ok\n"
    );
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_session_ends_on_bye() {
    let path = source_file("session-bye", "bye\n");
    let files = vec![path.to_str().unwrap().to_string()];
    let mut buffer = Buffer::new(&["1 ."]);
    session(Interpreter::new(&mut buffer), &files, true).unwrap();
    assert_eq!(buffer.output(), "");
    std::fs::remove_file(path).unwrap();
}
