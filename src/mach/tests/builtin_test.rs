use super::*;
use crate::lang::ErrorCode;
use crate::mach::{Builtin, Flow, Val, Xt};

#[test]
fn test_every_builtin_is_defined() {
    let forth = interpreter();
    for builtin in Builtin::ALL.iter() {
        let entry = forth.find_word(builtin.name()).unwrap();
        assert_eq!(entry.xt, Xt::Builtin(*builtin));
        assert!(!entry.immediate);
    }
    assert_eq!(forth.dictionary().len(), Builtin::ALL.len());
}

#[test]
fn test_evaluate_restores_input() {
    let mut forth = interpreter();
    forth.interpret("s\" 1 2 +\" evaluate 10 *").unwrap();
    assert_eq!(forth.machine().elements(), &[Val::Integer(30)]);
}

#[test]
fn test_evaluate_shares_stack() {
    let mut forth = interpreter();
    forth.interpret("5 s\" dup *\" evaluate").unwrap();
    assert_eq!(forth.machine().elements(), &[Val::Integer(25)]);
}

#[test]
fn test_bye_unwinds_evaluate() {
    let mut forth = interpreter();
    let flow = forth.interpret("1 s\" 2 bye 3\" evaluate 4").unwrap();
    assert_eq!(flow, Flow::Exit);
    assert_eq!(
        forth.machine().elements(),
        &[Val::Integer(1), Val::Integer(2)]
    );
}

#[test]
fn test_tick_and_execute() {
    let mut forth = interpreter();
    forth.interpret("2 ' dup execute").unwrap();
    assert_eq!(
        forth.machine().elements(),
        &[Val::Integer(2), Val::Integer(2)]
    );
    let e = forth.interpret("' nothing").unwrap_err();
    assert_eq!(e.code(), ErrorCode::UndefinedWord);
    assert_eq!(e.detail(), "nothing");
    let e = forth.interpret("'").unwrap_err();
    assert_eq!(e.code(), ErrorCode::UndefinedWord);
}

#[test]
fn test_allocate_store_fetch() {
    let mut forth = interpreter();
    forth.interpret("2 allocate drop").unwrap();
    forth.interpret("dup 7 swap ! dup cell+ 8 swap !").unwrap();
    forth.interpret("dup @ swap cell+ @").unwrap();
    assert_eq!(
        forth.machine().elements(),
        &[Val::Integer(7), Val::Integer(8)]
    );
}

#[test]
fn test_allocate_errors() {
    let mut forth = interpreter();
    let e = forth.interpret("-1 allocate").unwrap_err();
    assert_eq!(e.code(), ErrorCode::OutOfRange);
    forth.machine_mut().reset();
    forth.interpret("70000 allocate").unwrap();
    assert_eq!(
        forth.machine().elements(),
        &[Val::Integer(0), Val::Integer(-59)]
    );
}

#[test]
fn test_cell_plus_needs_address() {
    let mut forth = interpreter();
    let e = forth.interpret("1 cell+").unwrap_err();
    assert_eq!(e.code(), ErrorCode::AddressRequired);
}

#[test]
fn test_fetch_invalid_address() {
    let mut forth = interpreter();
    forth.machine_mut().push(Val::Address(99)).unwrap();
    let e = forth.interpret("@").unwrap_err();
    assert_eq!(e.code(), ErrorCode::InvalidAddress);
}

#[test]
fn test_emit() {
    let mut forth = interpreter();
    forth.interpret("72 emit 105 emit bl emit").unwrap();
    assert_eq!(forth.io().output(), "Hi ");
    let e = forth.interpret("-1 emit").unwrap_err();
    assert_eq!(e.code(), ErrorCode::OutOfRange);
}

#[test]
fn test_dot_quote() {
    let mut forth = interpreter();
    forth.interpret(".\" hello, world\" cr").unwrap();
    assert_eq!(forth.io().output(), "hello, world\n");
}

#[test]
fn test_text_values() {
    let mut forth = interpreter();
    forth.interpret("s\" abc\" .").unwrap();
    assert_eq!(forth.io().output(), "\"abc\" ");
}

#[test]
fn test_primitive_sees_machine() {
    let mut forth = interpreter();
    forth.define_primitive("double", |m| {
        m.dup()?;
        m.add()
    });
    forth.interpret("21 double .").unwrap();
    assert_eq!(forth.io().output(), "42 ");
}

#[test]
fn test_find_immediate_word() {
    let mut forth = interpreter();
    forth
        .dictionary
        .define("now", Xt::Builtin(Builtin::Cr), true);
    forth.interpret("s\" NOW\" find").unwrap();
    assert_eq!(
        forth.machine().elements(),
        &[Val::Xt(Xt::Builtin(Builtin::Cr)), Val::Integer(1)]
    );
}

#[test]
fn test_nesting_is_unwound() {
    let mut forth = interpreter();
    let e = forth.interpret("s\" 1 nothing\" evaluate").unwrap_err();
    assert_eq!(e.code(), ErrorCode::UndefinedWord);
    assert!(forth.machine().rstack().is_empty());
    let flow = forth.interpret("s\" 2 bye 3\" evaluate").unwrap();
    assert_eq!(flow, Flow::Exit);
    assert!(forth.machine().rstack().is_empty());
}
