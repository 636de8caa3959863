use super::*;
use std::io::Cursor;

fn dialogs(input: &str) -> TerminalDialogs<Cursor<Vec<u8>>, Vec<u8>> {
    TerminalDialogs::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn written(d: TerminalDialogs<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    let (_, output) = d.into_inner();
    String::from_utf8(output).unwrap()
}

#[test]
fn prompt_returns_entered_line() {
    let mut d = dialogs("tok-42\n");
    assert_eq!(d.prompt(PROMPT_MESSAGE).as_deref(), Some("tok-42"));
    assert_eq!(written(d), "Please enter your auth token: ");
}

#[test]
fn prompt_strips_crlf() {
    let mut d = dialogs("tok\r\n");
    assert_eq!(d.prompt("?").as_deref(), Some("tok"));
}

#[test]
fn prompt_keeps_inner_whitespace() {
    let mut d = dialogs(" a b \n");
    assert_eq!(d.prompt("?").as_deref(), Some(" a b "));
}

#[test]
fn prompt_empty_line_is_none() {
    let mut d = dialogs("\n");
    assert_eq!(d.prompt("?"), None);
}

#[test]
fn prompt_end_of_input_is_none() {
    let mut d = dialogs("");
    assert_eq!(d.prompt("?"), None);
}

#[test]
fn prompt_reads_one_line_per_call() {
    let mut d = dialogs("first\nsecond\n");
    assert_eq!(d.prompt("?").as_deref(), Some("first"));
    assert_eq!(d.prompt("?").as_deref(), Some("second"));
    assert_eq!(d.prompt("?"), None);
}

#[test]
fn alert_writes_message_line() {
    let mut d = dialogs("");
    d.alert(DECLINED_MESSAGE);
    assert_eq!(written(d), "You need a token to proceed.\n");
}
