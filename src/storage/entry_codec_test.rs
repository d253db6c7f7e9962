use super::*;
use crate::ApplyError;

#[test]
fn test_encode_produces_reserved_triple() {
    let payload = KvCommand::set("name", "abc").encode().unwrap();
    assert_eq!(payload, br#"["name","abc",""]"#.to_vec());
}

#[test]
fn test_decode_encoded_command() {
    let command = KvCommand::set("k\"ey", "välue\n");
    let payload = command.encode().unwrap();

    assert_eq!(KvCommand::decode(&payload).unwrap(), command);
}

#[test]
fn test_decode_ignores_reserved_slot() {
    let command = KvCommand::decode(br#"["a","b","ignored"]"#).unwrap();
    assert_eq!(command, KvCommand::set("a", "b"));
}

#[test]
fn test_decode_fills_missing_slots_with_empty_strings() {
    assert_eq!(
        KvCommand::decode(br#"["only-key"]"#).unwrap(),
        KvCommand::set("only-key", "")
    );
    assert_eq!(KvCommand::decode(b"[]").unwrap(), KvCommand::default());
}

#[test]
fn test_decode_rejects_too_many_fields() {
    let result = KvCommand::decode(br#"["a","b","c","d"]"#);
    assert!(matches!(result, Err(ApplyError::MalformedEntry(_))));
}

#[test]
fn test_decode_rejects_non_json_payload() {
    assert!(matches!(
        KvCommand::decode(b"\x00\x01garbage"),
        Err(ApplyError::MalformedEntry(_))
    ));
    assert!(matches!(
        KvCommand::decode(br#"{"key":"a"}"#),
        Err(ApplyError::MalformedEntry(_))
    ));
    assert!(matches!(
        KvCommand::decode(br#"[1, 2, 3]"#),
        Err(ApplyError::MalformedEntry(_))
    ));
}

#[test]
fn test_empty_strings_round_trip() {
    let command = KvCommand::set("", "");
    assert_eq!(KvCommand::decode(&command.encode().unwrap()).unwrap(), command);
}
