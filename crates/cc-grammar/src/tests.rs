use crate::{deserialize, field, is_hex, serialize, ClownRecord};
use cc_cipher::{Algorithm, CipherParams};
use cc_core::ClownError;

fn cfg_record() -> ClownRecord {
    let mut record = ClownRecord::new("cfg");
    record.set(field::KEY, "k1").set(field::IV, "i1");
    record
}

// ========== Record ==========

#[test]
fn test_record_insertion_order() {
    let mut record = ClownRecord::new("r");
    record.set("b", "2").set("a", "1").set("c", "3");
    let keys: Vec<_> = record.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn test_record_set_replaces_in_place() {
    let mut record = ClownRecord::new("r");
    record.set("a", "1").set("b", "2").set("a", "9");
    assert_eq!(record.get("a"), Some("9"));
    let keys: Vec<_> = record.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_record_stringified_values() {
    let mut record = ClownRecord::new("r");
    record.set_stringified("n", &42).unwrap();
    record.set_stringified("flag", &true).unwrap();
    record.set_stringified("s", &"plain").unwrap();
    record.set_stringified("list", &vec!["a", "b"]).unwrap();
    assert_eq!(record.get("n"), Some("42"));
    assert_eq!(record.get("flag"), Some("true"));
    assert_eq!(record.get("s"), Some("plain"));
    assert_eq!(record.get("list"), Some(r#"["a","b"]"#));
}

// ========== Serialize ==========

#[test]
fn test_serialize_cfg_scenario() {
    let text = serialize(&cfg_record(), None).unwrap();
    assert_eq!(text, "[cfg].[key]:[k1].[iv]:[i1]");
}

#[test]
fn test_serialize_drops_undefined_values() {
    let mut record = ClownRecord::new("cfg");
    record.set("key", "k1");
    record.set_optional("salt", None);
    record.set("iv", "i1");
    let text = serialize(&record, None).unwrap();
    assert_eq!(text, "[cfg].[key]:[k1].[iv]:[i1]");
}

#[test]
fn test_serialize_empty_record() {
    let record = ClownRecord::new("empty");
    assert_eq!(serialize(&record, None).unwrap(), "[empty]");
}

#[test]
fn test_serialize_rejects_delimiter_in_value() {
    let mut record = ClownRecord::new("cfg");
    record.set("key", "bad].[value");
    let err = serialize(&record, None).unwrap_err();
    assert!(matches!(err, ClownError::GrammarParseError(_)));
}

#[test]
fn test_serialize_rejects_delimiter_in_file_name() {
    let record = ClownRecord::new("bad]:[name");
    let err = serialize(&record, None).unwrap_err();
    assert!(matches!(err, ClownError::GrammarParseError(_)));
}

// ========== Deserialize ==========

#[test]
fn test_deserialize_cfg_scenario() {
    let record = deserialize("[cfg].[key]:[k1].[iv]:[i1]", None).unwrap();
    assert_eq!(record.file_name(), "cfg");
    assert_eq!(record.get("key"), Some("k1"));
    assert_eq!(record.get("iv"), Some("i1"));
    assert_eq!(record.len(), 2);
}

#[test]
fn test_deserialize_file_name_only() {
    let record = deserialize("[solo]", None).unwrap();
    assert_eq!(record.file_name(), "solo");
    assert!(record.is_empty());
}

#[test]
fn test_roundtrip_preserves_order_and_values() {
    let mut record = ClownRecord::new("msg");
    record
        .set(field::ALGORITHM, "aes192")
        .set(field::SALT, "pepper")
        .set(field::MESSAGE, "🤡🤠🎪 glyphs & spaces")
        .set("empty", "");
    let text = serialize(&record, None).unwrap();
    assert_eq!(deserialize(&text, None).unwrap(), record);
}

#[test]
fn test_deserialize_rejects_unbracketed_text() {
    let err = deserialize("not a clown file", None).unwrap_err();
    assert!(matches!(err, ClownError::GrammarParseError(_)));
}

#[test]
fn test_deserialize_rejects_entry_without_kv_delimiter() {
    let err = deserialize("[cfg].[broken]", None).unwrap_err();
    assert!(matches!(err, ClownError::GrammarParseError(_)));
}

// ========== Hex heuristic ==========

#[test]
fn test_is_hex() {
    assert!(is_hex("deadbeef0123"));
    assert!(is_hex("ABCDEF"));
    assert!(is_hex("\"deadbeef\""));
    assert!(!is_hex(""));
    assert!(!is_hex("xyz"));
    assert!(!is_hex("[cfg].[key]:[k1]"));
}

#[test]
fn test_is_hex_ambiguity_is_accepted() {
    // a legitimately hex-looking value is indistinguishable from ciphertext
    assert!(is_hex("cafe"));
}

// ========== Encryption layering ==========

#[test]
fn test_encrypted_roundtrip() {
    let params = CipherParams::new("grammar key", "grammar iv").with_algorithm(Algorithm::Aes128);
    let record = cfg_record();
    let blob = serialize(&record, Some(&params)).unwrap();
    assert!(is_hex(&blob));
    assert!(blob.starts_with('"') && blob.ends_with('"'));
    assert_eq!(deserialize(&blob, Some(&params)).unwrap(), record);
}

#[test]
fn test_deserialize_plain_text_with_params_skips_decryption() {
    // brackets are not hex characters, so the heuristic passes the text through
    let params = CipherParams::new("k", "i");
    let record = deserialize("[cfg].[key]:[k1].[iv]:[i1]", Some(&params)).unwrap();
    assert_eq!(record.file_name(), "cfg");
}

#[test]
fn test_encrypted_blob_without_params_fails_parse() {
    let params = CipherParams::new("k", "i").with_algorithm(Algorithm::Aes128);
    let blob = serialize(&cfg_record(), Some(&params)).unwrap();
    assert!(matches!(deserialize(&blob, None), Err(ClownError::GrammarParseError(_))));
}
