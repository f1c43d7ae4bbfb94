use crate::RecordId;

#[test]
fn test_record_id_display() {
    assert_eq!(RecordId(42).to_string(), "42");
}

#[test]
fn test_record_id_from_i64() {
    assert_eq!(RecordId::from(7).as_i64(), 7);
}

#[test]
fn test_record_id_serializes_as_plain_integer() {
    assert_eq!(serde_json::to_string(&RecordId(9)).unwrap(), "9");
}
