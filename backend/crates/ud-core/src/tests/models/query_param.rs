use crate::QueryParam;

#[test]
fn test_query_param_conversions() {
    assert_eq!(QueryParam::from(42), QueryParam::Integer(42));
    assert_eq!(QueryParam::from("x"), QueryParam::Text("x".to_string()));
    assert_eq!(
        QueryParam::from(String::from("y")),
        QueryParam::Text("y".to_string())
    );
}

#[test]
fn test_query_param_display() {
    assert_eq!(QueryParam::Integer(-3).to_string(), "-3");
    assert_eq!(QueryParam::Text("alice".to_string()).to_string(), "'alice'");
}
