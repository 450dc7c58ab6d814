use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_RUNTIME_ERROR);
}

#[test]
fn runtime_error_matches_documented_code() {
    assert_eq!(EXIT_RUNTIME_ERROR, 2);
}
