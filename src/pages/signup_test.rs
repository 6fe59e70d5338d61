use super::*;

#[test]
fn submit_button_reflects_submitting_flag() {
    assert_eq!(submit_label(false), "Create Account");
    assert_eq!(submit_label(true), "Creating Account...");
}

#[test]
fn submit_button_class_marks_in_flight() {
    assert_eq!(submit_class(false), "submit-btn");
    assert_eq!(submit_class(true), "submit-btn submitting");
}
