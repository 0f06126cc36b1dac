use crate::Field;

#[test]
fn test_field_label() {
    assert_eq!(Field::ConfirmPassword.label(), "password confirmation");
    assert_eq!(Field::Name.as_str(), "name");
}

#[test]
fn test_field_display_is_wire_name() {
    assert_eq!(Field::ConfirmPassword.to_string(), "confirmPassword");
}
