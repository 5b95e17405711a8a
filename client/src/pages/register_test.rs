use super::*;

fn filled() -> RegisterForm {
    RegisterForm {
        full_name: " Dana Dev ".to_owned(),
        email: " dana@example.com ".to_owned(),
        password: "correct horse".to_owned(),
        confirm: "correct horse".to_owned(),
        role: Role::Developer,
    }
}

#[test]
fn valid_form_builds_trimmed_request() {
    let request = validate_registration(&filled()).expect("valid form");
    assert_eq!(request.full_name, "Dana Dev");
    assert_eq!(request.email, "dana@example.com");
    assert_eq!(request.password, "correct horse");
    assert_eq!(request.role, Role::Developer);
}

#[test]
fn missing_fields_are_rejected() {
    let form = RegisterForm {
        full_name: "  ".to_owned(),
        ..filled()
    };
    assert_eq!(validate_registration(&form), Err("Fill in your name, email, and password."));
}

#[test]
fn short_password_is_rejected() {
    let form = RegisterForm {
        password: "1234567".to_owned(),
        confirm: "1234567".to_owned(),
        ..filled()
    };
    assert_eq!(validate_registration(&form), Err("Password must be at least 8 characters."));
}

#[test]
fn eight_character_password_is_enough() {
    let form = RegisterForm {
        password: "12345678".to_owned(),
        confirm: "12345678".to_owned(),
        ..filled()
    };
    assert!(validate_registration(&form).is_ok());
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let form = RegisterForm {
        confirm: "correct horse!".to_owned(),
        ..filled()
    };
    assert_eq!(validate_registration(&form), Err("Passwords do not match."));
}

#[test]
fn admin_role_cannot_self_register() {
    let form = RegisterForm {
        role: Role::Admin,
        ..filled()
    };
    assert!(validate_registration(&form).is_err());
}
