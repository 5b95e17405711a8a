use super::*;
use crate::fixtures::developer;

fn filled() -> ProfileForm {
    ProfileForm {
        bio: "  Rust and web ".to_owned(),
        skills: "rust, Leptos, rust, ".to_owned(),
        experience_years: "6".to_owned(),
        hourly_rate: "85.5".to_owned(),
        portfolio_url: "https://me.dev".to_owned(),
        is_public: true,
    }
}

#[test]
fn valid_form_becomes_update() {
    assert_eq!(
        validate_profile(&filled()),
        Ok(ProfileUpdate {
            bio: Some("Rust and web".to_owned()),
            skills: vec!["rust".to_owned(), "Leptos".to_owned()],
            experience_years: Some(6),
            hourly_rate: Some(85.5),
            portfolio_url: Some("https://me.dev".to_owned()),
            is_public: true,
        })
    );
}

#[test]
fn empty_form_is_valid_with_nothing_set() {
    let update = validate_profile(&ProfileForm::default()).unwrap();
    assert_eq!(update.bio, None);
    assert!(update.skills.is_empty());
    assert_eq!(update.experience_years, None);
    assert_eq!(update.hourly_rate, None);
    assert!(update.is_public);
}

#[test]
fn rejects_bad_numbers() {
    let mut form = filled();
    form.experience_years = "six".to_owned();
    assert_eq!(validate_profile(&form), Err("Experience must be a whole number of years."));

    let mut form = filled();
    form.hourly_rate = "-5".to_owned();
    assert_eq!(validate_profile(&form), Err("Hourly rate must be a number."));
}

#[test]
fn rejects_non_http_portfolio() {
    let mut form = filled();
    form.portfolio_url = "ftp://me.dev".to_owned();
    assert!(validate_profile(&form).is_err());
}

#[test]
fn form_prefills_from_profile() {
    let mut profile = developer(3, "Ada", &["rust", "wasm"]);
    profile.experience_years = Some(4);
    let form = ProfileForm::from_profile(&profile);
    assert_eq!(form.skills, "rust, wasm");
    assert_eq!(form.experience_years, "4");
    assert_eq!(form.hourly_rate, "");
    assert_eq!(validate_profile(&form).map(|u| u.skills.len()), Ok(2));
}
