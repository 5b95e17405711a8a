use super::*;

#[test]
fn validate_project_requires_name() {
    assert_eq!(validate_project("   ", "whatever"), Err("Project name is required."));
}

#[test]
fn validate_project_trims_and_drops_blank_description() {
    assert_eq!(
        validate_project(" Website ", "  "),
        Ok(ProjectDraft {
            name: "Website".to_owned(),
            description: None,
        })
    );
    assert_eq!(
        validate_project("App", " mobile ").map(|d| d.description),
        Ok(Some("mobile".to_owned()))
    );
}
