use super::*;
use crate::fixtures::developer;

fn directory() -> Vec<DeveloperProfile> {
    let mut hidden = developer(3, "Hidden", &["rust"]);
    hidden.is_public = false;
    vec![
        developer(1, "Ada", &["Rust", "WASM"]),
        developer(2, "Grace", &["python"]),
        hidden,
    ]
}

#[test]
fn blank_filter_keeps_public_profiles() {
    let shown = filter_developers(&directory(), "  ");
    assert_eq!(shown.iter().map(|p| p.user_id).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn skill_filter_is_case_insensitive_and_skips_private() {
    let shown = filter_developers(&directory(), "rust");
    assert_eq!(shown.iter().map(|p| p.user_id).collect::<Vec<_>>(), vec![1]);
    assert!(filter_developers(&directory(), "cobol").is_empty());
}

#[test]
fn known_skills_are_deduplicated_and_sorted() {
    assert_eq!(known_skills(&directory()), vec!["python", "Rust", "WASM"]);
}
