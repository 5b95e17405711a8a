//! Hygiene: the sync core must not crash or silently drop errors.
//!
//! Scans `inbox/src/` (excluding `*_test.rs`) for antipatterns. Budgets are
//! zero; the sync logic returns decisions and never panics on server data.

use std::fs;
use std::path::Path;

const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "unwrap"),
    (".expect(", "expect"),
    ("panic!(", "panic"),
    ("unreachable!(", "unreachable"),
    ("todo!(", "todo"),
    ("unimplemented!(", "unimplemented"),
    ("let _ =", "silent discard"),
    (".ok()", "error-to-option conversion"),
    ("#[allow(dead_code)]", "dead code allowance"),
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

#[test]
fn sources_are_scanned() {
    assert!(!source_files().is_empty(), "no sources found under src/");
}

#[test]
fn banned_patterns_are_absent() {
    let files = source_files();
    let mut violations = Vec::new();
    for (pattern, label) in BANNED {
        for file in &files {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            if count > 0 {
                violations.push(format!("  {label} ({pattern}) in {}: {count}", file.path));
            }
        }
    }
    assert!(violations.is_empty(), "hygiene violations:\n{}", violations.join("\n"));
}
