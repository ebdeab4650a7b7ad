//! Hygiene: scans `src/` for constructs that could break the host page.
//!
//! Page behaviors must never panic, so panicking constructs have a zero
//! budget. DOM mutations are fire-and-forget and discard their `Result`s,
//! so `let _ =` and `.ok()` carry fixed budgets that must not grow.

use std::fs;
use std::path::Path;

const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("#[allow(dead_code)]", 0),
    ("let _ =", 9),
    (".ok()", 13),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, skipping `*_test.rs` siblings.
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

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, max) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *max {
            let detail = found.iter().map(|(p, c)| format!("    {p}: {c}")).collect::<Vec<_>>().join("\n");
            failures.push(format!("{pattern} budget exceeded: found {count}, max {max}\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
