//! Source hygiene budgets.
//!
//! Page code must never take the page down: a panic inside a wasm event
//! callback stops every behaviour at once. These tests scan the non-test
//! sources for panicking calls and silently discarded results. Budgets stay
//! at zero; the fix for a hit is to propagate or log the error.

use std::fs;
use std::path::{Path, PathBuf};

struct SourceFile {
    path: PathBuf,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

/// Assert that `pattern` appears on at most `budget` lines across the sources.
fn check(pattern: &str, budget: usize) {
    let files = source_files();
    let hits: Vec<(String, usize)> = files
        .iter()
        .map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (file.path.display().to_string(), count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();
    let found: usize = hits.iter().map(|(_, count)| count).sum();
    let report = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(found <= budget, "`{pattern}` budget exceeded: found {found}, max {budget}.\n{report}");
}

// Panics.

#[test]
fn no_unwrap() {
    check(".unwrap()", 0);
}

#[test]
fn no_expect() {
    check(".expect(", 0);
}

#[test]
fn no_panic() {
    check("panic!(", 0);
}

#[test]
fn no_unreachable() {
    check("unreachable!(", 0);
}

#[test]
fn no_todo() {
    check("todo!(", 0);
}

#[test]
fn no_unimplemented() {
    check("unimplemented!(", 0);
}

// Silent loss.

#[test]
fn no_silent_discard() {
    check("let _ =", 0);
}

#[test]
fn no_dot_ok() {
    check(".ok()", 0);
}

// Style.

#[test]
fn no_allow_dead_code() {
    check("#[allow(dead_code)]", 0);
}

#[test]
fn no_map_or_none() {
    // `into_iter().find_map(..)` or `and_then` say the same thing directly.
    check(".map_or(None", 0);
}

#[test]
fn no_match_to_option() {
    // Result to Option without `.ok()`: `into_iter().next()`.
    check("Err(_) => None", 0);
}

#[test]
fn no_println() {
    // Output goes through `log`; stdout is invisible in the browser.
    check("println!(", 0);
}

#[test]
fn scan_finds_sources() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "hygiene scan found no sources");
    assert!(files.iter().any(|f| f.path.ends_with("browser/page.rs")));
    assert!(!files.iter().any(|f| f.path.to_string_lossy().ends_with("_test.rs")));
}
