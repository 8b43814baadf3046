// tests/no_panicking_calls.rs
// Fails if runtime code can panic through unwrap/expect/panic!.
// Table requests with bad indices must be ignored, not crash the editor.
// Test modules (everything after `#[cfg(test)]`, and `tests.rs` files) are skipped.

use std::fs;
use std::path::{Path, PathBuf};

const FORBIDDEN: &[&str] = &[".unwrap()", ".expect(", "panic!(", "unreachable!("];

fn collect_rs_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for e in entries.flatten() {
            let p = e.path();
            if p.is_dir() {
                collect_rs_files(&p, files);
            } else if p.extension().map(|s| s == "rs").unwrap_or(false) {
                files.push(p);
            }
        }
    }
}

fn is_test_file(path: &Path) -> bool {
    path.file_name().map(|n| n == "tests.rs").unwrap_or(false)
}

fn runtime_part(source: &str) -> &str {
    match source.find("#[cfg(test)]") {
        Some(idx) => &source[..idx],
        None => source,
    }
}

#[test]
fn runtime_code_has_no_panicking_calls() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut files = Vec::new();
    collect_rs_files(&root, &mut files);
    assert!(!files.is_empty(), "no sources found under {:?}", root);

    let mut offenders = Vec::new();
    for file in files.iter().filter(|f| !is_test_file(f)) {
        let Ok(source) = fs::read_to_string(file) else {
            continue;
        };
        for (line_no, line) in runtime_part(&source).lines().enumerate() {
            let code = line.split("//").next().unwrap_or("");
            if FORBIDDEN.iter().any(|pat| code.contains(pat)) {
                offenders.push(format!("{}:{}: {}", file.display(), line_no + 1, line.trim()));
            }
        }
    }

    assert!(
        offenders.is_empty(),
        "Panicking calls found in runtime code:\n{}",
        offenders.join("\n")
    );
}
