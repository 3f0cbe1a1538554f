//! Lint test: keep platform directories and stdout behind their owners.
//!
//! `dirs::*` ignores `RESI_TEST_HOME`, so only `src/infrastructure/fs/home.rs`
//! may call it. Stdout carries the `--json` document, so only the binary's
//! command handlers and `presentation/output.rs` may print to it.

use std::fs;
use std::path::Path;

struct Rule {
    pattern: &'static str,
    allowed: &'static [&'static str],
    hint: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        pattern: "dirs::",
        allowed: &["src/infrastructure/fs/home.rs"],
        hint: "use infrastructure::fs::default_data_dir() or user_config_path()",
    },
    Rule {
        pattern: "println!(",
        allowed: &["src/main.rs", "src/commands/", "src/presentation/output.rs"],
        hint: "return data and let the command handler print it",
    },
    Rule {
        pattern: "print!(",
        allowed: &["src/main.rs", "src/commands/", "src/presentation/output.rs"],
        hint: "return data and let the command handler print it",
    },
];

fn visit_dirs(dir: &Path, violations: &mut Vec<String>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_dir() {
                visit_dirs(&path, violations);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                check_file(&path, violations);
            }
        }
    }
}

fn check_file(path: &Path, violations: &mut Vec<String>) {
    let relative = path
        .strip_prefix(env!("CARGO_MANIFEST_DIR"))
        .unwrap_or(path);
    let relative_str = relative.to_string_lossy().replace('\\', "/");

    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return,
    };

    for rule in RULES {
        if rule.allowed.iter().any(|a| relative_str.starts_with(a)) {
            continue;
        }
        for (line_num, line) in content.lines().enumerate() {
            let code = line.trim_start();
            if code.starts_with("//") {
                continue;
            }
            // word boundary, so eprintln!/eprint! (stderr) pass
            let hit = code.match_indices(rule.pattern).any(|(at, _)| {
                !code[..at]
                    .chars()
                    .next_back()
                    .is_some_and(|c| c.is_alphanumeric() || c == '_')
            });
            if hit {
                violations.push(format!(
                    "{}:{}: `{}` - {}",
                    relative_str,
                    line_num + 1,
                    rule.pattern,
                    rule.hint
                ));
            }
        }
    }
}

#[test]
fn no_raw_output_or_dirs_in_library_code() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut violations = Vec::new();
    visit_dirs(&src_dir, &mut violations);

    if !violations.is_empty() {
        panic!(
            "\n\nFound {} violation(s):\n\n{}\n",
            violations.len(),
            violations.join("\n")
        );
    }
}
