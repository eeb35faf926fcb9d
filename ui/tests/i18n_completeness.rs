use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "okrboard-ui.ftl";

/// Fallback locale; every other locale must define all of its keys.
const FALLBACK: &str = "en-US";

/// Locales shipped with the crate. Register new ones here.
const LOCALES: &[&str] = &["en-US", "ko-KR"];

/// Message IDs defined in a Fluent file. Comments, terms (`-` prefix),
/// attributes and continuation lines are skipped.
fn parse_ftl_keys(content: &str) -> Vec<String> {
    let mut keys = Vec::new();
    for line in content.lines() {
        if line.starts_with(char::is_whitespace) {
            continue;
        }
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let id = line[..eq_pos].trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.push(id.to_string());
            }
        }
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn read_locale(locale: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("i18n")
        .join(locale)
        .join(FTL_FILENAME);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("reading {}: {err}", path.display()))
}

/// Every `t!("literal"` under `src/`. Only a direct literal first argument
/// on the same line is matched.
fn keys_used_in_source(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            for entry in fs::read_dir(&path).into_iter().flatten().flatten() {
                stack.push(entry.path());
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut rest = content.as_str();
        while let Some(pos) = rest.find("t!(\"") {
            rest = &rest[pos + 4..];
            let Some(end) = rest.find('"') else { break };
            let key = &rest[..end];
            if !key.is_empty() && key.chars().all(valid_key_char) {
                found.insert(key.to_string());
            }
            rest = &rest[end..];
        }
    }

    found
}

#[test]
fn no_locale_defines_a_key_twice() {
    for locale in LOCALES {
        let mut seen = HashSet::new();
        let dups: BTreeSet<_> = parse_ftl_keys(&read_locale(locale))
            .into_iter()
            .filter(|key| !seen.insert(key.clone()))
            .collect();
        assert!(dups.is_empty(), "duplicate keys in {locale}: {dups:?}");
    }
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback: BTreeSet<_> = parse_ftl_keys(&read_locale(FALLBACK)).into_iter().collect();
    assert!(!fallback.is_empty(), "fallback ({FALLBACK}) contains no keys");

    let mut failures = Vec::new();
    for locale in LOCALES.iter().filter(|l| **l != FALLBACK) {
        let keys: BTreeSet<_> = parse_ftl_keys(&read_locale(locale)).into_iter().collect();
        let missing: Vec<_> = fallback.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing:\n  {}", missing.join("\n  ")));
        }
    }

    assert!(
        failures.is_empty(),
        "translation completeness check failed:\n\n{}",
        failures.join("\n\n")
    );
}

#[test]
fn every_key_used_in_source_is_defined() {
    let fallback: BTreeSet<_> = parse_ftl_keys(&read_locale(FALLBACK)).into_iter().collect();
    let used = keys_used_in_source(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"));
    assert!(!used.is_empty(), "no t!(..) usages found; did the scan break?");

    let undefined: Vec<_> = used.difference(&fallback).cloned().collect();
    assert!(
        undefined.is_empty(),
        "keys used in source but missing from {FALLBACK}/{FTL_FILENAME}:\n  {}",
        undefined.join("\n  ")
    );
}
