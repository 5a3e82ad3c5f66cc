use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Every non-fallback locale must define at least the keys of `en-US`.
///
/// Keys are extracted with a line heuristic: comments, blank lines and
/// attribute/continuation lines are skipped, `key = ...` lines count.
///
/// New locale: create `ui/i18n/<locale>/fullstack-ui.ftl`, copy the en-US keys,
/// register the file below.
#[test]
fn all_locales_have_all_fallback_keys() {
    const EN_US: &str = include_str!("../i18n/en-US/fullstack-ui.ftl");
    const ES_ES: &str = include_str!("../i18n/es-ES/fullstack-ui.ftl");

    let fallback_keys = extract_keys(EN_US);
    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");

    let locales: &[(&str, &str)] = &[("es-ES", ES_ES)];

    let mut failures = Vec::new();
    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<&String> = fallback_keys
            .iter()
            .filter(|k| !keys.contains(*k))
            .collect();

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

/// The brand label is a constant and must never become a translatable message.
#[test]
fn brand_label_is_not_localized() {
    const EN_US: &str = include_str!("../i18n/en-US/fullstack-ui.ftl");
    assert!(!EN_US.contains("FullStack Application"));
}

/// Every `t!("...")` literal under `src/` must exist in the fallback bundle.
#[test]
fn referenced_keys_exist_in_fallback() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback = fs::read_to_string(crate_root.join("i18n/en-US/fullstack-ui.ftl"))
        .expect("fallback FTL readable");
    let fallback_keys = extract_keys(&fallback);

    let referenced = referenced_keys(&crate_root.join("src"));
    assert!(referenced.contains("nav-add-user"), "{referenced:?}");

    let mut missing: Vec<_> = referenced
        .iter()
        .filter(|k| !fallback_keys.contains(*k))
        .collect();
    missing.sort();
    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in fallback: {missing:?}"
    );
}

fn is_key_line(key: &str) -> bool {
    !key.is_empty()
        && !key.contains(' ')
        && !key.contains('\t')
        && !key.starts_with('[')
        && !key.starts_with('@')
}

fn extract_keys(src: &str) -> HashSet<String> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('.'))
        .filter_map(|line| line.split_once('=').map(|(left, _)| left.trim()))
        .filter(|key| is_key_line(key))
        .map(str::to_string)
        .collect()
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for raw in src.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some((left, _)) = line.split_once('=') {
            let key = left.trim();
            if is_key_line(key) && !seen.insert(key.to_string()) {
                dups.insert(format!("{key}  (line: \"{raw}\")"));
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}

/// Collect the literal first argument of every `t!(` call in `.rs` files.
fn referenced_keys(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
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
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if key
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
                {
                    found.insert(key.to_string());
                }
                rest = &rest[end..];
            }
        }
    }

    found
}

/// `fl!` resolves bundles at compile time from `i18n.toml`'s domain; it must
/// name the same file the runtime loader and the locale folders use.
#[test]
fn configured_domain_names_the_bundle_files() {
    const CONFIG: &str = include_str!("../i18n.toml");
    let domain = CONFIG
        .lines()
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| key.trim() == "domain")
        .map(|(_, value)| value.trim().trim_matches('"'))
        .expect("i18n.toml pins a fluent domain");
    assert_eq!(domain, "fullstack-ui");

    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    for locale in ["en-US", "es-ES"] {
        let bundle = crate_root.join("i18n").join(locale).join(format!("{domain}.ftl"));
        assert!(bundle.exists(), "missing bundle {bundle:?}");
    }
}
