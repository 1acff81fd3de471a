use std::path::{Path, PathBuf};

use proptest::prelude::*;
use tsalias_core::rewriter::relpath::normalize;
use tsalias_core::{AliasConfigLoader, AliasMapping, AliasRewriter, EventDispatcher};

const ROOT: &str = "/proj/build";

fn rewriter() -> AliasRewriter {
    let mapping = AliasMapping::from_entries(vec![
        ("@lib/".to_string(), "./lib/".to_string()),
        ("@lib/deep/".to_string(), "./vendor/deep/".to_string()),
        ("@app/".to_string(), "./".to_string()),
    ]);
    AliasRewriter::new(mapping, ROOT).unwrap()
}

fn segments(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 0..=max)
}

fn file_in(dirs: &[String]) -> PathBuf {
    let mut path = PathBuf::from(ROOT);
    for dir in dirs {
        path.push(dir);
    }
    path.join("index.js")
}

/// Pull the specifier back out of `'<specifier>'` or `"<specifier>"`.
fn unquote(text: &str) -> (char, &str) {
    let quote = text.chars().next().unwrap();
    (quote, &text[1..text.len() - 1])
}

proptest! {
    #[test]
    fn rewritten_specifier_resolves_to_target(
        dirs in segments(4),
        rest in prop::collection::vec("[a-z]{1,6}", 1..4),
        double in any::<bool>(),
    ) {
        let rw = rewriter();
        let file = file_in(&dirs);
        let rest = rest.join("/");
        let quote = if double { '"' } else { '\'' };
        let input = format!("{quote}@lib/{rest}{quote}");

        let out = rw.rewrite_content(&file, &input);
        prop_assert!(out.is_changed());

        let (out_quote, specifier) = unquote(&out.content);
        prop_assert_eq!(out_quote, quote);
        prop_assert!(specifier.starts_with("./") || specifier.starts_with("../"), "{}", specifier);

        let expected_target = if rest.starts_with("deep/") {
            normalize(&Path::new(ROOT).join("vendor").join(&rest))
        } else {
            normalize(&Path::new(ROOT).join("lib").join(&rest))
        };
        let resolved = normalize(&file.parent().unwrap().join(specifier));
        prop_assert_eq!(resolved, expected_target);
    }

    #[test]
    fn rewriting_is_idempotent(
        dirs in segments(3),
        rest in "[a-z]{1,6}(/[a-z]{1,6}){0,2}",
        prefix in "[a-z ;=]{0,20}",
    ) {
        let rw = rewriter();
        let file = file_in(&dirs);
        let input = format!("{prefix}require('@app/{rest}'); import x from \"@lib/{rest}\";");

        let once = rw.rewrite_content(&file, &input).content.into_owned();
        let twice = rw.rewrite_content(&file, &once);
        prop_assert!(!twice.is_changed());
        prop_assert_eq!(&*twice.content, once.as_str());
    }

    #[test]
    fn text_without_aliases_is_untouched(dirs in segments(3), text in "[^@~]{0,200}") {
        let rw = rewriter();
        let out = rw.rewrite_content(&file_in(&dirs), &text);
        prop_assert!(!out.is_changed());
        prop_assert_eq!(out.replacements, 0);
        prop_assert_eq!(&*out.content, text.as_str());
    }

    #[test]
    fn loaded_aliases_are_directory_shaped(
        names in prop::collection::btree_set("[a-z]{1,8}", 1..6),
        root_dir in prop::option::of(prop::sample::select(vec!["src", "./src", "src/", "."])),
        prefix_targets in any::<bool>(),
    ) {
        let entries = names
            .iter()
            .map(|name| {
                let target = if prefix_targets {
                    format!("./src/{name}/*")
                } else {
                    format!("{name}/*")
                };
                format!("\"@{name}/*\": [\"{target}\"]")
            })
            .collect::<Vec<_>>()
            .join(",\n");
        let root = root_dir
            .map(|r| format!("\"rootDir\": \"{r}\",\n"))
            .unwrap_or_default();
        let content = format!("{{\n  \"compilerOptions\": {{\n{root}\"paths\": {{\n{entries}\n}}\n}}\n}}");

        let mapping = AliasConfigLoader::new("tsconfig.extended.json")
            .parse(&content, Path::new("tsconfig.extended.json"), &EventDispatcher::new())
            .unwrap();

        prop_assert_eq!(mapping.len(), names.len());
        let mut previous_len = usize::MAX;
        for (alias, target) in mapping.iter() {
            prop_assert!(alias.ends_with('/'), "{}", alias);
            prop_assert!(target.starts_with("./"), "{}", target);
            prop_assert!(target.ends_with('/'), "{}", target);
            prop_assert!(alias.len() <= previous_len);
            previous_len = alias.len();
        }
    }
}
