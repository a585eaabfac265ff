// SPDX-License-Identifier: PMPL-1.0-or-later

//! i18n usage pattern detection
//!
//! The taxonomy is closed: every [`PatternCategory`] lists its subtypes and
//! the regular expressions attached to each one. Adding a category forces
//! every `match` below to be revisited.
//!
//! All expressions run case-insensitive and multi-line. Matching is lexical,
//! so short expressions such as `tr\(` also fire inside `str(`; that is an
//! accepted limitation of the heuristic.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Family of i18n tooling a match belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    Gettext,
    StreamlitI18n,
    Babel,
    CustomTranslation,
    LanguageDetection,
}

/// Role of a match inside its category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternSubtype {
    Imports,
    Functions,
    Setup,
    Dictionaries,
    Patterns,
}

/// Matches for one file: category -> subtype -> matched substrings.
///
/// Empty subtypes and categories are never inserted.
pub type FilePatterns = BTreeMap<PatternCategory, BTreeMap<PatternSubtype, Vec<String>>>;

impl PatternCategory {
    pub fn all() -> [PatternCategory; 5] {
        [
            PatternCategory::Gettext,
            PatternCategory::StreamlitI18n,
            PatternCategory::Babel,
            PatternCategory::CustomTranslation,
            PatternCategory::LanguageDetection,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PatternCategory::Gettext => "gettext",
            PatternCategory::StreamlitI18n => "streamlit_i18n",
            PatternCategory::Babel => "babel",
            PatternCategory::CustomTranslation => "custom_translation",
            PatternCategory::LanguageDetection => "language_detection",
        }
    }

    /// Subtypes in declaration order, each with its raw expressions
    pub fn rules(self) -> &'static [(PatternSubtype, &'static [&'static str])] {
        match self {
            PatternCategory::Gettext => &[
                (
                    PatternSubtype::Imports,
                    &[r"import\s+gettext", r"from\s+gettext\s+import"],
                ),
                (
                    PatternSubtype::Functions,
                    &[r"_\(", r"gettext\(", r"ngettext\("],
                ),
                (
                    PatternSubtype::Setup,
                    &[r"gettext\..\(.\)", r"\.bindtextdomain\(", r"\.textdomain\("],
                ),
            ],
            PatternCategory::StreamlitI18n => &[
                (
                    PatternSubtype::Imports,
                    &[r"import\s+streamlit_i18n", r"from\s+streamlit_i18n"],
                ),
                (
                    PatternSubtype::Functions,
                    &[r"i18n\(", r"\.translate\(", r"\.t\("],
                ),
            ],
            PatternCategory::Babel => &[
                (PatternSubtype::Imports, &[r"import\s+babel", r"from\s+babel"]),
                (
                    PatternSubtype::Functions,
                    &[r"Locale\(", r"format_currency\(", r"format_date\("],
                ),
            ],
            PatternCategory::CustomTranslation => &[
                (
                    PatternSubtype::Dictionaries,
                    &[
                        r"translations\s*=\s*\{",
                        r"languages\s*=\s*\{",
                        r"TRANSLATIONS\s*=",
                    ],
                ),
                (
                    PatternSubtype::Functions,
                    &[r"translate\(", r"get_text\(", r"tr\("],
                ),
            ],
            PatternCategory::LanguageDetection => &[(
                PatternSubtype::Patterns,
                &[r"st\.selectbox.*lang", r"language.*select", r"locale", r"LANG"],
            )],
        }
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct CompiledSubtype {
    subtype: PatternSubtype,
    matchers: Vec<Regex>,
}

struct CompiledCategory {
    category: PatternCategory,
    subtypes: Vec<CompiledSubtype>,
}

static TAXONOMY: LazyLock<Vec<CompiledCategory>> = LazyLock::new(|| {
    PatternCategory::all()
        .into_iter()
        .map(|category| CompiledCategory {
            category,
            subtypes: category
                .rules()
                .iter()
                .map(|(subtype, expressions)| CompiledSubtype {
                    subtype: *subtype,
                    matchers: expressions.iter().map(|expr| compile(expr)).collect(),
                })
                .collect(),
        })
        .collect()
});

fn compile(expression: &str) -> Regex {
    RegexBuilder::new(expression)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .unwrap_or_else(|e| panic!("built-in pattern {expression:?} is invalid: {e}"))
}

pub struct PatternDetector;

impl PatternDetector {
    /// Run the whole taxonomy over one file's content.
    ///
    /// Within a subtype, matches are concatenated in expression order.
    pub fn detect(content: &str) -> FilePatterns {
        let mut results = FilePatterns::new();

        for compiled in TAXONOMY.iter() {
            let mut category_results = BTreeMap::new();

            for subtype in &compiled.subtypes {
                let matches: Vec<String> = subtype
                    .matchers
                    .iter()
                    .flat_map(|re| re.find_iter(content).map(|m| m.as_str().to_string()))
                    .collect();

                if !matches.is_empty() {
                    category_results.insert(subtype.subtype, matches);
                }
            }

            if !category_results.is_empty() {
                results.insert(compiled.category, category_results);
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_expression_compiles() {
        for category in PatternCategory::all() {
            for (_, expressions) in category.rules() {
                for expr in *expressions {
                    assert!(
                        RegexBuilder::new(expr).build().is_ok(),
                        "{expr} should compile"
                    );
                }
            }
        }
    }

    #[test]
    fn gettext_import_and_call() {
        let content = "import gettext\n_ = gettext.gettext\nprint(_(\"Hello\"))\n";
        let found = PatternDetector::detect(content);

        let gettext = found.get(&PatternCategory::Gettext).expect("gettext detected");
        assert_eq!(gettext[&PatternSubtype::Imports], vec!["import gettext"]);
        assert!(gettext[&PatternSubtype::Functions].contains(&"_(".to_string()));
    }

    #[test]
    fn matches_are_case_insensitive() {
        let found = PatternDetector::detect("FROM Babel IMPORT numbers");
        assert_eq!(
            found[&PatternCategory::Babel][&PatternSubtype::Imports],
            vec!["FROM Babel"]
        );
    }

    #[test]
    fn empty_categories_and_subtypes_are_omitted() {
        let found = PatternDetector::detect("from babel import Locale");
        let babel = &found[&PatternCategory::Babel];

        // "Locale(" is absent; only the import subtype exists
        assert!(babel.contains_key(&PatternSubtype::Imports));
        assert!(!babel.contains_key(&PatternSubtype::Functions));
        assert!(!found.contains_key(&PatternCategory::Gettext));
        assert!(!found.contains_key(&PatternCategory::StreamlitI18n));
    }

    #[test]
    fn matches_follow_expression_order() {
        let content = "x = translate(a)\ny = tr(b)\nz = get_text(c)\n";
        let found = PatternDetector::detect(content);
        let functions = &found[&PatternCategory::CustomTranslation][&PatternSubtype::Functions];

        assert_eq!(functions, &vec!["translate(", "get_text(", "tr("]);
    }

    #[test]
    fn plain_text_has_no_matches() {
        assert!(PatternDetector::detect("print(1 + 2)\n").is_empty());
    }

    #[test]
    fn serialized_keys_use_snake_case() {
        let found = PatternDetector::detect("import streamlit_i18n");
        let json = serde_json::to_string(&found).unwrap();
        assert!(json.contains("\"streamlit_i18n\""));
        assert!(json.contains("\"imports\""));
    }
}
