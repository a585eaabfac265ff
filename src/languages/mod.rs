// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lexical language-content detection for English and Indic languages.
//!
//! ## Catalog
//!
//! | Key       | Code | Native name |
//! |-----------|------|-------------|
//! | english   | en   | English     |
//! | hindi     | hi   | हिंदी        |
//! | bengali   | bn   | বাংলা        |
//! | tamil     | ta   | தமிழ்        |
//! | telugu    | te   | తెలుగు       |
//! | marathi   | mr   | मराठी        |
//! | gujarati  | gu   | ગુજરાતી      |
//! | kannada   | kn   | ಕನ್ನಡ        |
//! | malayalam | ml   | മലയാളം      |
//! | punjabi   | pa   | ਪੰਜਾਬੀ       |
//! | oriya     | or   | ଓଡ଼ିଆ         |
//! | assamese  | as   | অসমীয়া      |
//! | urdu      | ur   | اردو        |
//! | sanskrit  | sa   | संस्कृत       |
//! | kashmiri  | ks   | कॉशुर        |
//! | nepali    | ne   | नेपाली       |
//! | sinhala   | si   | සිංහල       |
//!
//! ## Heuristic
//!
//! A language is present when any of its indicators occurs as a substring of
//! the lowercased content. There is no tokenization: two-letter codes such as
//! `en`, `hi` or `or` appear inside ordinary English words, so most English
//! source files report several languages. This is a known false-positive
//! source and is kept as-is.

mod catalog;

pub use catalog::LanguageKey;

use std::collections::BTreeSet;

pub struct LanguageContentDetector;

impl LanguageContentDetector {
    /// Languages whose indicators appear anywhere in `content`.
    pub fn detect(content: &str) -> BTreeSet<LanguageKey> {
        let folded = content.to_lowercase();

        LanguageKey::all()
            .iter()
            .copied()
            .filter(|key| {
                key.indicators()
                    .iter()
                    .any(|indicator| folded.contains(indicator))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_native_script_greetings() {
        let found = LanguageContentDetector::detect("st.write('வணக்கம்')");
        assert!(found.contains(&LanguageKey::Tamil));
    }

    #[test]
    fn detection_is_case_folded() {
        let found = LanguageContentDetector::detect("WELCOME");
        assert!(found.contains(&LanguageKey::English));
    }

    #[test]
    fn shared_devanagari_words_hit_several_languages() {
        // धन्यवाद is listed for Hindi, Marathi, Sanskrit and Nepali
        let found = LanguageContentDetector::detect("धन्यवाद");
        for key in [
            LanguageKey::Hindi,
            LanguageKey::Marathi,
            LanguageKey::Sanskrit,
            LanguageKey::Nepali,
        ] {
            assert!(found.contains(&key), "{key} should be reported");
        }
    }

    #[test]
    fn short_codes_produce_substring_hits() {
        // "then" contains the code "en"
        let found = LanguageContentDetector::detect("then");
        assert!(found.contains(&LanguageKey::English));
    }

    #[test]
    fn empty_content_detects_nothing() {
        assert!(LanguageContentDetector::detect("").is_empty());
    }

    #[test]
    fn digits_only_detect_nothing() {
        assert!(LanguageContentDetector::detect("12345 67 = 89").is_empty());
    }
}
