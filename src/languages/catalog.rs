// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fixed language catalog with lexical indicators.
//!
//! Each language carries an ordered list of indicators: its ISO 639-1 code,
//! its native name, and common greeting or courtesy words in native script.
//! The list is embedded at compile time; nothing is loaded from disk.
//!
//! ## Adding a language
//!
//! 1. Add a variant to [`LanguageKey`]
//! 2. Add its arms to `LanguageKey::name()` and `LanguageKey::code()`
//! 3. Add a `const XX: &[&str]` indicator table below
//! 4. Add `LanguageKey::Xx => XX` to the match in `indicators_for()`
//! 5. Append the variant to `LanguageKey::all()`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages the detector can report.
///
/// Serialized as the lowercase English name (`"hindi"`, `"tamil"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageKey {
    English,
    Hindi,
    Bengali,
    Tamil,
    Telugu,
    Marathi,
    Gujarati,
    Kannada,
    Malayalam,
    Punjabi,
    Oriya,
    Assamese,
    Urdu,
    Sanskrit,
    Kashmiri,
    Nepali,
    Sinhala,
}

impl LanguageKey {
    /// Every catalog entry, in display order.
    pub fn all() -> &'static [LanguageKey] {
        &[
            LanguageKey::English,
            LanguageKey::Hindi,
            LanguageKey::Bengali,
            LanguageKey::Tamil,
            LanguageKey::Telugu,
            LanguageKey::Marathi,
            LanguageKey::Gujarati,
            LanguageKey::Kannada,
            LanguageKey::Malayalam,
            LanguageKey::Punjabi,
            LanguageKey::Oriya,
            LanguageKey::Assamese,
            LanguageKey::Urdu,
            LanguageKey::Sanskrit,
            LanguageKey::Kashmiri,
            LanguageKey::Nepali,
            LanguageKey::Sinhala,
        ]
    }

    /// Key used in serialized reports.
    pub fn name(&self) -> &'static str {
        match self {
            LanguageKey::English => "english",
            LanguageKey::Hindi => "hindi",
            LanguageKey::Bengali => "bengali",
            LanguageKey::Tamil => "tamil",
            LanguageKey::Telugu => "telugu",
            LanguageKey::Marathi => "marathi",
            LanguageKey::Gujarati => "gujarati",
            LanguageKey::Kannada => "kannada",
            LanguageKey::Malayalam => "malayalam",
            LanguageKey::Punjabi => "punjabi",
            LanguageKey::Oriya => "oriya",
            LanguageKey::Assamese => "assamese",
            LanguageKey::Urdu => "urdu",
            LanguageKey::Sanskrit => "sanskrit",
            LanguageKey::Kashmiri => "kashmiri",
            LanguageKey::Nepali => "nepali",
            LanguageKey::Sinhala => "sinhala",
        }
    }

    /// ISO 639-1 code, also the first indicator.
    pub fn code(&self) -> &'static str {
        match self {
            LanguageKey::English => "en",
            LanguageKey::Hindi => "hi",
            LanguageKey::Bengali => "bn",
            LanguageKey::Tamil => "ta",
            LanguageKey::Telugu => "te",
            LanguageKey::Marathi => "mr",
            LanguageKey::Gujarati => "gu",
            LanguageKey::Kannada => "kn",
            LanguageKey::Malayalam => "ml",
            LanguageKey::Punjabi => "pa",
            LanguageKey::Oriya => "or",
            LanguageKey::Assamese => "as",
            LanguageKey::Urdu => "ur",
            LanguageKey::Sanskrit => "sa",
            LanguageKey::Kashmiri => "ks",
            LanguageKey::Nepali => "ne",
            LanguageKey::Sinhala => "si",
        }
    }

    /// Native name, the second indicator.
    pub fn native_name(&self) -> &'static str {
        indicators_for(*self)[1]
    }

    /// Ordered lexical indicators, already lowercase.
    pub fn indicators(&self) -> &'static [&'static str] {
        indicators_for(*self)
    }
}

impl fmt::Display for LanguageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn indicators_for(key: LanguageKey) -> &'static [&'static str] {
    match key {
        LanguageKey::English => EN,
        LanguageKey::Hindi => HI,
        LanguageKey::Bengali => BN,
        LanguageKey::Tamil => TA,
        LanguageKey::Telugu => TE,
        LanguageKey::Marathi => MR,
        LanguageKey::Gujarati => GU,
        LanguageKey::Kannada => KN,
        LanguageKey::Malayalam => ML,
        LanguageKey::Punjabi => PA,
        LanguageKey::Oriya => OR,
        LanguageKey::Assamese => AS,
        LanguageKey::Urdu => UR,
        LanguageKey::Sanskrit => SA,
        LanguageKey::Kashmiri => KS,
        LanguageKey::Nepali => NE,
        LanguageKey::Sinhala => SI,
    }
}

// ---------------------------------------------------------------------------
// Indicator tables
// ---------------------------------------------------------------------------

const EN: &[&str] = &["en", "english", "hello", "thank you", "please", "welcome", "goodbye"];

const HI: &[&str] = &["hi", "हिंदी", "नमस्ते", "धन्यवाद", "कृपया", "स्वागत", "अलविदा"];

const BN: &[&str] = &["bn", "বাংলা", "নমস্কার", "ধন্যবাদ", "দয়া করে", "স্বাগতম"];

const TA: &[&str] = &["ta", "தமிழ்", "வணக்கம்", "நன்றி", "தயவுசெய்து", "வரவேற்கிறோம்"];

const TE: &[&str] = &["te", "తెలుగు", "నమస్కారం", "ధన్యవాదాలు", "దయచేసి", "స్వాగతం"];

const MR: &[&str] = &["mr", "मराठी", "नमस्कार", "धन्यवाद", "कृपया", "स्वागत"];

const GU: &[&str] = &["gu", "ગુજરાતી", "નમસ્તે", "આભાર", "કૃપા કરીને", "સ્વાગત"];

const KN: &[&str] = &["kn", "ಕನ್ನಡ", "ನಮಸ್ತೆ", "ಧನ್ಯವಾದಗಳು", "ದಯವಿಟ್ಟು", "ಸ್ವಾಗತ"];

const ML: &[&str] = &["ml", "മലയാളം", "നമസ്തേ", "നന്ദി", "ദയവായി", "സ്വാഗതം"];

const PA: &[&str] = &["pa", "ਪੰਜਾਬੀ", "ਸਤ ਸ੍ਰੀ ਅਕਾਲ", "ਧੰਨਵਾਦ", "ਕਿਰਪਾ ਕਰਕੇ"];

const OR: &[&str] = &["or", "ଓଡ଼ିଆ", "ନମସ୍କାର", "ଧନ୍ୟବାଦ", "ଦୟାକରି", "ସ୍ୱାଗତ"];

const AS: &[&str] = &["as", "অসমীয়া", "নমস্কাৰ", "ধন্যবাদ", "অনুগ্ৰহ কৰি"];

const UR: &[&str] = &["ur", "اردو", "آداب", "شکریہ", "براہ کرم", "خوش آمدید"];

const SA: &[&str] = &["sa", "संस्कृत", "नमस्ते", "धन्यवाद", "कृपया"];

const KS: &[&str] = &["ks", "कॉशुर", "नमस्कार", "शुक्रिया", "मेहरबानी"];

const NE: &[&str] = &["ne", "नेपाली", "नमस्ते", "धन्यवाद", "कृपया", "स्वागत"];

const SI: &[&str] = &["si", "සිංහල", "ආයුබෝවන්", "ස්තූතියි", "කරුණාකර"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_code_and_native_name_first() {
        for key in LanguageKey::all() {
            let indicators = key.indicators();
            assert!(indicators.len() >= 3, "{key} needs words beyond code and name");
            assert_eq!(indicators[0], key.code());
        }
    }

    #[test]
    fn indicators_are_already_lowercase() {
        for key in LanguageKey::all() {
            for indicator in key.indicators() {
                assert_eq!(*indicator, indicator.to_lowercase(), "{key}: {indicator}");
            }
        }
    }

    #[test]
    fn serde_name_matches_display() {
        for key in LanguageKey::all() {
            let json = serde_json::to_string(key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.name()));
        }
    }

    #[test]
    fn native_names() {
        assert_eq!(LanguageKey::Tamil.native_name(), "தமிழ்");
        assert_eq!(LanguageKey::English.native_name(), "english");
    }
}
