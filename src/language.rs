/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use leptos::*;
use serde::{Deserialize, Serialize};

/// The two languages the site is published in.
///
/// Japanese is the primary language; Chinese is offered for the company's
/// Chinese-speaking customers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Ja,
    Zh,
}

impl Language {
    pub fn as_tag(self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::Zh => "zh",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ja" => Some(Language::Ja),
            "zh" => Some(Language::Zh),
            _ => None,
        }
    }

    /// Selects the copy for the active language from a (Japanese, Chinese)
    /// pair of static strings.
    pub fn pick<'a>(self, ja: &'a str, zh: &'a str) -> &'a str {
        match self {
            Language::Ja => ja,
            Language::Zh => zh,
        }
    }
}

/// A data field stored in both language variants and selected at render time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bilingual {
    pub ja: String,
    pub zh: String,
}

impl Bilingual {
    pub fn new(ja: impl Into<String>, zh: impl Into<String>) -> Self {
        Self {
            ja: ja.into(),
            zh: zh.into(),
        }
    }

    /// Returns the requested variant, falling back to the other language when
    /// the requested one is empty. A heading should never render blank.
    pub fn get(&self, language: Language) -> &str {
        let (requested, fallback) = match language {
            Language::Ja => (&self.ja, &self.zh),
            Language::Zh => (&self.zh, &self.ja),
        };
        if requested.is_empty() {
            fallback
        } else {
            requested
        }
    }
}

/// Reactive language handle, passed through context rather than read from a
/// global. Provided by `LanguageProvider` at the top of the page.
#[derive(Copy, Clone)]
pub struct LanguageContext(pub RwSignal<Language>);

impl LanguageContext {
    pub fn new(initial: Language) -> Self {
        Self(create_rw_signal(initial))
    }

    pub fn language(&self) -> Language {
        self.0.get()
    }

    pub fn set(&self, language: Language) {
        self.0.set(language);
    }

    /// The `t(japanese, chinese)` selector used for static copy.
    pub fn t(&self, ja: &'static str, zh: &'static str) -> &'static str {
        self.language().pick(ja, zh)
    }

    /// Selects the active variant of a bilingual data field.
    pub fn text(&self, field: &Bilingual) -> String {
        field.get(self.language()).to_string()
    }
}

pub fn use_language() -> LanguageContext {
    expect_context::<LanguageContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_selects_by_language() {
        assert_eq!(Language::Ja.pick("こんにちは", "你好"), "こんにちは");
        assert_eq!(Language::Zh.pick("こんにちは", "你好"), "你好");
    }

    #[test]
    fn tag_round_trip() {
        assert_eq!(Language::from_tag("ja"), Some(Language::Ja));
        assert_eq!(Language::from_tag("zh"), Some(Language::Zh));
        assert_eq!(Language::from_tag("en"), None);
        assert_eq!(Language::Ja.as_tag(), "ja");
        assert_eq!(Language::Zh.as_tag(), "zh");
    }

    #[test]
    fn bilingual_selects_requested_variant() {
        let field = Bilingual::new("定期点検", "定期检查");
        assert_eq!(field.get(Language::Ja), "定期点検");
        assert_eq!(field.get(Language::Zh), "定期检查");
    }

    #[test]
    fn bilingual_falls_back_when_variant_is_empty() {
        let missing_zh = Bilingual::new("定期点検", "");
        assert_eq!(missing_zh.get(Language::Zh), "定期点検");

        let missing_ja = Bilingual::new("", "定期检查");
        assert_eq!(missing_ja.get(Language::Ja), "定期检查");
    }
}
