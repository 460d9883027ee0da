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

use crate::language::use_language;
use leptos::*;
use serde::{Deserialize, Serialize};

/// Caller-supplied color overrides for a content section. Absent fields mean
/// "use the section's default classes"; set fields are applied as literal
/// inline styles and the matching default class is suppressed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionStyleConfig {
    pub background_color: Option<String>,
    pub text_color: Option<String>,
}

impl SectionStyleConfig {
    pub fn background_style(&self) -> Option<String> {
        self.background_color
            .as_ref()
            .map(|color| format!("background-color: {color}"))
    }

    pub fn text_style(&self) -> Option<String> {
        self.text_color.as_ref().map(|color| format!("color: {color}"))
    }

    pub fn class_unless_background<'a>(&self, default: &'a str) -> &'a str {
        if self.background_color.is_some() {
            ""
        } else {
            default
        }
    }

    pub fn class_unless_text<'a>(&self, default: &'a str) -> &'a str {
        if self.text_color.is_some() {
            ""
        } else {
            default
        }
    }
}

/// The shared section shell: anchor id, vertical padding, centered container.
/// The loading placeholder renders inside the same shell so the layout does
/// not shift when content arrives.
#[component]
pub fn SectionShell(
    #[prop(into)] id: String,
    #[prop(optional)] config: SectionStyleConfig,
    #[prop(into)] default_background: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=id
            class=format!("py-20 {}", config.class_unless_background(&default_background))
            style=config.background_style()
        >
            <div class="container mx-auto px-4" style=config.text_style()>
                {children()}
            </div>
        </section>
    }
}

/// Centered, localized placeholder shown while a section's data source is
/// still loading.
#[component]
pub fn SectionLoading(#[prop(optional)] config: SectionStyleConfig) -> impl IntoView {
    let lang = use_language();

    view! {
        <div class="text-center">
            <p class=config.class_unless_text("text-gray-500").to_string()>
                {move || lang.t("読み込み中...", "加载中...")}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_keeps_defaults() {
        let config = SectionStyleConfig::default();
        assert_eq!(config.background_style(), None);
        assert_eq!(config.text_style(), None);
        assert_eq!(config.class_unless_background("bg-white"), "bg-white");
        assert_eq!(config.class_unless_text("text-gray-900"), "text-gray-900");
    }

    #[test]
    fn background_override_is_literal_and_suppresses_default_class() {
        let config = SectionStyleConfig {
            background_color: Some("#fff".to_string()),
            text_color: None,
        };
        assert_eq!(
            config.background_style().as_deref(),
            Some("background-color: #fff")
        );
        assert_eq!(config.class_unless_background("bg-white"), "");
        // the text side is untouched
        assert_eq!(config.text_style(), None);
        assert_eq!(config.class_unless_text("text-gray-900"), "text-gray-900");
    }

    #[test]
    fn text_override_is_literal_and_suppresses_default_class() {
        let config = SectionStyleConfig {
            background_color: None,
            text_color: Some("#000".to_string()),
        };
        assert_eq!(config.text_style().as_deref(), Some("color: #000"));
        assert_eq!(config.class_unless_text("text-gray-900"), "");
        // the background side is untouched
        assert_eq!(config.background_style(), None);
        assert_eq!(config.class_unless_background("bg-white"), "bg-white");
    }
}
