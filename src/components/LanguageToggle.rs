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

use crate::language::{Language, LanguageContext};
use leptos::*;

#[server(SetLanguage, "/api")]
pub async fn set_language(language: String) -> Result<String, ServerFnError> {
    use axum::http::{header::SET_COOKIE, HeaderMap, HeaderValue};
    use leptos_axum::{ResponseOptions, ResponseParts};

    let response = use_context::<ResponseOptions>()
        .ok_or_else(|| ServerFnError::ServerError("missing response options".to_string()))?;
    let mut response_parts = ResponseParts::default();
    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        HeaderValue::from_str(&format!("lang={language}; Path=/; Max-Age=31536000"))
            .map_err(|e| ServerFnError::ServerError(e.to_string()))?,
    );
    response_parts.headers = headers;

    response.overwrite(response_parts);
    Ok(language)
}

/// Picks the `lang` cookie out of a `document.cookie`-style string.
fn cookie_language(cookie: &str) -> Option<Language> {
    cookie.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == "lang" {
            Language::from_tag(value)
        } else {
            None
        }
    })
}

#[cfg(not(feature = "ssr"))]
fn initial_language() -> Option<Language> {
    use wasm_bindgen::JsCast;

    let doc = document().unchecked_into::<web_sys::HtmlDocument>();
    let cookie = doc.cookie().unwrap_or_default();
    if let Some(language) = cookie_language(&cookie) {
        return Some(language);
    }
    // first visit: honor a Chinese browser locale, otherwise stay Japanese
    window()
        .navigator()
        .language()
        .and_then(|tag| if tag.starts_with("zh") { Some(Language::Zh) } else { None })
}

#[cfg(feature = "ssr")]
fn initial_language() -> Option<Language> {
    use axum_extra::extract::cookie::CookieJar;
    use_context::<leptos_axum::RequestParts>().and_then(|req| {
        let cookies = CookieJar::from_headers(&req.headers);
        cookies.get("lang").and_then(|v| Language::from_tag(v.value()))
    })
}

/// Owns the language signal and provides it to everything below. Must wrap
/// every component that renders bilingual copy.
#[island]
pub fn LanguageProvider(children: Children) -> impl IntoView {
    provide_context(LanguageContext::new(initial_language().unwrap_or_default()));
    children()
}

#[island]
pub fn LanguageToggle() -> impl IntoView {
    let lang = expect_context::<LanguageContext>();
    let persist = create_server_action::<SetLanguage>();
    let select = move |target: Language| {
        lang.set(target);
        persist.dispatch(SetLanguage {
            language: target.as_tag().to_string(),
        });
    };

    view! {
        <div class="flex items-center space-x-1 text-sm font-medium" role="group" aria-label="Language">
            <button
                class=move || language_button_class(lang.language() == Language::Ja)
                on:click=move |_| select(Language::Ja)
            >
                "日本語"
            </button>
            <span class="text-gray-300">"/"</span>
            <button
                class=move || language_button_class(lang.language() == Language::Zh)
                on:click=move |_| select(Language::Zh)
            >
                "中文"
            </button>
        </div>
    }
}

fn language_button_class(active: bool) -> &'static str {
    if active {
        "px-2 py-1 text-amber-600 border-b-2 border-amber-500"
    } else {
        "px-2 py-1 text-gray-500 hover:text-gray-900 transition-colors"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_language_finds_lang_pair() {
        assert_eq!(cookie_language("lang=zh"), Some(Language::Zh));
        assert_eq!(cookie_language("theme=light; lang=ja; seen=1"), Some(Language::Ja));
    }

    #[test]
    fn cookie_language_ignores_other_and_malformed_pairs() {
        assert_eq!(cookie_language(""), None);
        assert_eq!(cookie_language("language=zh"), None);
        assert_eq!(cookie_language("lang=en"), None);
        assert_eq!(cookie_language("lang"), None);
    }
}
