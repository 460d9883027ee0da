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

use crate::components::Section::{SectionLoading, SectionShell, SectionStyleConfig};
use crate::hooks::use_faqs;
use crate::icons::{Icon, IconKind};
use crate::language::use_language;
use leptos::*;

/// The first answer is expanded by default as a worked example.
const INITIAL_OPEN: Option<usize> = Some(0);

/// Single-selection accordion transition: toggling the open item closes it,
/// toggling any other item opens that one and closes the rest.
fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[island]
pub fn FAQSection(#[prop(optional)] config: SectionStyleConfig) -> impl IntoView {
    let lang = use_language();
    let faqs = use_faqs();
    let (open_index, set_open_index) = create_signal(INITIAL_OPEN);

    let heading_class = format!(
        "text-3xl md:text-4xl font-bold mb-4 {}",
        config.class_unless_text("text-gray-900")
    );
    let loading_config = config.clone();

    view! {
        <SectionShell id="faq" config=config.clone() default_background="bg-gray-50">
            <Show
                when=move || !faqs.loading().get()
                fallback=move || view! { <SectionLoading config=loading_config.clone()/> }
            >
                <div class="max-w-3xl mx-auto">
                    <div class="text-center mb-12">
                        <h2 class=heading_class.clone()>
                            {move || lang.t("❓ よくある質問", "❓ 常见问题")}
                        </h2>
                        <p class="text-gray-600">
                            {move || lang.t(
                                "お客様からよくいただくご質問をまとめました",
                                "汇总了客户常问的问题",
                            )}
                        </p>
                    </div>

                    <div class="space-y-4">
                        {move || {
                            let language = lang.language();
                            faqs.get()
                                .unwrap_or_default()
                                .into_iter()
                                .enumerate()
                                .map(|(index, faq)| {
                                    let question = faq.question.get(language).to_string();
                                    let answer = faq.answer.get(language).to_string();
                                    let is_open = move || open_index.get() == Some(index);

                                    view! {
                                        <div class="bg-white rounded-xl shadow-md overflow-hidden transition-all hover:shadow-lg">
                                            <button
                                                class="w-full px-6 py-5 flex items-center justify-between text-left hover:bg-gray-50 transition-colors"
                                                on:click=move |_| {
                                                    set_open_index.update(|open| *open = toggle_open(*open, index))
                                                }
                                            >
                                                <div class="flex-1 pr-4">
                                                    <span class="inline-block bg-amber-500 text-white text-sm font-bold px-3 py-1 rounded-full mr-3">
                                                        {format!("Q{}", index + 1)}
                                                    </span>
                                                    <span class="text-lg font-semibold text-gray-900">
                                                        {question}
                                                    </span>
                                                </div>
                                                <div class="flex-shrink-0">
                                                    {move || if is_open() {
                                                        view! { <Icon kind=IconKind::ChevronUp class="w-6 h-6 text-amber-500"/> }
                                                            .into_view()
                                                    } else {
                                                        view! { <Icon kind=IconKind::ChevronDown class="w-6 h-6 text-gray-400"/> }
                                                            .into_view()
                                                    }}
                                                </div>
                                            </button>

                                            {move || is_open().then(|| view! {
                                                <div class="px-6 pb-6 pt-2 bg-gradient-to-br from-indigo-50 to-blue-50">
                                                    <div class="flex items-start">
                                                        <span class="inline-block bg-green-500 text-white text-sm font-bold px-3 py-1 rounded-full mr-3 flex-shrink-0">
                                                            "A"
                                                        </span>
                                                        <p class="text-gray-700 leading-relaxed flex-1">
                                                            {answer.clone()}
                                                        </p>
                                                    </div>
                                                </div>
                                            })}
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </Show>
        </SectionShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_is_open_initially() {
        assert_eq!(INITIAL_OPEN, Some(0));
    }

    #[test]
    fn toggling_the_open_item_closes_it() {
        assert_eq!(toggle_open(Some(0), 0), None);
        assert_eq!(toggle_open(Some(3), 3), None);
    }

    #[test]
    fn toggling_another_item_moves_the_selection() {
        assert_eq!(toggle_open(Some(0), 2), Some(2));
        assert_eq!(toggle_open(None, 1), Some(1));
    }

    #[test]
    fn at_most_one_item_is_open_across_any_sequence() {
        let clicks = [0, 1, 1, 4, 2, 2, 2, 0];
        let mut open = Some(0usize);
        for clicked in clicks {
            open = toggle_open(open, clicked);
            if let Some(index) = open {
                assert_eq!(index, clicked);
            }
        }
    }
}
