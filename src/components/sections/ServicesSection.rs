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
use crate::hooks::use_services;
use crate::icons::{Icon, IconKind};
use crate::language::use_language;
use leptos::*;

/// Accent (icon box) and surface (card) gradient pair for a service card.
struct CardPalette {
    accent: &'static str,
    surface: &'static str,
}

const CARD_PALETTE: [CardPalette; 4] = [
    CardPalette {
        accent: "from-indigo-500 to-blue-500",
        surface: "from-indigo-50 to-blue-50",
    },
    CardPalette {
        accent: "from-purple-500 to-pink-500",
        surface: "from-purple-50 to-pink-50",
    },
    CardPalette {
        accent: "from-cyan-500 to-teal-500",
        surface: "from-cyan-50 to-teal-50",
    },
    CardPalette {
        accent: "from-violet-500 to-fuchsia-500",
        surface: "from-violet-50 to-fuchsia-50",
    },
];

/// Cards repeat the 4-color cycle by position, regardless of item count.
fn card_palette(index: usize) -> &'static CardPalette {
    &CARD_PALETTE[index % CARD_PALETTE.len()]
}

#[island]
pub fn ServicesSection(#[prop(optional)] config: SectionStyleConfig) -> impl IntoView {
    let lang = use_language();
    let services = use_services();

    let heading_class = format!(
        "text-2xl sm:text-3xl md:text-4xl font-bold mb-4 flex items-center justify-center gap-2 sm:gap-3 {}",
        config.class_unless_text("text-gray-900")
    );
    let loading_config = config.clone();

    view! {
        <SectionShell id="service" config=config.clone() default_background="bg-gray-50">
            <Show
                when=move || !services.loading().get()
                fallback=move || view! { <SectionLoading config=loading_config.clone()/> }
            >
                <div class="text-center mb-16">
                    <h2 class=heading_class.clone()>
                        <span class="text-2xl sm:text-3xl md:text-4xl">"🔧"</span>
                        <span>{move || lang.t("サービス内容", "服务内容")}</span>
                    </h2>
                    <p class="text-sm md:text-base text-gray-600 max-w-2xl mx-auto px-4">
                        {move || lang.t(
                            "太陽光発電システムの長期安定稼働を支える、充実したサービスラインナップ",
                            "支持太阳能发电系统长期稳定运行的完善服务阵容",
                        )}
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {move || {
                        let language = lang.language();
                        services.get()
                            .unwrap_or_default()
                            .into_iter()
                            .enumerate()
                            .map(|(index, service)| {
                                let palette = card_palette(index);
                                let icon = IconKind::from_name(service.icon.as_deref());
                                let name = service.name.get(language).to_string();
                                let bullets = service
                                    .description
                                    .get(language)
                                    .lines()
                                    .map(str::to_string)
                                    .collect::<Vec<_>>();

                                view! {
                                    <div class=format!(
                                        "bg-gradient-to-br {} p-6 rounded-2xl shadow-lg hover:shadow-xl transition-all transform hover:-translate-y-1",
                                        palette.surface,
                                    )>
                                        <div class=format!(
                                            "inline-flex items-center justify-center w-14 h-14 bg-gradient-to-br {} rounded-xl mb-4 shadow-md",
                                            palette.accent,
                                        )>
                                            <Icon kind=icon class="w-8 h-8 text-white"/>
                                        </div>

                                        <h3 class="text-xl font-bold text-gray-900 mb-3">{name}</h3>

                                        <div class="text-gray-700 space-y-2">
                                            {bullets.into_iter().map(|line| view! {
                                                <p class="flex items-start">
                                                    <span class="text-amber-500 mr-2">"•"</span>
                                                    <span class="flex-1">{line}</span>
                                                </p>
                                            }).collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </SectionShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_repeats_with_period_four() {
        for position in 0..8 {
            let pair = card_palette(position);
            let wrapped = card_palette(position % 4);
            assert_eq!(pair.accent, wrapped.accent);
            assert_eq!(pair.surface, wrapped.surface);
        }
    }

    #[test]
    fn first_cycle_colors_are_distinct() {
        for a in 0..4 {
            for b in (a + 1)..4 {
                assert_ne!(card_palette(a).accent, card_palette(b).accent);
            }
        }
    }
}
