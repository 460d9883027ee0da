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

use crate::components::CTAButton::{ButtonSize, ButtonVariant, CTAButton};
use crate::components::LanguageToggle::LanguageToggle;
use crate::icons::{Icon, IconKind};
use crate::language::use_language;
use leptos::*;

#[island]
pub fn HeroHeader() -> impl IntoView {
    let lang = use_language();
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
        // Sticky translucent navigation
        <nav class="sticky top-0 z-50 backdrop-blur-md bg-white/90 border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    // Logo
                    <a href="/" class="flex items-center flex-shrink-0 transition-opacity hover:opacity-80">
                        <Icon kind=IconKind::Sun class="w-7 h-7 text-amber-500 mr-2"/>
                        <span class="text-lg font-bold text-gray-900">
                            {move || lang.t("サンライズソーラー", "日升太阳能")}
                        </span>
                    </a>

                    // Desktop Navigation
                    <div class="hidden md:flex items-center space-x-8">
                        <NavLink href="#service" ja="サービス内容" zh="服务内容"/>
                        <NavLink href="#faq" ja="よくある質問" zh="常见问题"/>
                        <NavLink href="#contact" ja="お問い合わせ" zh="联系我们"/>
                    </div>

                    // Right side: language switch and mobile menu
                    <div class="flex items-center space-x-4">
                        <LanguageToggle/>
                        <MobileMenuButton menu_open=menu_open set_menu_open=set_menu_open/>
                    </div>
                </div>
            </div>

            // Mobile Navigation Menu
            <MobileMenu menu_open=menu_open set_menu_open=set_menu_open/>
        </nav>

        // Hero Section
        <section class="relative overflow-hidden bg-gradient-to-b from-amber-50 to-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="pt-24 pb-32 lg:pt-32 lg:pb-40">
                    <div class="text-center max-w-4xl mx-auto">
                        <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">
                            {move || lang.t("太陽光発電を、", "让太阳能发电")}
                            <span class="text-amber-500">
                                {move || lang.t("ずっと健康に。", "持续保持健康。")}
                            </span>
                        </h1>
                        <p class="text-lg text-gray-600 mb-12 max-w-2xl mx-auto">
                            {move || lang.t(
                                "点検・清掃・修理までワンストップ。日本語と中国語で対応する太陽光メンテナンスの専門チームです。",
                                "从检查、清洗到维修一站式服务。提供日语和中文支持的太阳能维护专业团队。",
                            )}
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                            <CTAButton
                                variant=ButtonVariant::Primary
                                size=ButtonSize::Large
                                href=Some("#contact".to_string())
                            >
                                {move || lang.t("無料で相談する", "免费咨询")}
                            </CTAButton>
                            <CTAButton
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Large
                                href=Some("#service".to_string())
                            >
                                {move || lang.t("サービスを見る", "查看服务")}
                            </CTAButton>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn NavLink(href: &'static str, ja: &'static str, zh: &'static str) -> impl IntoView {
    let lang = use_language();

    view! {
        <a
            href=href
            class="text-gray-600 hover:text-gray-900 transition-colors duration-200 text-sm font-medium"
        >
            {move || lang.t(ja, zh)}
        </a>
    }
}

#[component]
fn MobileMenuButton(menu_open: ReadSignal<bool>, set_menu_open: WriteSignal<bool>) -> impl IntoView {
    view! {
        <button
            class="md:hidden p-2 text-gray-600 hover:text-gray-900 transition-colors"
            on:click=move |_| set_menu_open.update(|n| *n = !*n)
            aria-label="Toggle navigation menu"
        >
            <svg
                class="h-6 w-6"
                fill="none"
                viewBox="0 0 24 24"
                stroke="currentColor"
            >
                <path
                    class=move || if menu_open.get() { "hidden" } else { "" }
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M4 6h16M4 12h16M4 18h16"
                />
                <path
                    class=move || if menu_open.get() { "" } else { "hidden" }
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M6 18L18 6M6 6l12 12"
                />
            </svg>
        </button>
    }
}

#[component]
fn MobileMenu(menu_open: ReadSignal<bool>, set_menu_open: WriteSignal<bool>) -> impl IntoView {
    view! {
        <div
            class=move || format!(
                "md:hidden absolute top-full left-0 right-0 bg-white/95 backdrop-blur-md border-b border-gray-200 transition-all duration-300 ease-out {}",
                if menu_open.get() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 -translate-y-2 pointer-events-none"
                }
            )
        >
            <div class="px-4 py-6 space-y-4">
                <MobileNavLink
                    href="#service"
                    ja="サービス内容"
                    zh="服务内容"
                    on_click=move || set_menu_open.set(false)
                />
                <MobileNavLink
                    href="#faq"
                    ja="よくある質問"
                    zh="常见问题"
                    on_click=move || set_menu_open.set(false)
                />
                <MobileNavLink
                    href="#contact"
                    ja="お問い合わせ"
                    zh="联系我们"
                    on_click=move || set_menu_open.set(false)
                />
            </div>
        </div>
    }
}

#[component]
fn MobileNavLink<F>(
    href: &'static str,
    ja: &'static str,
    zh: &'static str,
    on_click: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    let lang = use_language();

    view! {
        <a
            href=href
            class="block text-gray-600 hover:text-gray-900 transition-colors duration-200 text-base font-medium py-2"
            on:click=move |_| on_click()
        >
            {move || lang.t(ja, zh)}
        </a>
    }
}
