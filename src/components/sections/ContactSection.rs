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
use crate::hooks::use_company_info;
use crate::icons::{Icon, IconKind};
use crate::language::use_language;
use leptos::*;

/// Dial target for a phone number: separators stripped, digits and a leading
/// `+` kept.
fn dial_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

fn mailto_with_subject(email: &str, subject: &str) -> String {
    format!("mailto:{email}?subject={}", urlencoding::encode(subject))
}

#[island]
pub fn ContactSection(#[prop(optional)] config: SectionStyleConfig) -> impl IntoView {
    let lang = use_language();
    let company = use_company_info();

    let heading_class = format!(
        "text-3xl md:text-4xl font-bold mb-4 {}",
        config.class_unless_text("text-gray-900")
    );
    let loading_config = config.clone();

    view! {
        <SectionShell id="contact" config=config.clone() default_background="bg-white">
            <Show
                when=move || !company.loading().get()
                fallback=move || view! { <SectionLoading config=loading_config.clone()/> }
            >
                <div class="text-center mb-16">
                    <h2 class=heading_class.clone()>
                        {move || lang.t("📞 お問い合わせ", "📞 联系我们")}
                    </h2>
                    {move || company.get().flatten().map(|info| view! {
                        <p class="text-gray-600 max-w-2xl mx-auto">{lang.text(&info.name)}</p>
                    })}
                    <p class="text-gray-600 max-w-2xl mx-auto mt-2">
                        {move || lang.t("まずはお気軽にご相談ください。", "请随时咨询。")}
                    </p>
                </div>

                {move || company.get().flatten().map(|info| {
                    let phone = info.phone.clone();
                    let dial = dial_href(&info.phone);
                    let email = info.email.clone();
                    let mail = mailto_href(&info.email);
                    let inquiry = mailto_with_subject(
                        &info.email,
                        lang.t("太陽光発電メンテナンスのお問い合わせ", "太阳能发电维护咨询"),
                    );
                    let address = lang.text(&info.address);

                    view! {
                        <div class="max-w-4xl mx-auto">
                            <div class="grid md:grid-cols-2 gap-8">
                                // Contact channels
                                <div class="space-y-6">
                                    // Phone
                                    <div class="bg-gradient-to-br from-blue-50 to-cyan-50 p-6 rounded-xl shadow-md hover:shadow-lg transition-shadow">
                                        <div class="flex items-start">
                                            <div class="flex-shrink-0 w-12 h-12 bg-gradient-to-br from-blue-500 to-cyan-500 rounded-xl flex items-center justify-center shadow-md">
                                                <Icon kind=IconKind::Phone class="w-6 h-6 text-white"/>
                                            </div>
                                            <div class="ml-4 flex-1">
                                                <h3 class="text-lg font-bold text-gray-900 mb-2">
                                                    {lang.t("お電話でのお問い合わせ", "电话咨询")}
                                                </h3>
                                                <a
                                                    href=dial
                                                    class="text-2xl font-bold text-amber-600 hover:text-amber-700 transition-colors"
                                                >
                                                    {phone}
                                                </a>
                                                <div class="flex items-center mt-2 text-sm text-gray-600">
                                                    <Icon kind=IconKind::Clock class="w-4 h-4 mr-1"/>
                                                    <span>{lang.t("受付時間: 9:00〜18:00", "受理时间: 9:00〜18:00")}</span>
                                                </div>
                                            </div>
                                        </div>
                                    </div>

                                    // Email
                                    <div class="bg-gradient-to-br from-green-50 to-emerald-50 p-6 rounded-xl shadow-md hover:shadow-lg transition-shadow">
                                        <div class="flex items-start">
                                            <div class="flex-shrink-0 w-12 h-12 bg-gradient-to-br from-green-500 to-emerald-500 rounded-xl flex items-center justify-center shadow-md">
                                                <Icon kind=IconKind::Mail class="w-6 h-6 text-white"/>
                                            </div>
                                            <div class="ml-4 flex-1">
                                                <h3 class="text-lg font-bold text-gray-900 mb-2">
                                                    {lang.t("メールでのお問い合わせ", "电子邮件咨询")}
                                                </h3>
                                                <a
                                                    href=mail
                                                    class="text-lg font-semibold text-amber-600 hover:text-amber-700 transition-colors break-all"
                                                >
                                                    {email}
                                                </a>
                                                <p class="text-sm text-gray-600 mt-2">
                                                    {lang.t("24時間受付・1営業日以内に返信", "24小时受理・1个工作日内回复")}
                                                </p>
                                            </div>
                                        </div>
                                    </div>

                                    // Address
                                    <div class="bg-gradient-to-br from-violet-50 to-purple-50 p-6 rounded-xl shadow-md hover:shadow-lg transition-shadow">
                                        <div class="flex items-start">
                                            <div class="flex-shrink-0 w-12 h-12 bg-gradient-to-br from-violet-500 to-purple-500 rounded-xl flex items-center justify-center shadow-md">
                                                <Icon kind=IconKind::MapPin class="w-6 h-6 text-white"/>
                                            </div>
                                            <div class="ml-4 flex-1">
                                                <h3 class="text-lg font-bold text-gray-900 mb-2">
                                                    {lang.t("所在地", "所在地")}
                                                </h3>
                                                <p class="text-gray-700">{address}</p>
                                            </div>
                                        </div>
                                    </div>
                                </div>

                                // Inquiry card
                                <div class="bg-gradient-to-br from-purple-50 to-pink-50 p-8 rounded-2xl shadow-lg">
                                    <h3 class="text-2xl font-bold text-gray-900 mb-6">
                                        {lang.t("お問い合わせフォーム", "咨询表单")}
                                    </h3>
                                    <div class="space-y-4">
                                        <p class="text-gray-700">
                                            {lang.t(
                                                "お電話またはメールにて、お気軽にお問い合わせください。",
                                                "请通过电话或电子邮件随时联系我们。",
                                            )}
                                        </p>
                                        <div class="bg-white p-4 rounded-lg border-2 border-dashed border-amber-400">
                                            <p class="text-sm text-gray-600 mb-3">
                                                {lang.t("お問い合わせ内容例:", "咨询内容示例:")}
                                            </p>
                                            <ul class="text-sm text-gray-700 space-y-2">
                                                <InquiryExample ja="点検・清掃のお見積り依頼" zh="检查・清洁报价申请"/>
                                                <InquiryExample ja="トラブル対応のご相談" zh="故障处理咨询"/>
                                                <InquiryExample ja="定期メンテナンス契約について" zh="关于定期维护合同"/>
                                                <InquiryExample ja="その他ご質問・ご相談" zh="其他问题・咨询"/>
                                            </ul>
                                        </div>
                                        <a
                                            href=inquiry
                                            class="block w-full bg-gradient-to-r from-amber-500 to-orange-500 text-white text-center py-3 rounded-lg font-semibold hover:shadow-lg transform hover:scale-105 transition-all"
                                        >
                                            {lang.t("メールで問い合わせる", "通过电子邮件咨询")}
                                        </a>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                })}
            </Show>
        </SectionShell>
    }
}

#[component]
fn InquiryExample(ja: &'static str, zh: &'static str) -> impl IntoView {
    let lang = use_language();

    view! {
        <li class="flex items-start">
            <span class="text-amber-500 mr-2">"•"</span>
            <span>{move || lang.t(ja, zh)}</span>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dial_link_strips_separators() {
        assert_eq!(dial_href("03-1234-5678"), "tel:0312345678");
        assert_eq!(dial_href("03 1234 5678"), "tel:0312345678");
    }

    #[test]
    fn dial_link_keeps_international_prefix() {
        assert_eq!(dial_href("+81 3-1234-5678"), "tel:+81312345678");
    }

    #[test]
    fn mail_link_is_well_formed() {
        assert_eq!(mailto_href("info@sunrise-solar.jp"), "mailto:info@sunrise-solar.jp");
    }

    #[test]
    fn inquiry_link_percent_encodes_the_subject() {
        assert_eq!(
            mailto_with_subject("info@sunrise-solar.jp", "Solar Inspection 2026"),
            "mailto:info@sunrise-solar.jp?subject=Solar%20Inspection%202026"
        );

        let localized = mailto_with_subject("info@sunrise-solar.jp", "太陽光発電メンテナンスのお問い合わせ");
        assert!(localized.starts_with("mailto:info@sunrise-solar.jp?subject=%"));
        assert!(localized.is_ascii());
    }
}
