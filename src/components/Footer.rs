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

use crate::icons::{Icon, IconKind};
use crate::language::use_language;
use leptos::*;

#[island]
pub fn Footer() -> impl IntoView {
    let lang = use_language();

    view! {
        <footer class="py-16 px-6 bg-gray-900 text-gray-300">
            <div class="max-w-4xl mx-auto">
                <div class="flex flex-col md:flex-row justify-between items-center mb-12">
                    <div class="flex items-center mb-8 md:mb-0">
                        <Icon kind=IconKind::Sun class="w-8 h-8 text-amber-400 mr-2"/>
                        <span class="text-xl font-bold text-white">
                            {move || lang.t("サンライズソーラー", "日升太阳能")}
                        </span>
                    </div>

                    <nav>
                        <ul class="flex flex-col sm:flex-row gap-x-10 gap-y-4 text-center">
                            <li>
                                <a href="#service" class="hover:text-white transition-colors">
                                    {move || lang.t("サービス内容", "服务内容")}
                                </a>
                            </li>
                            <li>
                                <a href="#faq" class="hover:text-white transition-colors">
                                    {move || lang.t("よくある質問", "常见问题")}
                                </a>
                            </li>
                            <li>
                                <a href="#contact" class="hover:text-white transition-colors">
                                    {move || lang.t("お問い合わせ", "联系我们")}
                                </a>
                            </li>
                        </ul>
                    </nav>
                </div>

                <p class="text-center text-sm text-gray-500">
                    {move || lang.t(
                        "© 2025 サンライズソーラー株式会社",
                        "© 2025 日升太阳能株式会社",
                    )}
                </p>
            </div>
        </footer>
    }
}
