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

use crate::pages::Home::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    let formatter = |text| format!("{text} - サンライズソーラー株式会社");
    provide_meta_context();

    let json_ld = r#"
    {
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": "サンライズソーラー株式会社",
        "alternateName": "日升太阳能株式会社",
        "telephone": "03-1234-5678",
        "email": "info@sunrise-solar.jp",
        "address": {
            "@type": "PostalAddress",
            "addressLocality": "千代田区",
            "addressRegion": "東京都",
            "streetAddress": "丸の内1-2-3 サンライズビル5F",
            "addressCountry": "JP"
        },
        "description": "太陽光発電システムの点検・清掃・修理を行うメンテナンス会社。日本語・中国語対応。",
        "openingHours": "Mo-Fr 09:00-18:00",
        "knowsLanguage": ["ja", "zh"]
    }
    "#;

    view! {
        <Html lang="ja"/>
        <Stylesheet id="leptos" href="/pkg/solar_website.css"/>
        <Title formatter/>
        <Meta
            name="description"
            content="太陽光発電システムの定期点検・パネル清掃・修理交換を行うメンテナンス専門会社。関東一円対応、日本語・中国語でご相談いただけます。"
        />
        <Meta
            name="keywords"
            content="太陽光発電 メンテナンス, パネル清掃, 定期点検, 太阳能维护, 面板清洗, solar maintenance"
        />

        // Open Graph
        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content="サンライズソーラー株式会社"/>
        <Meta property="og:url" content="https://sunrise-solar.jp/"/>
        <Meta property="og:title" content="サンライズソーラー株式会社 - 太陽光発電メンテナンス"/>
        <Meta property="og:description" content="太陽光発電システムの定期点検・パネル清掃・修理交換。関東一円対応、日本語・中国語でご相談いただけます。"/>

        <Router>
            <Routes>
                <Route path="" view=Home ssr=SsrMode::Async/>
            </Routes>
        </Router>
        <script type="application/ld+json">
            {json_ld}
        </script>
    }
}
