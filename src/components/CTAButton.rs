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

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

#[derive(Clone, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

#[component]
pub fn CTAButton(
    children: Children,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Medium)] size: ButtonSize,
    #[prop(default = String::new())] class: String,
    #[prop(default = None)] href: Option<String>,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center font-semibold transition-all focus:outline-none focus:ring-2 focus:ring-amber-400 focus:ring-offset-2";

    let variant_classes = match variant {
        ButtonVariant::Primary => {
            "bg-gradient-to-r from-amber-500 to-orange-500 text-white hover:shadow-lg transform hover:scale-105"
        }
        ButtonVariant::Secondary => {
            "bg-white text-gray-900 border border-gray-300 hover:border-amber-400 hover:text-amber-600 shadow-sm"
        }
    };

    let size_classes = match size {
        ButtonSize::Small => "px-4 py-2 text-sm rounded-md",
        ButtonSize::Medium => "px-6 py-3 text-base rounded-lg",
        ButtonSize::Large => "px-8 py-4 text-lg rounded-xl",
    };

    let combined_class = format!("{} {} {} {}", base_classes, variant_classes, size_classes, class);

    let content = children();

    view! {
        {move || match &href {
            Some(href) => view! {
                <a href=href class=&combined_class>
                    {content.clone()}
                </a>
            }.into_view(),
            None => view! {
                <button class=&combined_class>
                    {content.clone()}
                </button>
            }.into_view()
        }}
    }
}
