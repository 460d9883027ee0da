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

use crate::errors::SiteError;
use leptos::{Errors, *};

// Renders the errors collected during routing or SSR. Outside the router an
// `Errors` value is passed directly; inside it arrives as a signal.
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match outside_errors {
        Some(e) => create_rw_signal(e),
        None => match errors {
            Some(e) => e,
            None => panic!("No Errors found and we expected errors!"),
        },
    };

    let errors = errors.get_untracked();
    let errors: Vec<SiteError> = errors
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<SiteError>().cloned())
        .collect();

    // The response carries the status of the first error.
    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        let response = use_context::<ResponseOptions>();
        if let Some(response) = response {
            if let Some(error) = errors.first() {
                response.set_status(error.status_code());
            }
        }
    }

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-white px-4 text-center">
            <h1 class="text-4xl font-bold text-gray-900 mb-6">"エラーが発生しました"</h1>
            <For
                each=move || errors.clone().into_iter().enumerate()
                key=|(index, _error)| *index
                children=move |(_index, error)| {
                    let error_string = error.to_string();
                    let error_code = error.status_code();
                    view! {
                        <h2 class="text-2xl font-semibold text-amber-600 mb-2">
                            {error_code.to_string()}
                        </h2>
                        <p class="text-gray-600 mb-8">{error_string}</p>
                    }
                }
            />

            <a
                href="/"
                class="text-amber-600 hover:text-amber-700 font-semibold transition-colors"
            >
                "トップページへ戻る / 返回首页"
            </a>
        </div>
    }
}
