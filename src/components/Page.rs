use crate::components::Footer::*;
use crate::components::LanguageToggle::LanguageProvider;
use leptos::*;

#[component]
pub fn Page(children: Children) -> impl IntoView {
    view! {
        <div class="overflow-x-hidden bg-white">
            <LanguageProvider>{children()} <Footer/></LanguageProvider>
        </div>
    }
}
