use consts::{SUBMIT_LABEL, SUBMIT_LOADING_LABEL};
use leptos::prelude::*;

/// Submit control of the upload form. Disabled and relabelled while loading.
#[component]
pub fn SubmitButton(
    #[prop(into)] loading: Signal<bool>,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="w-full h-12 px-5 py-3 rounded-lg font-bold text-white bg-gradient-to-r from-pink-300 to-pink-500 transition disabled:opacity-60 disabled:cursor-not-allowed"
            disabled=move || loading.get()
            on:click=move |_| on_click()
        >
            {move || if loading.get() { SUBMIT_LOADING_LABEL } else { SUBMIT_LABEL }}
        </button>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::test_utils::render;

    #[test]
    fn idle_button_is_enabled() {
        let html = render(|| view! { <SubmitButton loading=false on_click=|| () /> });
        assert!(html.contains("Upload &amp; Process") || html.contains("Upload & Process"));
        assert!(!html.contains(SUBMIT_LOADING_LABEL));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn loading_button_is_disabled_and_relabelled() {
        let html = render(|| view! { <SubmitButton loading=true on_click=|| () /> });
        assert!(html.contains(SUBMIT_LOADING_LABEL));
        assert!(!html.contains("Upload"));
        assert!(html.contains("disabled"));
    }
}
