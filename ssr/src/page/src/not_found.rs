use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <div class="flex flex-col gap-4 justify-center items-center text-white bg-black min-h-dvh">
            <h1 class="text-2xl font-bold">"404"</h1>
            <a href="/" class="text-pink-400 underline">
                "Back to upload"
            </a>
        </div>
    }
}
