use leptos::{html::Input, prelude::*};
use utils::web::SelectedFile;

#[component]
pub fn FilePicker(
    id: &'static str,
    label: &'static str,
    /// Advisory filter for the browser's file dialog.
    accept: &'static str,
    /// Name of the file currently selected, if any.
    #[prop(into)]
    selected: Signal<Option<String>>,
    on_select: impl Fn(SelectedFile) + 'static,
) -> impl IntoView {
    let input_ref = NodeRef::<Input>::new();

    let on_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = input_ref.get_untracked() else {
                return;
            };
            // cancelling the dialog leaves an empty list, keep the old selection
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            on_select(SelectedFile::from_browser(file));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &on_select;
    };

    view! {
        <div class="flex flex-col gap-2 w-full">
            <label for=id class="block text-sm font-medium text-white">
                {label}
            </label>
            <input
                id=id
                node_ref=input_ref
                type="file"
                accept=accept
                on:change=on_change
                class="p-3 w-full rounded-lg border bg-neutral-900 border-neutral-800 text-neutral-300 text-[15px] file:mr-4 file:rounded file:border-0 file:bg-neutral-800 file:px-3 file:py-1 file:text-white"
            />
            <Show when=move || selected.with(Option::is_some)>
                <span class="text-xs text-neutral-400">
                    {move || selected.get().unwrap_or_default()}
                </span>
            </Show>
        </div>
    }
}
