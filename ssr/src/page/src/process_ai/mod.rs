use component::{buttons::SubmitButton, file_picker::FilePicker, response_view::ResponseView};
use consts::{IMAGE_ACCEPT, VIDEO_ACCEPT};
use leptos::prelude::*;
use leptos_meta::Title;
use state::upload_form::{select_file, submit_upload, UploadForm};
use utils::{
    notify::PlatformNotifier,
    process_ai::PlatformTransport,
    validation::UploadPolicy,
    web::{MediaKind, SelectedFile},
};

#[component]
pub fn ProcessAiPage() -> impl IntoView {
    let form = RwSignal::new_local(UploadForm::default());
    let policy = use_context::<UploadPolicy>().unwrap_or_default();

    let loading = Memo::new(move |_| form.with(UploadForm::is_loading));
    let response = Memo::new(move |_| form.with(|f| f.response().cloned()));
    let video_name = Memo::new(move |_| form.with(|f| f.video().map(|v| v.name.clone())));
    let image_name = Memo::new(move |_| form.with(|f| f.image().map(|i| i.name.clone())));

    let submit_action: Action<(), ()> = Action::new_local(move |_: &()| async move {
        let outcome =
            submit_upload(&form, &PlatformTransport::default(), &PlatformNotifier::default())
                .await;
        log::debug!("submission finished: {outcome:?}");
    });

    let on_pick = move |kind: MediaKind| {
        move |file: SelectedFile| {
            // rejections are already reported to the user
            _ = select_file(&form, kind, file, &policy, &PlatformNotifier::default());
        }
    };

    view! {
        <Title text="Process AI - Upload" />
        <div class="flex flex-col bg-black min-w-dvw min-h-dvh">
            <div class="flex justify-center items-center p-4 pt-12">
                <h1 class="text-lg font-bold text-white">"Upload Video & Image"</h1>
            </div>

            <div class="flex-1 px-4 py-6 pb-24 mx-auto w-full max-w-md">
                <div class="flex flex-col gap-6">
                    <FilePicker
                        id="video-input"
                        label="Video"
                        accept=VIDEO_ACCEPT
                        selected=video_name
                        on_select=on_pick(MediaKind::Video)
                    />
                    <FilePicker
                        id="image-input"
                        label="Image"
                        accept=IMAGE_ACCEPT
                        selected=image_name
                        on_select=on_pick(MediaKind::Image)
                    />

                    <div class="w-full">
                        <label for="instructions-input" class="block mb-2 text-sm font-medium text-white">
                            "Instructions"
                        </label>
                        <textarea
                            id="instructions-input"
                            class="p-4 w-full text-white rounded-lg border transition-colors resize-none focus:border-pink-400 focus:outline-none bg-neutral-900 border-neutral-800 placeholder:text-neutral-500"
                            rows=6
                            placeholder="Describe what should happen to your media..."
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.update_text(value));
                            }
                            prop:value=move || form.with(|f| f.text().to_string())
                        ></textarea>
                    </div>

                    <SubmitButton
                        loading=loading
                        on_click=move || {
                            submit_action.dispatch(());
                        }
                    />

                    {move || response.get().map(|response| view! { <ResponseView response=response /> })}
                </div>
            </div>
        </div>
    }
}
