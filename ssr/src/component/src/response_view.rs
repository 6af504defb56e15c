use leptos::prelude::*;
use utils::process_ai::ProcessAiResponse;

/// Raw reply of the processing service, followed by whichever media it
/// pointed at.
#[component]
pub fn ResponseView(response: ProcessAiResponse) -> impl IntoView {
    let pretty = response.to_pretty_json();
    let video_url = response.video_url().map(str::to_owned);
    let image_url = response.image_url().map(str::to_owned);

    view! {
        <div class="flex flex-col gap-4 w-full">
            <h2 class="text-lg font-bold text-white">"Response"</h2>
            <pre class="overflow-x-auto p-4 text-sm rounded-lg bg-neutral-900 text-neutral-200">
                {pretty}
            </pre>
            {video_url
                .map(|url| {
                    view! {
                        <div class="flex flex-col gap-2 w-full">
                            <h3 class="text-sm font-medium text-neutral-300">"Processed Video"</h3>
                            <video
                                class="w-full rounded-lg bg-neutral-900 aspect-video"
                                controls=true
                                preload="metadata"
                                src=url
                            >
                                <p class="p-4 text-white">
                                    "Your browser doesn't support video playback."
                                </p>
                            </video>
                        </div>
                    }
                })}
            {image_url
                .map(|url| {
                    view! {
                        <div class="flex flex-col gap-2 w-full">
                            <h3 class="text-sm font-medium text-neutral-300">"Processed Image"</h3>
                            <img
                                class="object-contain w-full rounded-lg max-h-[480px]"
                                src=url
                                alt="Processed image"
                            />
                        </div>
                    }
                })}
        </div>
    }
}
