use crate::api::UploadFile;
use crate::utils::progress::{UploadProgress, PROGRESS_TICK_MS};
use crate::utils::upload::{picked_files, read_picked_files, size_label, PickedFile};
use gloo_timers::callback::{Interval, Timeout};
use leptos::*;

const RESET_DELAY_MS: u32 = 600;

/// One timer step. Once the bar is full the stored timer is dropped.
fn advance_progress<T: 'static>(
    progress: RwSignal<UploadProgress>,
    ticker: StoredValue<Option<T>>,
) {
    let keep_ticking = progress.try_update(UploadProgress::tick).unwrap_or(false);
    if !keep_ticking {
        ticker.set_value(None);
    }
}

#[component]
pub fn UploadDialog(
    #[prop(into)] lesson_id: Signal<Option<i64>>,
    #[prop(into)] pending: Signal<bool>,
    on_upload: Callback<Vec<UploadFile>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let picked = create_rw_signal(Vec::<PickedFile>::new());
    let read_error = create_rw_signal(None::<String>);
    let progress = create_rw_signal(UploadProgress::default());
    let ticker = store_value(None::<Interval>);

    create_effect(move |was_pending: Option<bool>| {
        let is_pending = pending.get();
        match (was_pending.unwrap_or(false), is_pending) {
            (false, true) => {
                progress.set(UploadProgress::started());
                let interval =
                    Interval::new(PROGRESS_TICK_MS, move || advance_progress(progress, ticker));
                ticker.set_value(Some(interval));
            }
            (true, false) => {
                ticker.set_value(None);
                progress.update(UploadProgress::complete);
                Timeout::new(RESET_DELAY_MS, move || {
                    progress.try_update(UploadProgress::reset);
                })
                .forget();
            }
            _ => {}
        }
        is_pending
    });

    create_effect(move |_| {
        if lesson_id.get().is_none() {
            picked.set(Vec::new());
            read_error.set(None);
        }
    });

    let on_change = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        picked.set(picked_files(input.files()));
        read_error.set(None);
    };

    let start_upload = move |_| {
        let files = picked.get_untracked();
        if files.is_empty() || pending.get_untracked() {
            return;
        }
        read_error.set(None);
        spawn_local(async move {
            match read_picked_files(&files).await {
                Ok(files) => on_upload.call(files),
                Err(err) => {
                    log::error!("{}", err);
                    read_error.try_set(Some(err));
                }
            }
        });
    };

    view! {
        <Show when=move || lesson_id.get().is_some()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Закрыть"
                    class="absolute inset-0 bg-black/40"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[61] w-full max-w-md rounded-lg bg-white shadow-xl p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                >
                    <h2 class="text-lg font-semibold">"Загрузить файл для пары"</h2>
                    <label class="inline-block px-4 py-2 rounded-md text-sm border border-blue-600 text-blue-700 cursor-pointer">
                        "Выбрать файлы"
                        <input
                            type="file"
                            multiple=true
                            class="hidden"
                            disabled=move || pending.get()
                            on:change=on_change
                        />
                    </label>
                    <ul class="divide-y divide-gray-100">
                        {move || {
                            picked
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, file)| {
                                    view! {
                                        <li class="flex items-center justify-between py-2 text-sm">
                                            <div>
                                                <p class="text-gray-900">{file.name.clone()}</p>
                                                <p class="text-gray-500">{size_label(file.size)}</p>
                                            </div>
                                            <button
                                                type="button"
                                                aria-label="Убрать файл"
                                                class="text-gray-500 hover:text-red-700"
                                                on:click=move |_| {
                                                    picked.update(|files| {
                                                        if index < files.len() {
                                                            files.remove(index);
                                                        }
                                                    })
                                                }
                                            >
                                                {"✕"}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                    <Show when=move || (progress.get().percent() > 0)>
                        <div class="space-y-1">
                            <div class="h-2 w-full rounded bg-gray-200">
                                <div
                                    class="h-2 rounded bg-blue-600"
                                    style:width=move || format!("{}%", progress.get().percent())
                                ></div>
                            </div>
                            <p class="text-sm text-center text-gray-600">
                                {move || progress.get().label()}
                            </p>
                        </div>
                    </Show>
                    <Show when=move || read_error.get().is_some()>
                        <p class="text-sm text-red-700">{move || read_error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="px-4 py-2 rounded-md text-sm bg-gray-100 hover:bg-gray-200"
                            on:click=move |_| on_cancel.call(())
                        >
                            "Отмена"
                        </button>
                        <Show when=move || !picked.get().is_empty() && !pending.get()>
                            <button
                                type="button"
                                class="px-4 py-2 rounded-md text-sm bg-blue-600 text-white hover:bg-blue-700"
                                on:click=start_upload
                            >
                                "Загрузить"
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </Show>
    }
}
