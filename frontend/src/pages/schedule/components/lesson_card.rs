use crate::api::{FileRef, Lesson};
use crate::pages::schedule::utils;
use leptos::*;

#[component]
pub fn LessonCard(
    lesson: Lesson,
    on_edit: Callback<Lesson>,
    on_attach: Callback<i64>,
    on_delete: Callback<i64>,
    on_download: Callback<FileRef>,
    on_delete_file: Callback<i64>,
) -> impl IntoView {
    let lesson_id = lesson.id;
    let files = lesson.files.clone();
    let has_files = !files.is_empty();
    let for_edit = lesson.clone();

    view! {
        <article class="bg-white shadow rounded-lg p-4 flex flex-col justify-between" data-lesson-id=lesson_id>
            <div class="space-y-1">
                <h3 class="text-lg font-semibold text-gray-900">{utils::lesson_title(&lesson)}</h3>
                <p class="text-sm text-gray-600">{utils::subject_text(&lesson)}</p>
                <p class="text-sm text-gray-600">{utils::teacher_text(&lesson)}</p>
                <p class="text-sm text-gray-600">{utils::room_text(&lesson)}</p>
                {has_files.then(|| view! {
                    <div class="mt-3">
                        <p class="text-sm text-gray-700">"Файлы:"</p>
                        <div class="flex flex-wrap gap-2 mt-1">
                            {files
                                .into_iter()
                                .map(|file| {
                                    let file_id = file.id;
                                    let label = file.display_name();
                                    view! {
                                        <span class="inline-flex items-center gap-1 rounded-full bg-gray-100 px-3 py-1 text-sm">
                                            <button
                                                type="button"
                                                class="hover:underline"
                                                title="Скачать"
                                                on:click=move |_| on_download.call(file.clone())
                                            >
                                                {label}
                                            </button>
                                            <button
                                                type="button"
                                                aria-label="Удалить файл"
                                                class="text-gray-500 hover:text-red-700"
                                                on:click=move |_| on_delete_file.call(file_id)
                                            >
                                                {"✕"}
                                            </button>
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                })}
            </div>
            <div class="flex gap-2 mt-4">
                <button
                    type="button"
                    class="px-3 py-1 rounded text-sm bg-gray-100 hover:bg-gray-200"
                    on:click=move |_| on_edit.call(for_edit.clone())
                >
                    "Изменить"
                </button>
                <button
                    type="button"
                    class="px-3 py-1 rounded text-sm bg-gray-100 hover:bg-gray-200"
                    on:click=move |_| on_attach.call(lesson_id)
                >
                    "Прикрепить файл"
                </button>
                <button
                    type="button"
                    class="px-3 py-1 rounded text-sm bg-red-50 text-red-700 hover:bg-red-100"
                    on:click=move |_| on_delete.call(lesson_id)
                >
                    "Удалить"
                </button>
            </div>
        </article>
    }
}
