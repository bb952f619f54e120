use crate::api::{Lesson, LessonUpdate};
use crate::pages::schedule::utils::LessonDraft;
use leptos::*;

const INPUT_CLASS: &str = "block w-full px-3 py-2 border border-gray-300 rounded-md text-sm";

#[component]
pub fn EditLessonDialog(
    #[prop(into)] lesson: Signal<Option<Lesson>>,
    #[prop(into)] pending: Signal<bool>,
    on_save: Callback<(i64, LessonUpdate)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        {move || {
            lesson
                .get()
                .map(|lesson| {
                    view! {
                        <EditLessonForm
                            lesson=lesson
                            pending=pending
                            on_save=on_save
                            on_cancel=on_cancel
                        />
                    }
                })
        }}
    }
}

#[component]
fn EditLessonForm(
    lesson: Lesson,
    pending: Signal<bool>,
    on_save: Callback<(i64, LessonUpdate)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = LessonDraft::from_lesson(&lesson);
    let subject = create_rw_signal(draft.subject);
    let teacher = create_rw_signal(draft.teacher);
    let room = create_rw_signal(draft.room);
    let lesson_id = lesson.id;

    let save = move |_| {
        let draft = LessonDraft {
            subject: subject.get_untracked(),
            teacher: teacher.get_untracked(),
            room: room.get_untracked(),
        };
        on_save.call((lesson_id, draft.into_update()));
    };

    view! {
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
                <h2 class="text-lg font-semibold">
                    {format!("Редактирование пары {}", lesson.lesson_number)}
                </h2>
                <label class="block text-sm text-gray-700">
                    "Предмет"
                    <input
                        type="text"
                        class=INPUT_CLASS
                        prop:value=subject
                        on:input=move |ev| subject.set(event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm text-gray-700">
                    "Преподаватель"
                    <input
                        type="text"
                        class=INPUT_CLASS
                        prop:value=teacher
                        on:input=move |ev| teacher.set(event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm text-gray-700">
                    "Аудитория"
                    <input
                        type="text"
                        class=INPUT_CLASS
                        prop:value=room
                        on:input=move |ev| room.set(event_target_value(&ev))
                    />
                </label>
                <div class="flex justify-end gap-2">
                    <button
                        type="button"
                        class="px-4 py-2 rounded-md text-sm bg-gray-100 hover:bg-gray-200"
                        on:click=move |_| on_cancel.call(())
                    >
                        "Отмена"
                    </button>
                    <button
                        type="button"
                        class="px-4 py-2 rounded-md text-sm bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50"
                        disabled=move || pending.get()
                        on:click=save
                    >
                        "Сохранить"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dialog_prefills_current_values() {
        let html = render_to_string(|| {
            let lesson = Lesson {
                id: 2,
                lesson_number: 3,
                subject: Some("Алгебра".into()),
                teacher: Some("Смирнова".into()),
                room: None,
                files: Vec::new(),
            };
            view! {
                <EditLessonDialog
                    lesson=Signal::derive(move || Some(lesson.clone()))
                    pending=Signal::derive(|| false)
                    on_save=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Редактирование пары 3"));
        assert!(html.contains("Сохранить"));
        assert!(html.contains("Преподаватель"));
    }

    #[test]
    fn dialog_hidden_without_lesson() {
        let html = render_to_string(|| {
            view! {
                <EditLessonDialog
                    lesson=Signal::derive(|| None::<Lesson>)
                    pending=Signal::derive(|| false)
                    on_save=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("role=\"dialog\""));
    }
}
