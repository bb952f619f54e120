use crate::{
    api::{FileRef, Lesson, LessonUpdate, UploadFile},
    components::{confirm_dialog::ConfirmDialog, error::ErrorAlert, layout::LoadingSpinner},
    pages::schedule::{
        components::{
            date_bar::DateBar, edit_dialog::EditLessonDialog, lesson_card::LessonCard,
            upload_dialog::UploadDialog,
        },
        utils::{recent_dates, RECENT_DATES_LIMIT},
        view_model::{use_schedule_view_model, ScheduleViewModel},
    },
    utils::date::format_date_ru,
};
use leptos::*;

#[component]
pub fn SchedulePanel() -> impl IntoView {
    let vm = use_schedule_view_model();
    view! { <ScheduleView vm=vm /> }
}

#[component]
pub fn ScheduleView(vm: ScheduleViewModel) -> impl IntoView {
    let state = vm.state;

    let heading = Signal::derive(move || {
        state.with(|state| {
            let date = state
                .schedule
                .as_ref()
                .map(|schedule| schedule.date)
                .unwrap_or(state.selected_date);
            format_date_ru(date)
        })
    });
    let loading = Signal::derive(move || state.with(|state| state.is_loading()));
    let error = Signal::derive(move || state.with(|state| state.error.clone()));
    let recent = Signal::derive(move || {
        vm.recent_dates
            .with(|entries| recent_dates(entries, RECENT_DATES_LIMIT))
    });
    let lessons = Signal::derive(move || state.with(|state| state.lessons().to_vec()));
    let has_schedule = Signal::derive(move || state.with(|state| state.schedule.is_some()));
    let pending_deletion = Signal::derive(move || state.with(|state| state.pending_deletion));

    let on_edit = Callback::new(move |lesson: Lesson| vm.start_edit(lesson));
    let on_attach = Callback::new(move |lesson_id: i64| vm.open_upload(lesson_id));
    let on_delete = Callback::new(move |lesson_id: i64| vm.request_delete_lesson(lesson_id));
    let on_download = Callback::new(move |file: FileRef| vm.download(file));
    let on_delete_file = Callback::new(move |file_id: i64| vm.request_delete_file(file_id));

    view! {
        <div class="space-y-4">
            <DateBar
                heading=heading
                date_input=vm.date_input
                date_error=vm.date_error
                recent=recent
                loading=loading
                on_submit=Callback::new(move |_| vm.submit_date_input())
                on_today=Callback::new(move |_| vm.go_today())
                on_refresh=Callback::new(move |_| vm.refresh())
                on_pick=Callback::new(move |date| vm.select_date(date))
            />
            <ErrorAlert message=error on_dismiss=Callback::new(move |_| vm.dismiss_error()) />
            <Show when=move || loading.get() && !has_schedule.get()>
                <LoadingSpinner />
            </Show>
            <Show when=move || has_schedule.get() && lessons.with(Vec::is_empty)>
                <p class="text-sm text-gray-600">"На эту дату пар нет"</p>
            </Show>
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                <For
                    each=move || lessons.get()
                    key=|lesson| {
                        (
                            lesson.id,
                            lesson.subject.clone(),
                            lesson.teacher.clone(),
                            lesson.room.clone(),
                            lesson.files.iter().map(|file| file.id).collect::<Vec<_>>(),
                        )
                    }
                    children=move |lesson| {
                        view! {
                            <LessonCard
                                lesson=lesson
                                on_edit=on_edit
                                on_attach=on_attach
                                on_delete=on_delete
                                on_download=on_download
                                on_delete_file=on_delete_file
                            />
                        }
                    }
                />
            </div>
            <ConfirmDialog
                is_open=Signal::derive(move || pending_deletion.get().is_some())
                title="Подтверждение"
                message=Signal::derive(move || {
                    pending_deletion
                        .get()
                        .map(|target| target.prompt().to_string())
                        .unwrap_or_default()
                })
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
                confirm_label="Удалить"
                confirm_disabled=vm.delete_action.pending()
                destructive=true
            />
            <EditLessonDialog
                lesson=vm.editing
                pending=vm.update_action.pending()
                on_save=Callback::new(move |(lesson_id, update): (i64, LessonUpdate)| {
                    vm.save_edit(lesson_id, update)
                })
                on_cancel=Callback::new(move |_| vm.cancel_edit())
            />
            <UploadDialog
                lesson_id=vm.upload_target
                pending=vm.upload_action.pending()
                on_upload=Callback::new(move |files: Vec<UploadFile>| vm.upload(files))
                on_cancel=Callback::new(move |_| vm.close_upload())
            />
        </div>
    }
}
