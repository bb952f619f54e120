use crate::api::{ApiClient, ApiError, FileRef, Lesson, LessonUpdate, ScheduleDateEntry, UploadFile};
use crate::pages::schedule::{repository, utils::INVALID_DATE_MESSAGE};
use crate::state::schedule::{
    self as schedule_state, create_schedule_context, PendingDeletion, ScheduleState,
    DOWNLOAD_FILE_ERROR,
};
use crate::utils::date::{parse_schedule_date, to_iso, today};
use chrono::NaiveDate;
use leptos::*;

#[derive(Clone, Copy)]
pub struct ScheduleViewModel {
    pub state: ReadSignal<ScheduleState>,
    pub set_state: WriteSignal<ScheduleState>,
    pub date_input: RwSignal<String>,
    pub date_error: RwSignal<Option<String>>,
    pub recent_dates: RwSignal<Vec<ScheduleDateEntry>>,
    pub editing: RwSignal<Option<Lesson>>,
    pub upload_target: RwSignal<Option<i64>>,
    pub load_action: Action<NaiveDate, Result<(), ApiError>>,
    pub dates_action: Action<(), Result<Vec<ScheduleDateEntry>, ApiError>>,
    pub update_action: Action<(i64, LessonUpdate), Result<(), ApiError>>,
    pub upload_action: Action<(i64, Vec<UploadFile>), Result<(), ApiError>>,
    pub delete_action: Action<(), Result<(), ApiError>>,
    pub download_action: Action<FileRef, Result<(), ApiError>>,
}

impl ScheduleViewModel {
    pub fn new(initial_date: NaiveDate) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let (state, set_state) = create_schedule_context(initial_date);
        let ctx = (state, set_state);

        let api_for_load = api.clone();
        let load_action = create_action(move |date: &NaiveDate| {
            let api = api_for_load.clone();
            let date = *date;
            async move { schedule_state::load_schedule(&api, set_state, date).await }
        });

        let api_for_dates = api.clone();
        let dates_action = create_action(move |_: &()| {
            let api = api_for_dates.clone();
            async move { repository::fetch_recent_dates(&api).await }
        });

        let api_for_update = api.clone();
        let update_action = create_action(move |(lesson_id, update): &(i64, LessonUpdate)| {
            let api = api_for_update.clone();
            let lesson_id = *lesson_id;
            let update = update.clone();
            async move { schedule_state::update_lesson(&api, ctx, lesson_id, update).await }
        });

        let api_for_upload = api.clone();
        let upload_action = create_action(move |(lesson_id, files): &(i64, Vec<UploadFile>)| {
            let api = api_for_upload.clone();
            let lesson_id = *lesson_id;
            let files = files.clone();
            async move { schedule_state::upload_files(&api, ctx, lesson_id, files).await }
        });

        let api_for_delete = api.clone();
        let delete_action = create_action(move |_: &()| {
            let api = api_for_delete.clone();
            async move { schedule_state::confirm_deletion(&api, ctx).await }
        });

        let api_for_download = api;
        let download_action = create_action(move |file: &FileRef| {
            let api = api_for_download.clone();
            let file = file.clone();
            async move { download(&api, set_state, &file).await }
        });

        let vm = Self {
            state,
            set_state,
            date_input: create_rw_signal(to_iso(initial_date)),
            date_error: create_rw_signal(None),
            recent_dates: create_rw_signal(Vec::new()),
            editing: create_rw_signal(None),
            upload_target: create_rw_signal(None),
            load_action,
            dates_action,
            update_action,
            upload_action,
            delete_action,
            download_action,
        };
        vm.wire_effects(initial_date);
        vm
    }

    fn wire_effects(&self, initial_date: NaiveDate) {
        let vm = *self;
        create_effect(move |ran: Option<()>| {
            if ran.is_none() {
                vm.load_action.dispatch(initial_date);
            }
        });
        create_effect(move |_| {
            if let Some(Ok(())) = vm.load_action.value().get() {
                vm.dates_action.dispatch(());
            }
        });
        create_effect(move |_| match vm.dates_action.value().get() {
            Some(Ok(entries)) => vm.recent_dates.set(entries),
            Some(Err(err)) => log::warn!("Failed to load recent dates: {}", err),
            None => {}
        });
        create_effect(move |_| {
            if let Some(Ok(())) = vm.update_action.value().get() {
                vm.editing.set(None);
            }
        });
        create_effect(move |_| {
            if let Some(Ok(())) = vm.upload_action.value().get() {
                vm.upload_target.set(None);
            }
        });
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.state.with(|state| state.selected_date)
    }

    pub fn select_date(&self, date: NaiveDate) {
        self.date_input.set(to_iso(date));
        self.date_error.set(None);
        self.load_action.dispatch(date);
    }

    /// Parses the date field; an unparsable value only shows a hint.
    pub fn submit_date_input(&self) {
        match parse_schedule_date(&self.date_input.get_untracked()) {
            Some(date) => self.select_date(date),
            None => self.date_error.set(Some(INVALID_DATE_MESSAGE.to_string())),
        }
    }

    pub fn go_today(&self) {
        self.select_date(today());
    }

    pub fn refresh(&self) {
        let date = self.state.with_untracked(|state| state.selected_date);
        self.load_action.dispatch(date);
    }

    pub fn dismiss_error(&self) {
        schedule_state::dismiss_error(self.set_state);
    }

    pub fn start_edit(&self, lesson: Lesson) {
        self.editing.set(Some(lesson));
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
    }

    /// Sends the edit. A draft with every field blank changes nothing, so the
    /// dialog just closes.
    pub fn save_edit(&self, lesson_id: i64, update: LessonUpdate) {
        if update.is_empty() {
            self.editing.set(None);
            return;
        }
        if self.update_action.pending().get_untracked() {
            return;
        }
        self.update_action.dispatch((lesson_id, update));
    }

    pub fn open_upload(&self, lesson_id: i64) {
        self.upload_target.set(Some(lesson_id));
    }

    pub fn close_upload(&self) {
        self.upload_target.set(None);
    }

    pub fn upload(&self, files: Vec<UploadFile>) {
        let Some(lesson_id) = self.upload_target.get_untracked() else {
            return;
        };
        if files.is_empty() || self.upload_action.pending().get_untracked() {
            return;
        }
        self.upload_action.dispatch((lesson_id, files));
    }

    pub fn request_delete_lesson(&self, lesson_id: i64) {
        schedule_state::request_deletion(self.set_state, PendingDeletion::Lesson(lesson_id));
    }

    pub fn request_delete_file(&self, file_id: i64) {
        schedule_state::request_deletion(self.set_state, PendingDeletion::File(file_id));
    }

    pub fn cancel_delete(&self) {
        schedule_state::cancel_deletion(self.set_state);
    }

    pub fn confirm_delete(&self) {
        if self.delete_action.pending().get_untracked() {
            return;
        }
        self.delete_action.dispatch(());
    }

    pub fn download(&self, file: FileRef) {
        self.download_action.dispatch(file);
    }
}

async fn download(
    api: &ApiClient,
    set_state: WriteSignal<ScheduleState>,
    file: &FileRef,
) -> Result<(), ApiError> {
    let result = match repository::fetch_download(api, file).await {
        Ok((name, bytes)) => {
            crate::utils::trigger_bytes_download(&name, &bytes).map_err(ApiError::unknown)
        }
        Err(err) => Err(err),
    };
    if let Err(err) = &result {
        log::error!("{}: {}", DOWNLOAD_FILE_ERROR, err);
        schedule_state::report_error(set_state, DOWNLOAD_FILE_ERROR);
    }
    result
}

pub fn use_schedule_view_model() -> ScheduleViewModel {
    ScheduleViewModel::new(today())
}
