use crate::api::{ApiClient, ApiError, Lesson, LessonUpdate, Schedule, UploadFile};
use chrono::NaiveDate;
use leptos::*;
use log::{error, info, warn};
use std::future::Future;

pub const LOAD_FALLBACK_ERROR: &str = "Ошибка загрузки расписания";
pub const UPDATE_LESSON_ERROR: &str = "Ошибка обновления пары";
pub const DELETE_LESSON_ERROR: &str = "Ошибка удаления пары";
pub const UPLOAD_FILE_ERROR: &str = "Ошибка загрузки файла";
pub const DOWNLOAD_FILE_ERROR: &str = "Ошибка скачивания файла";
pub const DELETE_FILE_ERROR: &str = "Ошибка удаления файла";

pub type ScheduleContext = (ReadSignal<ScheduleState>, WriteSignal<ScheduleState>);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingDeletion {
    Lesson(i64),
    File(i64),
}

impl PendingDeletion {
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Lesson(_) => "Удалить эту пару?",
            Self::File(_) => "Удалить файл?",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleState {
    pub selected_date: NaiveDate,
    pub schedule: Option<Schedule>,
    pub status: LoadStatus,
    pub error: Option<String>,
    pub pending_deletion: Option<PendingDeletion>,
    latest_ticket: u64,
}

impl ScheduleState {
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            selected_date,
            schedule: None,
            status: LoadStatus::Idle,
            error: None,
            pending_deletion: None,
            latest_ticket: 0,
        }
    }

    /// Starts a load and returns its ticket. Earlier tickets become stale.
    pub fn begin_load(&mut self, date: NaiveDate) -> u64 {
        self.latest_ticket += 1;
        self.selected_date = date;
        self.status = LoadStatus::Loading;
        self.error = None;
        self.latest_ticket
    }

    /// Applies a load result if `ticket` is still the latest one. On error the
    /// previous schedule stays.
    pub fn finish_load(&mut self, ticket: u64, result: Result<Schedule, String>) -> bool {
        if ticket != self.latest_ticket {
            return false;
        }
        match result {
            Ok(schedule) => {
                self.schedule = Some(schedule);
                self.status = LoadStatus::Loaded;
                self.error = None;
            }
            Err(message) => {
                self.status = LoadStatus::Error;
                self.error = Some(message);
            }
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn lessons(&self) -> &[Lesson] {
        self.schedule
            .as_ref()
            .map(|schedule| schedule.lessons.as_slice())
            .unwrap_or_default()
    }

    pub fn lesson(&self, lesson_id: i64) -> Option<&Lesson> {
        self.lessons().iter().find(|lesson| lesson.id == lesson_id)
    }
}

pub fn create_schedule_context(initial_date: NaiveDate) -> ScheduleContext {
    create_signal(ScheduleState::new(initial_date))
}

pub async fn load_schedule(
    api: &ApiClient,
    set_state: WriteSignal<ScheduleState>,
    date: NaiveDate,
) -> Result<(), ApiError> {
    let mut ticket = 0;
    set_state.update(|state| ticket = state.begin_load(date));

    let (loaded, outcome) = match api.create_or_get_schedule(date).await {
        Ok(schedule) => (Ok(schedule), Ok(())),
        Err(err) => {
            warn!("Failed to load schedule for {}: {}", date, err);
            (Err(err.message_or(LOAD_FALLBACK_ERROR)), Err(err))
        }
    };

    let mut applied = false;
    set_state.update(|state| applied = state.finish_load(ticket, loaded));
    if !applied {
        info!("Dropped stale schedule response for {}", date);
    }
    outcome
}

pub async fn reload_schedule(api: &ApiClient, ctx: ScheduleContext) -> Result<(), ApiError> {
    let (state, set_state) = ctx;
    let date = state.with_untracked(|state| state.selected_date);
    load_schedule(api, set_state, date).await
}

/// Runs a mutation and, when it succeeds, reloads the whole schedule before
/// returning. A failed mutation leaves the state untouched apart from the
/// error message.
async fn mutate_and_reload<T, F>(
    api: &ApiClient,
    ctx: ScheduleContext,
    mutation: F,
    failure_message: &str,
) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let (_, set_state) = ctx;
    match mutation.await {
        Ok(value) => {
            // The mutation went through; a failed reload lands in `state.error`.
            if let Err(err) = reload_schedule(api, ctx).await {
                warn!("Reload after mutation failed: {}", err);
            }
            Ok(value)
        }
        Err(err) => {
            error!("{}: {}", failure_message, err);
            report_error(set_state, failure_message);
            Err(err)
        }
    }
}

pub async fn update_lesson(
    api: &ApiClient,
    ctx: ScheduleContext,
    lesson_id: i64,
    update: LessonUpdate,
) -> Result<(), ApiError> {
    mutate_and_reload(
        api,
        ctx,
        api.update_lesson(lesson_id, &update),
        UPDATE_LESSON_ERROR,
    )
    .await
    .map(|_| ())
}

/// One file goes to the lesson endpoint, several go through the batch upload.
pub async fn upload_files(
    api: &ApiClient,
    ctx: ScheduleContext,
    lesson_id: i64,
    mut files: Vec<UploadFile>,
) -> Result<(), ApiError> {
    let upload = async move {
        if files.len() == 1 {
            let file = files.remove(0);
            api.upload_to_lesson(lesson_id, file).await
        } else {
            api.upload_files(lesson_id, files).await
        }
    };
    mutate_and_reload(api, ctx, upload, UPLOAD_FILE_ERROR)
        .await
        .map(|_| ())
}

pub fn request_deletion(set_state: WriteSignal<ScheduleState>, target: PendingDeletion) {
    set_state.update(|state| state.pending_deletion = Some(target));
}

pub fn cancel_deletion(set_state: WriteSignal<ScheduleState>) {
    set_state.update(|state| state.pending_deletion = None);
}

/// Deletes whatever is awaiting confirmation. Without a pending target no
/// request is made.
pub async fn confirm_deletion(api: &ApiClient, ctx: ScheduleContext) -> Result<(), ApiError> {
    let (_, set_state) = ctx;
    let mut pending = None;
    set_state.update(|state| pending = state.pending_deletion.take());

    match pending {
        None => Ok(()),
        Some(PendingDeletion::Lesson(id)) => {
            mutate_and_reload(api, ctx, api.delete_lesson(id), DELETE_LESSON_ERROR).await
        }
        Some(PendingDeletion::File(id)) => {
            mutate_and_reload(api, ctx, api.delete_file(id), DELETE_FILE_ERROR).await
        }
    }
}

pub fn report_error(set_state: WriteSignal<ScheduleState>, message: &str) {
    let message = message.to_string();
    set_state.update(|state| state.error = Some(message));
}

pub fn dismiss_error(set_state: WriteSignal<ScheduleState>) {
    set_state.update(|state| state.error = None);
}
