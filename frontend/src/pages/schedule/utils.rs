use crate::api::{Lesson, LessonUpdate, ScheduleDateEntry};
use chrono::NaiveDate;

pub const RECENT_DATES_LIMIT: usize = 7;
pub const INVALID_DATE_MESSAGE: &str =
    "Неверный формат даты. Используйте ГГГГ-ММ-ДД, ДД.ММ.ГГГГ или ГГГГ.ММ.ДД";

pub fn lesson_title(lesson: &Lesson) -> String {
    format!("Пара {}", lesson.lesson_number)
}

pub fn subject_text(lesson: &Lesson) -> String {
    format!("Предмет: {}", lesson.subject_label().unwrap_or("Не указан"))
}

pub fn teacher_text(lesson: &Lesson) -> String {
    format!(
        "Преподаватель: {}",
        lesson.teacher_label().unwrap_or("Не указан")
    )
}

pub fn room_text(lesson: &Lesson) -> String {
    format!("Аудитория: {}", lesson.room_label().unwrap_or("Не указана"))
}

/// Newest first, one entry per date, at most `limit`.
pub fn recent_dates(entries: &[ScheduleDateEntry], limit: usize) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = entries.iter().map(|entry| entry.date).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();
    dates.truncate(limit);
    dates
}

/// Editable copy of a lesson's fields, pre-filled from the current values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonDraft {
    pub subject: String,
    pub teacher: String,
    pub room: String,
}

impl LessonDraft {
    pub fn from_lesson(lesson: &Lesson) -> Self {
        Self {
            subject: lesson.subject.clone().unwrap_or_default(),
            teacher: lesson.teacher.clone().unwrap_or_default(),
            room: lesson.room.clone().unwrap_or_default(),
        }
    }

    pub fn into_update(self) -> LessonUpdate {
        fn field(value: String) -> Option<String> {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        LessonUpdate {
            subject: field(self.subject),
            teacher: field(self.teacher),
            room: field(self.room),
        }
    }
}
