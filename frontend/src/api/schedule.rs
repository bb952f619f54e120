use chrono::NaiveDate;
use reqwest::multipart::Form;

use super::{
    client::ApiClient,
    types::{ApiError, LessonUpdate, Schedule, ScheduleDateEntry, UpdatedLesson},
};
use crate::utils::date::to_iso;

impl ApiClient {
    pub async fn get_schedule(&self, date: NaiveDate) -> Result<Schedule, ApiError> {
        let url = self.endpoint(&format!("/schedule/{}", to_iso(date))).await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }

    /// Returns the schedule for `date`, creating an empty one server-side when
    /// none exists. Safe to repeat.
    pub async fn create_or_get_schedule(&self, date: NaiveDate) -> Result<Schedule, ApiError> {
        let url = self.endpoint(&format!("/schedule/{}", to_iso(date))).await;
        let response = self.send(self.http_client().post(url)).await?;
        Self::parse_json(response).await
    }

    pub async fn update_lesson(
        &self,
        lesson_id: i64,
        update: &LessonUpdate,
    ) -> Result<UpdatedLesson, ApiError> {
        let form = update
            .form_fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));
        let url = self.endpoint(&format!("/lessons/{}", lesson_id)).await;
        let response = self.send(self.http_client().put(url).multipart(form)).await?;
        Self::parse_json(response).await
    }

    pub async fn delete_lesson(&self, lesson_id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/lessons/{}", lesson_id)).await;
        self.send(self.http_client().delete(url)).await?;
        Ok(())
    }

    pub async fn get_dates(&self) -> Result<Vec<ScheduleDateEntry>, ApiError> {
        let url = self.endpoint("/dates").await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }
}
