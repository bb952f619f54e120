use reqwest::multipart::{Form, Part};

use super::{
    client::ApiClient,
    types::{ApiError, FileInfo, UploadFile, UploadedFile},
};

fn file_part(file: UploadFile) -> Part {
    Part::bytes(file.bytes).file_name(file.name)
}

impl ApiClient {
    /// Batch upload through `/upload`; every file goes under the `files` field.
    pub async fn upload_files(
        &self,
        lesson_id: i64,
        files: Vec<UploadFile>,
    ) -> Result<UploadedFile, ApiError> {
        if files.is_empty() {
            return Err(ApiError::validation("Не выбрано ни одного файла"));
        }
        let form = files.into_iter().fold(
            Form::new().text("lesson_id", lesson_id.to_string()),
            |form, file| form.part("files", file_part(file)),
        );
        let url = self.endpoint("/upload").await;
        let response = self.send(self.http_client().post(url).multipart(form)).await?;
        Self::parse_json(response).await
    }

    pub async fn upload_to_lesson(
        &self,
        lesson_id: i64,
        file: UploadFile,
    ) -> Result<UploadedFile, ApiError> {
        let form = Form::new().part("file", file_part(file));
        let url = self.endpoint(&format!("/lessons/{}/files", lesson_id)).await;
        let response = self.send(self.http_client().post(url).multipart(form)).await?;
        Self::parse_json(response).await
    }

    pub async fn get_file_info(&self, file_id: i64) -> Result<FileInfo, ApiError> {
        let url = self.endpoint(&format!("/files/{}", file_id)).await;
        let response = self.send(self.http_client().get(url)).await?;
        Self::parse_json(response).await
    }

    /// Raw file content; saving it is up to the caller.
    pub async fn download_file(&self, file_id: i64) -> Result<Vec<u8>, ApiError> {
        let url = self.endpoint(&format!("/files/download/{}", file_id)).await;
        let response = self.send(self.http_client().get(url)).await?;
        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|e| ApiError::request_failed(format!("Failed to read file: {}", e)))
    }

    pub async fn delete_file(&self, file_id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/files/{}", file_id)).await;
        self.send(self.http_client().delete(url)).await?;
        Ok(())
    }
}
