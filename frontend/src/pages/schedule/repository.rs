use crate::api::{ApiClient, ApiError, FileRef, ScheduleDateEntry};
use crate::utils::download::fallback_file_name;

pub async fn fetch_recent_dates(api: &ApiClient) -> Result<Vec<ScheduleDateEntry>, ApiError> {
    api.get_dates().await
}

/// Name to save a download under: the name we already have, then the
/// backend metadata, then `file_<id>`.
pub async fn resolve_file_name(api: &ApiClient, file: &FileRef) -> String {
    if let Some(name) = file.filename.as_deref().filter(|name| !name.trim().is_empty()) {
        return name.to_string();
    }
    match api.get_file_info(file.id).await {
        Ok(info) if !info.filename.trim().is_empty() => info.filename,
        Ok(_) => fallback_file_name(file.id),
        Err(err) => {
            log::warn!("No metadata for file {}: {}", file.id, err);
            fallback_file_name(file.id)
        }
    }
}

pub async fn fetch_download(api: &ApiClient, file: &FileRef) -> Result<(String, Vec<u8>), ApiError> {
    let bytes = api.download_file(file.id).await?;
    let name = resolve_file_name(api, file).await;
    Ok((name, bytes))
}
