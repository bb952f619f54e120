use wasm_bindgen_futures::JsFuture;

use crate::api::UploadFile;

/// A file chosen in the picker, not read yet.
#[derive(Debug, Clone, PartialEq)]
pub struct PickedFile {
    pub name: String,
    pub size: f64,
    pub file: web_sys::File,
}

impl PickedFile {
    pub fn new(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            size: file.size(),
            file,
        }
    }
}

pub fn picked_files(list: Option<web_sys::FileList>) -> Vec<PickedFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(PickedFile::new)
        .collect()
}

pub async fn read_picked_file(picked: &PickedFile) -> Result<UploadFile, String> {
    let buffer = JsFuture::from(picked.file.array_buffer())
        .await
        .map_err(|_| format!("Не удалось прочитать файл {}", picked.name))?;
    Ok(UploadFile {
        name: picked.name.clone(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

pub async fn read_picked_files(picked: &[PickedFile]) -> Result<Vec<UploadFile>, String> {
    let mut files = Vec::with_capacity(picked.len());
    for file in picked {
        files.push(read_picked_file(file).await?);
    }
    Ok(files)
}

/// Size as shown next to a picked file, e.g. `1.50 KB`.
pub fn size_label(bytes: f64) -> String {
    format!("{:.2} KB", bytes / 1024.0)
}
