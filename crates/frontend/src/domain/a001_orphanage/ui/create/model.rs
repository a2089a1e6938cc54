//! Create Orphanage - Model (selected files and API functions)

use super::payload::{MultipartPayload, PartValue};
use crate::shared::preview_url::PreviewUrl;
use gloo_net::http::Request;
use web_sys::{File, FileList, FormData};

/// File chosen in the picker together with its thumbnail URL
#[derive(Debug)]
pub struct SelectedImage {
    file: File,
    preview: PreviewUrl,
}

impl SelectedImage {
    pub fn from_file(file: File) -> Result<Self, String> {
        let preview = PreviewUrl::for_blob(&file)?;
        Ok(Self { file, preview })
    }

    pub fn file(&self) -> &File {
        &self.file
    }

    pub fn preview_url(&self) -> &str {
        self.preview.as_str()
    }
}

/// Wrap every file of the list, in order
pub fn selected_images(files: &FileList) -> Result<Vec<SelectedImage>, String> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(SelectedImage::from_file)
        .collect()
}

/// Build the request body; the browser adds the multipart boundary
pub fn to_form_data(payload: &MultipartPayload<'_, SelectedImage>) -> Result<FormData, String> {
    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    for part in payload.parts() {
        match &part.value {
            PartValue::Text(value) => form_data
                .append_with_str(part.name, value)
                .map_err(|e| format!("{e:?}"))?,
            PartValue::File(image) => form_data
                .append_with_blob_and_filename(part.name, image.file(), &image.file().name())
                .map_err(|e| format!("{e:?}"))?,
        }
    }
    Ok(form_data)
}

/// POST the multipart body to the orphanages endpoint
pub async fn create_orphanage(url: &str, body: FormData) -> Result<(), String> {
    let response = Request::post(url)
        .body(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    Ok(())
}
