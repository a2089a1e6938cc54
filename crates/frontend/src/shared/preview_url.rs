//! Local `blob:` URLs for showing files before they are uploaded

/// Object URL created for a blob; revoked when dropped
#[derive(Debug)]
pub struct PreviewUrl(String);

impl PreviewUrl {
    pub fn for_blob(blob: &web_sys::Blob) -> Result<Self, String> {
        web_sys::Url::create_object_url_with_blob(blob)
            .map(Self)
            .map_err(|e| format!("{e:?}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        let _ = web_sys::Url::revoke_object_url(&self.0);
    }
}
