//! Image upload to the platform's blob storage.

use tracing::instrument;

use super::{PlatformClient, PlatformError, UploadedImage};

/// An image file received from a dialog but not yet stored remotely.
#[derive(Debug, Clone)]
pub struct LocalImage {
    /// Original filename, used for the multipart part.
    pub file_name: String,
    /// MIME type (e.g., "image/jpeg").
    pub content_type: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

impl PlatformClient {
    /// Upload an image and get back its public URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload request fails or the content type
    /// is not a valid header value.
    #[instrument(skip(self, image), fields(file_name = %image.file_name, size = image.bytes.len()))]
    pub async fn upload_image(&self, image: &LocalImage) -> Result<UploadedImage, PlatformError> {
        let part = reqwest::multipart::Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.content_type)
            .map_err(|e| PlatformError::Parse(format!("Invalid content type: {e}")))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        self.post_multipart("/uploads/images", form).await
    }
}
