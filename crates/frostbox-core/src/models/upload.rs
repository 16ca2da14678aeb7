/// A raw user upload passing through one ingestion call.
///
/// Exists only for the duration of the call; nothing is stored under the
/// client-declared filename (images are re-encoded, CSV bytes are copied
/// under a generated name). The acting username travels alongside, not
/// inside.
#[derive(Clone, Debug)]
pub struct UploadedFile {
    pub data: Vec<u8>,
    /// Content type as declared by the client, not verified against the bytes.
    pub content_type: String,
    /// Filename as declared by the client.
    pub filename: String,
}

impl UploadedFile {
    pub fn new(
        data: Vec<u8>,
        content_type: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            data,
            content_type: content_type.into(),
            filename: filename.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}
