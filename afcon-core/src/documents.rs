use serde::{Deserialize, Serialize};

pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;
pub const ACCEPTED_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];
pub const ACCEPTED_DOC_TYPES: [&str; 3] = ["application/pdf", "image/jpeg", "image/png"];

/// Reference to a file the client already uploaded or picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub uri: String,
    pub name: String,
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
}

impl DocumentRef {
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// Check size and MIME type. Photos only accept images.
    pub fn check(&self, photo: bool) -> Result<(), String> {
        if self.uri.trim().is_empty() {
            return Err("file reference is empty".to_string());
        }
        if self.size > MAX_FILE_SIZE {
            return Err("file must be smaller than 5MB".to_string());
        }
        let accepted: &[&str] = if photo {
            &ACCEPTED_IMAGE_TYPES
        } else {
            &ACCEPTED_DOC_TYPES
        };
        if !accepted.contains(&self.mime_type.as_str()) {
            return Err(if photo {
                "expected a JPEG or PNG image".to_string()
            } else {
                "expected a PDF, JPEG, or PNG file".to_string()
            });
        }
        Ok(())
    }
}
