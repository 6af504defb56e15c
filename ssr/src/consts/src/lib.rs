pub mod limits;

use once_cell::sync::Lazy;
use reqwest::Url;

/// Remote processing service. Not configurable at runtime.
pub const PROCESS_AI_ENDPOINT: &str = "http://localhost:8001/process_ai/";

pub static PROCESS_AI_URL: Lazy<Url> = Lazy::new(|| Url::parse(PROCESS_AI_ENDPOINT).unwrap());

/// Multipart part names expected by the processing service.
pub mod fields {
    pub const VIDEO: &str = "video";
    pub const IMAGE: &str = "image";
    pub const TEXT: &str = "text";
}

/// Response fields that get dedicated media blocks.
pub mod response {
    pub const VIDEO_URL: &str = "video_url";
    pub const IMAGE_URL: &str = "image_url";
    pub const STATUS: &str = "status";
}

pub const VIDEO_ACCEPT: &str = "video/*";
pub const IMAGE_ACCEPT: &str = "image/*";

pub const SUBMIT_LABEL: &str = "Upload & Process";
pub const SUBMIT_LOADING_LABEL: &str = "Processing...";

pub mod alerts {
    pub const MISSING_INPUT: &str = "Please select a video, an image and enter instructions.";
    pub const UPLOAD_FAILED: &str = "Upload failed. Please try again.";
    pub const VIDEO_REJECTED: &str = "This video can't be used. Please pick another file.";
    pub const IMAGE_REJECTED: &str = "This image can't be used. Please pick another file.";
}
