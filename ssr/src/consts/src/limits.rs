// Selection is lenient unless a stricter `UploadPolicy` is provided.
pub const MAX_VIDEO_BYTES: Option<u64> = None;
pub const MAX_IMAGE_BYTES: Option<u64> = None;
pub const ENFORCE_MEDIA_TYPE: bool = false;

pub const VIDEO_MIME_PREFIX: &str = "video/";
pub const IMAGE_MIME_PREFIX: &str = "image/";
