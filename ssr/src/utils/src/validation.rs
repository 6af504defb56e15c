use consts::limits::{ENFORCE_MEDIA_TYPE, MAX_IMAGE_BYTES, MAX_VIDEO_BYTES};
use thiserror::Error;

use crate::web::{MediaKind, SelectedFile};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionRejected {
    #[error("{kind} file is {size} bytes, limit is {limit}")]
    TooLarge { kind: MediaKind, size: u64, limit: u64 },
    #[error("{kind} file has type {mime:?}")]
    WrongType { kind: MediaKind, mime: String },
}

/// Checks applied when a file is picked. The `accept` filter of the picker is
/// only a hint to the browser, this is where stricter rules can be plugged in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_video_bytes: Option<u64>,
    pub max_image_bytes: Option<u64>,
    pub enforce_media_type: bool,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_video_bytes: MAX_VIDEO_BYTES,
            max_image_bytes: MAX_IMAGE_BYTES,
            enforce_media_type: ENFORCE_MEDIA_TYPE,
        }
    }
}

impl UploadPolicy {
    fn limit_for(&self, kind: MediaKind) -> Option<u64> {
        match kind {
            MediaKind::Video => self.max_video_bytes,
            MediaKind::Image => self.max_image_bytes,
        }
    }

    pub fn check(&self, kind: MediaKind, file: &SelectedFile) -> Result<(), SelectionRejected> {
        if self.enforce_media_type && !file.matches_kind(kind) {
            return Err(SelectionRejected::WrongType {
                kind,
                mime: file.mime.clone(),
            });
        }
        if let Some(limit) = self.limit_for(kind) {
            if file.size > limit {
                return Err(SelectionRejected::TooLarge {
                    kind,
                    size: file.size,
                    limit,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_accepts_anything() {
        let policy = UploadPolicy::default();
        let odd = SelectedFile::from_bytes("notes.txt", "text/plain", vec![1; 1024]);
        assert_eq!(policy.check(MediaKind::Video, &odd), Ok(()));
        assert_eq!(policy.check(MediaKind::Image, &odd), Ok(()));
    }

    #[test]
    fn strict_policy_checks_type_then_size() {
        let policy = UploadPolicy {
            max_video_bytes: Some(8),
            max_image_bytes: None,
            enforce_media_type: true,
        };

        let png = SelectedFile::from_bytes("b.png", "image/png", vec![0; 64]);
        assert_eq!(
            policy.check(MediaKind::Video, &png),
            Err(SelectionRejected::WrongType {
                kind: MediaKind::Video,
                mime: "image/png".into()
            })
        );
        assert_eq!(policy.check(MediaKind::Image, &png), Ok(()));

        let big = SelectedFile::from_bytes("a.mp4", "video/mp4", vec![0; 9]);
        assert_eq!(
            policy.check(MediaKind::Video, &big),
            Err(SelectionRejected::TooLarge {
                kind: MediaKind::Video,
                size: 9,
                limit: 8
            })
        );
    }
}
