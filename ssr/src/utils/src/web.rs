use std::fmt;

use consts::limits::{IMAGE_MIME_PREFIX, VIDEO_MIME_PREFIX};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    pub fn mime_prefix(self) -> &'static str {
        match self {
            MediaKind::Video => VIDEO_MIME_PREFIX,
            MediaKind::Image => IMAGE_MIME_PREFIX,
        }
    }

    pub fn form_field(self) -> &'static str {
        match self {
            MediaKind::Video => consts::fields::VIDEO,
            MediaKind::Image => consts::fields::IMAGE,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Video => write!(f, "video"),
            MediaKind::Image => write!(f, "image"),
        }
    }
}

#[derive(Clone, Debug)]
pub enum FileSource {
    Memory(Vec<u8>),
    #[cfg(feature = "hydrate")]
    Browser(web_sys::File),
}

/// A file picked by the user, with the metadata the browser reported for it.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub source: FileSource,
}

impl SelectedFile {
    pub fn from_bytes(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size: bytes.len() as u64,
            source: FileSource::Memory(bytes),
        }
    }

    #[cfg(feature = "hydrate")]
    pub fn from_browser(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime: file.type_(),
            size: file.size() as u64,
            source: FileSource::Browser(file),
        }
    }

    /// Whether the reported MIME type belongs to `kind`'s category.
    /// Browsers report an empty type for unknown extensions.
    pub fn matches_kind(&self, kind: MediaKind) -> bool {
        self.mime.starts_with(kind.mime_prefix())
    }
}
