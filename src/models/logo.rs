//! Logo choice and attached logo files
//!
//! A logo file is only referenced while the wizard runs; its bytes are read
//! and encoded when the form is submitted.

use std::fmt;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::error::{BriefError, BriefResult};

/// Largest logo file accepted (5 MiB)
pub const MAX_LOGO_BYTES: u64 = 5 * 1024 * 1024;

pub const MEDIA_TYPE_PNG: &str = "image/png";
pub const MEDIA_TYPE_SVG: &str = "image/svg+xml";

/// Media types a logo file may have
pub const ACCEPTED_MEDIA_TYPES: &[&str] = &[MEDIA_TYPE_PNG, MEDIA_TYPE_SVG];

/// How the client wants to handle their logo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogoChoice {
    /// Nothing picked yet
    #[default]
    None,
    /// The client has a logo file
    Upload,
    /// The studio should design one
    Design,
    /// Decide later
    Skip,
}

impl LogoChoice {
    /// Choices offered on the content step, in display order
    pub const SELECTABLE: &'static [LogoChoice] =
        &[LogoChoice::Upload, LogoChoice::Design, LogoChoice::Skip];

    /// Value sent with the form (empty for `None`)
    pub fn value(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Upload => "upload",
            Self::Design => "design",
            Self::Skip => "skip",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "Not chosen",
            Self::Upload => "Upload Logo",
            Self::Design => "Design Logo",
            Self::Skip => "Skip for now",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Upload => "I have a logo file",
            Self::Design => "Our design team will create a custom logo for your brand",
            Self::Skip => "No logo for now",
        }
    }
}

impl fmt::Display for LogoChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A logo file picked by the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoAsset {
    /// File name without directories
    pub file_name: String,
    /// MIME type, guessed from the extension
    pub media_type: String,
    /// Size in bytes
    pub size: u64,
    /// Where the bytes live until submission
    pub path: PathBuf,
}

impl LogoAsset {
    /// Describe an asset without touching the filesystem
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        size: u64,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            size,
            path: path.into(),
        }
    }

    /// Build an asset from a file on disk
    pub fn from_path(path: impl AsRef<Path>) -> BriefResult<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).map_err(|e| {
            BriefError::FileRejected(format!("Cannot read {}: {}", path.display(), e))
        })?;
        if !metadata.is_file() {
            return Err(BriefError::FileRejected(format!(
                "{} is not a file",
                path.display()
            )));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            file_name,
            media_type: guess_media_type(path).to_string(),
            size: metadata.len(),
            path: path.to_path_buf(),
        })
    }

    /// Check media type and size against the upload rules
    pub fn check_acceptable(&self) -> BriefResult<()> {
        if !ACCEPTED_MEDIA_TYPES.contains(&self.media_type.as_str()) {
            return Err(BriefError::FileRejected(
                "Only PNG or SVG files are accepted".into(),
            ));
        }
        if self.size > MAX_LOGO_BYTES {
            return Err(BriefError::FileRejected(format!(
                "Logo file is {}; the limit is 5 MB",
                format_size(self.size)
            )));
        }
        Ok(())
    }

    /// Read the file and encode it as a data URL
    pub fn to_data_url(&self) -> BriefResult<String> {
        let bytes = std::fs::read(&self.path).map_err(|e| {
            BriefError::Io(format!(
                "Failed to read logo file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(encode_data_url(&self.media_type, &bytes))
    }
}

/// Encode raw bytes as a base64 data URL
pub fn encode_data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}

fn guess_media_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => MEDIA_TYPE_PNG,
        "svg" => MEDIA_TYPE_SVG,
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Human-readable byte count
pub fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    let b = bytes as f64;
    if b >= KIB * KIB {
        format!("{:.1} MB", b / (KIB * KIB))
    } else if b >= KIB {
        format!("{:.1} KB", b / KIB)
    } else {
        format!("{} B", bytes)
    }
}
