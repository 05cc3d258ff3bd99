use serde::Serialize;
use std::fmt;

const MB: u64 = 1024 * 1024;

#[derive(Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FieldLimit {
    pub name: &'static str,
    pub max_length: u64,
}

/// What a feature accepts. Published as-is so clients can fail fast with the
/// same rules the server enforces.
#[derive(Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub name: &'static str,
    pub endpoints: &'static [&'static str],
    pub allowed_types: &'static [&'static str],
    pub max_size: u64,
    pub fields: &'static [FieldLimit],
    #[serde(skip)]
    pub unsupported_type_message: &'static str,
}

pub const IMAGE: Policy = Policy {
    name: "image",
    endpoints: &[
        "/auto-tagging",
        "/background-removal",
        "/color-enhancement",
        "/image-analyze",
        "/image-compression",
        "/image-transformation",
        "/face-detection",
    ],
    allowed_types: &["image/jpeg", "image/png", "image/webp"],
    max_size: 5 * MB,
    fields: &[],
    unsupported_type_message: "Invalid file format. Please upload an image.",
};

pub const IMAGE_UPLOAD: Policy = Policy {
    name: "image-upload",
    endpoints: &["/image-upload"],
    allowed_types: &["image/jpeg", "image/png"],
    max_size: 5 * MB,
    fields: &[],
    unsupported_type_message: "Invalid file format. Only JPG and PNG are allowed.",
};

pub const VIDEO: Policy = Policy {
    name: "video",
    endpoints: &["/video-upload"],
    allowed_types: &["video/mp4", "video/avi", "video/mov", "video/mkv"],
    max_size: 70 * MB,
    fields: &[
        FieldLimit {
            name: "title",
            max_length: 255,
        },
        FieldLimit {
            name: "description",
            max_length: 1000,
        },
    ],
    unsupported_type_message: "Invalid file format. Allowed formats: MP4, AVI, MOV, MKV",
};

pub const ALL: [Policy; 3] = [IMAGE, IMAGE_UPLOAD, VIDEO];

pub struct FileDescriptor<'a> {
    pub content_type: Option<&'a str>,
    pub size: u64,
}

#[derive(Debug, PartialEq)]
pub enum Rejection {
    Missing,
    UnsupportedType(&'static str),
    TooLarge(u64),
    FieldTooLong(String),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "No file provided"),
            Self::UnsupportedType(message) => write!(f, "{}", message),
            Self::TooLarge(max_size) => write!(
                f,
                "File size too large. Max allowed size is {}MB.",
                max_size / MB
            ),
            Self::FieldTooLong(message) => write!(f, "{}", message),
        }
    }
}

impl Policy {
    pub fn validate(&self, file: Option<FileDescriptor>) -> Result<(), Rejection> {
        let file = file.ok_or(Rejection::Missing)?;

        let content_type = file.content_type.unwrap_or_default();
        if !self.allowed_types.contains(&content_type) {
            return Err(Rejection::UnsupportedType(self.unsupported_type_message));
        }

        if file.size > self.max_size {
            return Err(Rejection::TooLarge(self.max_size));
        }

        Ok(())
    }

    pub fn field_limit(&self, name: &str) -> Option<u64> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.max_length)
    }
}
