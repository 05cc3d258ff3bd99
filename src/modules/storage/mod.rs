pub mod cloudinary;
pub mod transformation;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

pub use cloudinary::SignatureAlgorithm;
pub use transformation::{Step, Transformation};

#[derive(Clone)]
pub struct StorageContext {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub api_base_url: String,
    pub delivery_base_url: String,
    pub signature_algorithm: SignatureAlgorithm,
    pub timeout: Duration,
}

#[derive(Debug)]
pub enum Error {
    Timeout,
    UploadFailed(String),
    LookupFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "Media service timed out"),
            Self::UploadFailed(message) => write!(f, "{}", message),
            Self::LookupFailed(message) => write!(f, "{}", message),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Image,
    Video,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

/// What the media service hands back for a stored asset.
///
/// `public_id` is the only handle to the asset afterwards; an empty one means the
/// upload did not produce anything usable.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UploadedMedia {
    #[serde(default)]
    pub public_id: String,
    #[serde(default)]
    pub secure_url: String,
    #[serde(default)]
    pub bytes: Option<u64>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip)]
    pub raw: Value,
}

impl UploadedMedia {
    pub fn from_value(raw: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value::<Self>(raw.clone()).map(|media| Self { raw, ..media })
    }
}

/// Parameters of a single upload call, kept sorted so they can be signed as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadOptions {
    pub resource_type: ResourceType,
    params: BTreeMap<String, String>,
}

impl UploadOptions {
    pub fn new(folder: &str) -> Self {
        Self {
            resource_type: ResourceType::Image,
            params: BTreeMap::from([("folder".to_string(), folder.to_string())]),
        }
    }

    pub fn resource_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = resource_type;
        self
    }

    pub fn param(mut self, name: &str, value: impl ToString) -> Self {
        self.params.insert(name.to_string(), value.to_string());
        self
    }

    pub fn categorization(self, model: &str) -> Self {
        self.param("categorization", model)
    }

    pub fn auto_tagging(self, confidence: f32) -> Self {
        self.param("auto_tagging", confidence)
    }

    pub fn colors(self, enabled: bool) -> Self {
        self.param("colors", enabled)
    }

    pub fn moderation(self, provider: &str) -> Self {
        self.param("moderation", provider)
    }

    pub fn format(self, format: &str) -> Self {
        self.param("format", format)
    }

    pub fn transformation(self, transformation: &Transformation) -> Self {
        if transformation.is_empty() {
            return self;
        }
        self.param("transformation", transformation)
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    pub fn folder(&self) -> &str {
        self.params.get("folder").map(String::as_str).unwrap_or("")
    }
}

/// Builds a delivery URL for a stored asset. Pure; never touches the network.
pub fn delivery_url(
    base_url: &str,
    cloud_name: &str,
    resource_type: ResourceType,
    transformation: &Transformation,
    public_id: &str,
) -> String {
    match transformation.is_empty() {
        true => format!(
            "{}/{}/{}/upload/{}",
            base_url,
            cloud_name,
            resource_type.as_str(),
            public_id
        ),
        false => format!(
            "{}/{}/{}/upload/{}/{}",
            base_url,
            cloud_name,
            resource_type.as_str(),
            transformation,
            public_id
        ),
    }
}

#[async_trait]
pub trait MediaService: Send + Sync {
    /// Stores `contents` upstream. Every call creates a new asset.
    async fn upload(&self, contents: Bytes, options: UploadOptions)
        -> Result<UploadedMedia, Error>;

    /// Number of faces the service detected on an uploaded image.
    async fn count_faces(&self, public_id: &str) -> Result<usize, Error>;

    fn url(
        &self,
        public_id: &str,
        resource_type: ResourceType,
        transformation: &Transformation,
    ) -> String;
}
