use super::{
    delivery_url, Error, MediaService, ResourceType, StorageContext, Transformation,
    UploadOptions, UploadedMedia,
};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{
    multipart::{Form, Part},
    Client, Response,
};
use serde::Deserialize;
use serde_json::Value;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use ulid::Ulid;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SignatureAlgorithm {
    Sha1,
    Sha256,
}

impl SignatureAlgorithm {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "sha1" => Some(Self::Sha1),
            "sha256" => Some(Self::Sha256),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorMessage,
}

#[derive(Deserialize)]
struct ErrorMessage {
    message: String,
}

#[derive(Deserialize)]
struct ResourceResponse {
    #[serde(default)]
    faces: Option<Vec<Vec<i64>>>,
}

/// Signs request parameters: sorted `key=value` pairs joined by `&`, followed by
/// the API secret, hex encoded.
pub fn sign(
    params: &BTreeMap<String, String>,
    api_secret: &str,
    algorithm: SignatureAlgorithm,
) -> String {
    let to_sign = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");
    let data_to_sign = format!("{}{}", to_sign, api_secret);

    match algorithm {
        SignatureAlgorithm::Sha1 => {
            base16ct::lower::encode_string(&Sha1::digest(data_to_sign.as_bytes()))
        }
        SignatureAlgorithm::Sha256 => {
            base16ct::lower::encode_string(&Sha256::digest(data_to_sign.as_bytes()))
        }
    }
}

fn upstream_message(data: &str) -> String {
    serde_json::from_str::<ErrorBody>(data)
        .map(|body| body.error.message)
        .unwrap_or_else(|_| data.to_string())
}

fn transport_error(err: reqwest::Error, while_doing: &str) -> Error {
    if err.is_timeout() {
        tracing::error!("Media service timed out while {}: {:?}", while_doing, err);
        return Error::Timeout;
    }

    tracing::error!("Error occurred while {}: {:?}", while_doing, err);
    Error::UploadFailed(err.to_string())
}

async fn read_body(res: Response, while_doing: &str) -> Result<(bool, String), Error> {
    let status = res.status();
    res.text()
        .await
        .map(|data| (status.is_success(), data))
        .map_err(|err| transport_error(err, while_doing))
}

pub struct Cloudinary {
    cfg: StorageContext,
    client: Client,
}

impl Cloudinary {
    pub fn new(cfg: StorageContext) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(cfg.timeout).build()?;
        Ok(Self { cfg, client })
    }

    fn upload_endpoint(&self, resource_type: ResourceType) -> String {
        format!(
            "{}/v1_1/{}/{}/upload",
            self.cfg.api_base_url,
            self.cfg.cloud_name,
            resource_type.as_str()
        )
    }

    fn resource_endpoint(&self, public_id: &str) -> String {
        let encoded = public_id
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        format!(
            "{}/v1_1/{}/resources/image/upload/{}",
            self.cfg.api_base_url, self.cfg.cloud_name, encoded
        )
    }

    fn signed_form(&self, options: &UploadOptions, timestamp: i64) -> Form {
        let mut params = options.params().clone();
        params.insert(String::from("timestamp"), timestamp.to_string());

        let signature = sign(
            &params,
            &self.cfg.api_secret,
            self.cfg.signature_algorithm,
        );

        let form = params
            .into_iter()
            .fold(Form::new(), |form, (key, value)| form.text(key, value))
            .text("api_key", self.cfg.api_key.clone())
            .text("signature", signature);

        match self.cfg.signature_algorithm {
            SignatureAlgorithm::Sha1 => form,
            SignatureAlgorithm::Sha256 => form.text("signature_algorithm", "sha256"),
        }
    }
}

#[async_trait]
impl MediaService for Cloudinary {
    async fn upload(
        &self,
        contents: Bytes,
        options: UploadOptions,
    ) -> Result<UploadedMedia, Error> {
        let length = contents.len() as u64;
        let part = Part::stream_with_length(contents, length).file_name(Ulid::new().to_string());
        let timestamp = chrono::Utc::now().timestamp();
        let form = self.signed_form(&options, timestamp).part("file", part);

        tracing::debug!(
            "Uploading {} bytes to folder {}",
            length,
            options.folder()
        );

        let res = self
            .client
            .post(self.upload_endpoint(options.resource_type))
            .multipart(form)
            .send()
            .await
            .map_err(|err| transport_error(err, "uploading a file"))?;

        let (ok, data) = read_body(res, "reading the upload response").await?;

        if !ok {
            tracing::error!("Failed to upload file: {}", data);
            return Err(Error::UploadFailed(upstream_message(&data)));
        }

        serde_json::from_str::<Value>(&data)
            .and_then(UploadedMedia::from_value)
            .map_err(|err| {
                tracing::error!("Failed to deserialize cloudinary response: {:?}", err);
                Error::UploadFailed(String::from("Unreadable response from media service"))
            })
    }

    async fn count_faces(&self, public_id: &str) -> Result<usize, Error> {
        let res = self
            .client
            .get(self.resource_endpoint(public_id))
            .basic_auth(&self.cfg.api_key, Some(&self.cfg.api_secret))
            .query(&[("faces", "true")])
            .send()
            .await
            .map_err(|err| match transport_error(err, "querying faces") {
                Error::UploadFailed(message) => Error::LookupFailed(message),
                other => other,
            })?;

        let (ok, data) = read_body(res, "reading the resource response").await?;

        if !ok {
            tracing::error!("Failed to fetch resource {}: {}", public_id, data);
            return Err(Error::LookupFailed(upstream_message(&data)));
        }

        serde_json::from_str::<ResourceResponse>(&data)
            .map(|resource| resource.faces.map_or(0, |faces| faces.len()))
            .map_err(|err| {
                tracing::error!("Failed to deserialize resource response: {:?}", err);
                Error::LookupFailed(String::from("Unreadable response from media service"))
            })
    }

    fn url(
        &self,
        public_id: &str,
        resource_type: ResourceType,
        transformation: &Transformation,
    ) -> String {
        delivery_url(
            &self.cfg.delivery_base_url,
            &self.cfg.cloud_name,
            resource_type,
            transformation,
            public_id,
        )
    }
}
