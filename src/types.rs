pub use crate::utils::database;
use crate::modules::storage::{
    self,
    cloudinary::{Cloudinary, SignatureAlgorithm},
    MediaService,
};
use async_trait::async_trait;
use std::env;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
}

#[derive(Clone)]
pub struct AuthContext {
    pub session_secret: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
    pub auth: AuthContext,
    pub storage: Arc<dyn MediaService>,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub session_secret: String,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub auth: AuthConfig,
    pub storage: storage::StorageContext,
}

#[derive(Debug)]
pub enum Error {
    MissingVariable(&'static str),
    InvalidVariable(&'static str, String),
    DatabaseUnavailable,
    StorageUnavailable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingVariable(name) => write!(f, "{} not set", name),
            Self::InvalidVariable(name, value) => write!(f, "Invalid {}: {}", name, value),
            Self::DatabaseUnavailable => write!(f, "Failed to prepare the database"),
            Self::StorageUnavailable => write!(f, "Failed to prepare the media storage client"),
        }
    }
}

fn required(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingVariable(name))
}

fn optional(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parsed<T: std::str::FromStr>(name: &'static str, default: &str) -> Result<T, Error> {
    let raw = optional(name, default);
    raw.parse::<T>()
        .map_err(|_| Error::InvalidVariable(name, raw.clone()))
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let database_url = required("DATABASE_URL")?;
        let host = optional("HOST", "0.0.0.0");
        let environment = optional("APP_ENV", "development");
        let port = parsed::<u32>("PORT", "8000")?;
        let session_secret = required("AUTH_SESSION_SECRET")?;
        let cloud_name = required("CLOUDINARY_CLOUD_NAME")?;
        let api_key = required("CLOUDINARY_API_KEY")?;
        let api_secret = required("CLOUDINARY_API_SECRET")?;
        let api_base_url = optional("CLOUDINARY_API_BASE_URL", "https://api.cloudinary.com");
        let delivery_base_url =
            optional("CLOUDINARY_DELIVERY_BASE_URL", "https://res.cloudinary.com");
        let raw_algorithm = optional("CLOUDINARY_SIGNATURE_ALGORITHM", "sha1");
        let signature_algorithm = SignatureAlgorithm::parse(&raw_algorithm).ok_or(
            Error::InvalidVariable("CLOUDINARY_SIGNATURE_ALGORITHM", raw_algorithm.clone()),
        )?;
        let timeout_secs = parsed::<u64>("CLOUDINARY_TIMEOUT_SECS", "60")?;

        Ok(Self {
            database: DatabaseConfig { url: database_url },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
            },
            auth: AuthConfig { session_secret },
            storage: storage::StorageContext {
                cloud_name,
                api_key,
                api_secret,
                api_base_url,
                delivery_base_url,
                signature_algorithm,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, Error> {
        let db_conn = database::connect(self.database.url.as_str())
            .await
            .map_err(|_| Error::DatabaseUnavailable)?;
        database::migrate(db_conn.clone())
            .await
            .map_err(|_| Error::DatabaseUnavailable)?;

        let storage = Cloudinary::new(self.storage).map_err(|_| Error::StorageUnavailable)?;

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
            },
            db_conn,
            auth: AuthContext {
                session_secret: self.auth.session_secret,
            },
            storage: Arc::new(storage),
        })
    }
}
