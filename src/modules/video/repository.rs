use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use ulid::Ulid;

#[derive(Serialize, Deserialize, FromRow, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub public_id: String,
    pub original_size: String,
    pub compressed_size: String,
    pub duration: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreateVideoPayload {
    pub title: String,
    pub description: String,
    pub public_id: String,
    pub original_size: String,
    pub compressed_size: String,
    pub duration: f64,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateVideoPayload,
) -> Result<Video, Error> {
    match sqlx::query_as::<_, Video>(
        "
        INSERT INTO videos
        (id, title, description, public_id, original_size, compressed_size, duration)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.title)
    .bind(payload.description)
    .bind(payload.public_id)
    .bind(payload.original_size)
    .bind(payload.compressed_size)
    .bind(payload.duration)
    .fetch_one(e)
    .await
    {
        Ok(video) => Ok(video),
        Err(err) => {
            tracing::error!("Error occurred while saving video: {}", err);
            Err(Error::UnexpectedError)
        }
    }
}
