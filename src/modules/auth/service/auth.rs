use crate::types::AuthContext;
use hmac::{Hmac, Mac};
use sha2::Sha256;

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
    MalformedToken,
    InvalidSignature,
    ExpiredToken,
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: String,
    pub expires_at: i64,
}

fn session_mac(ctx: &AuthContext, user_id: &str, expires_at: &str) -> Result<Hmac<Sha256>> {
    let mut mac = Hmac::<Sha256>::new_from_slice(ctx.session_secret.as_bytes()).map_err(|err| {
        tracing::error!("Failed to generate mac: {:?}", err);
        Error::UnexpectedError
    })?;
    mac.update(format!("{}.{}", user_id, expires_at).as_bytes());
    Ok(mac)
}

/// Verifies a session token of the form `<user_id>.<expires_at>.<hex mac>`
/// issued by the identity provider with the shared session secret.
pub fn verify_access_token(ctx: &AuthContext, access_token: &str, now: i64) -> Result<Identity> {
    let mut parts = access_token.rsplitn(3, '.');
    let (signature, raw_expires_at, user_id) = match (parts.next(), parts.next(), parts.next()) {
        (Some(signature), Some(expires_at), Some(user_id)) if !user_id.is_empty() => {
            (signature, expires_at, user_id)
        }
        _ => return Err(Error::MalformedToken),
    };

    let expires_at = raw_expires_at
        .parse::<i64>()
        .map_err(|_| Error::MalformedToken)?;
    let signature = hex::decode(signature).map_err(|_| Error::MalformedToken)?;

    session_mac(ctx, user_id, raw_expires_at)?
        .verify_slice(&signature)
        .map_err(|_| Error::InvalidSignature)?;

    if expires_at < now {
        return Err(Error::ExpiredToken);
    }

    Ok(Identity {
        user_id: user_id.to_string(),
        expires_at,
    })
}

#[cfg(test)]
pub fn issue_access_token(ctx: &AuthContext, user_id: &str, expires_at: i64) -> String {
    let expires_at = expires_at.to_string();
    let signature = session_mac(ctx, user_id, &expires_at)
        .unwrap()
        .finalize()
        .into_bytes();
    format!("{}.{}.{}", user_id, expires_at, hex::encode(signature))
}
