//! HMAC-SHA256 signed credentials.
//!
//! A token is `<claims>.<signature>`: the JSON claims and the MAC over the
//! encoded claims, both base64url without padding. An optional `Bearer `
//! prefix is accepted.

use super::{AuthError, Caller, IdentityResolver};
use crate::config::Secret;
use crate::model::UserId;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use tracing::{debug, warn};

type HmacSha256 = Hmac<Sha256>;

/// The signed body of a token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// The user id.
    pub sub: u32,
    pub email: String,
    /// The role literal, e.g. `ROLE_CUSTOMER`.
    pub role: String,
    /// Issued at, unix seconds.
    pub iat: i64,
    /// Expires at, unix seconds.
    pub exp: i64,
}

/// Issues and verifies tokens with one shared secret.
pub struct TokenAuthority {
    secret: Secret<String>,
    ttl: Duration,
}

impl TokenAuthority {
    pub fn new(secret: Secret<String>, ttl: Duration) -> Self {
        Self { secret, ttl }
    }

    pub fn issue_at(&self, caller: &Caller, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims {
            sub: caller.user_id.0,
            email: caller.email.clone(),
            role: caller.role.as_str().to_string(),
            iat: now.timestamp(),
            exp: now
                .checked_add_signed(self.ttl)
                .ok_or_else(|| AuthError::Signing("token lifetime out of range".into()))?
                .timestamp(),
        };
        let body = serde_json::to_vec(&claims).map_err(|e| AuthError::Signing(e.to_string()))?;
        let body = URL_SAFE_NO_PAD.encode(body);
        let signature = URL_SAFE_NO_PAD.encode(self.mac(&body)?.finalize().into_bytes());
        Ok(format!("{body}.{signature}"))
    }

    /// Verifies `token` as of `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Caller, AuthError> {
        let token = token.trim();
        let token = token.strip_prefix("Bearer ").unwrap_or(token).trim();
        if token.is_empty() {
            return Err(AuthError::Missing);
        }

        let (body, signature) = token
            .split_once('.')
            .ok_or_else(|| AuthError::Malformed("expected claims.signature".into()))?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|e| AuthError::Malformed(e.to_string()))?;
        self.mac(body)?.verify_slice(&signature).map_err(|_| {
            warn!("Token signature mismatch");
            AuthError::BadSignature
        })?;

        let claims = URL_SAFE_NO_PAD
            .decode(body)
            .map_err(|e| AuthError::Malformed(e.to_string()))?;
        let claims: Claims =
            serde_json::from_slice(&claims).map_err(|e| AuthError::Malformed(e.to_string()))?;
        if claims.exp <= now.timestamp() {
            debug!(sub = claims.sub, exp = claims.exp, "Token expired");
            return Err(AuthError::Expired);
        }
        let role = claims
            .role
            .parse()
            .map_err(|e: crate::model::UnknownRole| AuthError::Malformed(e.to_string()))?;

        Ok(Caller {
            user_id: UserId(claims.sub),
            email: claims.email,
            role,
        })
    }

    fn mac(&self, body: &str) -> Result<HmacSha256, AuthError> {
        let mut mac = HmacSha256::new_from_slice(self.secret.reveal().as_bytes())
            .map_err(|e| AuthError::Signing(e.to_string()))?;
        mac.update(body.as_bytes());
        Ok(mac)
    }
}

impl IdentityResolver for TokenAuthority {
    fn resolve_caller(&self, token: &str) -> Result<Caller, AuthError> {
        self.verify_at(token, Utc::now())
    }

    fn issue_token(&self, caller: &Caller) -> Result<String, AuthError> {
        self.issue_at(caller, Utc::now())
    }
}
