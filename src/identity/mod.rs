//! # Identity
//!
//! Resolves the credential token on each request to the calling user and
//! their role. [`FoodyApi`](crate::api::FoodyApi) calls this first on every
//! operation and scopes carts and orders to the result.

pub mod token;

pub use token::*;

use crate::error::ErrorKind;
use crate::model::{Role, UserId};
use thiserror::Error;

/// Who is making a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub user_id: UserId,
    pub email: String,
    pub role: Role,
}

impl Caller {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Why a credential was refused.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("Missing credential")]
    Missing,

    #[error("Malformed credential: {0}")]
    Malformed(String),

    #[error("Invalid credential signature")]
    BadSignature,

    #[error("Credential expired")]
    Expired,

    /// The resolver could not produce a credential.
    #[error("Credential signing failed: {0}")]
    Signing(String),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Signing(_) => ErrorKind::Unavailable,
            _ => ErrorKind::Unauthenticated,
        }
    }
}

/// Maps credential tokens to callers and back.
pub trait IdentityResolver: Send + Sync {
    /// Fails with an error of kind `Unauthenticated` when the token is missing,
    /// malformed, badly signed or expired.
    fn resolve_caller(&self, token: &str) -> Result<Caller, AuthError>;

    /// A fresh credential for `caller`.
    fn issue_token(&self, caller: &Caller) -> Result<String, AuthError>;
}
