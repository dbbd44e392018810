use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::auth::signing_key::SigningKey;

/// Errors returned by token issuance and verification.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("malformed token")]
    Malformed(#[source] jsonwebtoken::errors::Error),
    #[error("token expired")]
    Expired,
    #[error("invalid '{0}' claim")]
    InvalidClaim(&'static str),
}

/// Access token claims.
///
/// The role is intentionally absent: the authorization gate resolves it from the
/// user directory on every request, so role changes apply before the token expires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

/// Validated token as seen by the request filter.
#[derive(Debug, Clone)]
pub struct VerifiedToken {
    pub subject: String,
    pub jti: Option<String>,
    pub expires_at: DateTime<Utc>,
}

/// HS256 issuer + verifier sharing one immutable signing key.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: u64,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &Algorithm::HS256)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl TokenCodec {
    pub fn new(key: &SigningKey, ttl_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // exp is checked in `verify_at` against an explicit clock, without leeway
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(key.as_bytes()),
            decoding_key: DecodingKey::from_secret(key.as_bytes()),
            validation,
            ttl_seconds,
        }
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Sign a token for `subject` valid from `now` until `now + ttl`.
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        if subject.trim().is_empty() {
            return Err(TokenError::InvalidClaim("sub"));
        }

        let iat = now.timestamp();
        let exp = i64::try_from(self.ttl_seconds)
            .ok()
            .and_then(|ttl| iat.checked_add(ttl))
            .ok_or(TokenError::InvalidClaim("exp"))?;
        let claims = TokenClaims {
            sub: subject.to_string(),
            iat,
            exp,
            jti: Some(Uuid::new_v4().to_string()),
        };

        let mut header = Header::new(Algorithm::HS256);
        header.typ = Some("JWT".to_string());
        jsonwebtoken::encode(&header, &claims, &self.encoding_key).map_err(TokenError::Signing)
    }

    pub fn verify(&self, token: &str) -> Result<VerifiedToken, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify signature (HS256 only) and require `now < exp`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<VerifiedToken, TokenError> {
        let data = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed(e),
            })?;
        let claims = data.claims;

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }
        if claims.sub.trim().is_empty() {
            return Err(TokenError::InvalidClaim("sub"));
        }

        let expires_at =
            DateTime::from_timestamp(claims.exp, 0).ok_or(TokenError::InvalidClaim("exp"))?;

        Ok(VerifiedToken {
            subject: claims.sub,
            jti: claims.jti,
            expires_at,
        })
    }
}
