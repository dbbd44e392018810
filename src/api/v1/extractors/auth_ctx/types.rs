/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - access middleware が token を検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - token には role を載せない。role は認可ゲートが directory から引いたときだけ埋まる
 */

use chrono::{DateTime, Utc};

use crate::services::auth::{Role, VerifiedToken};

/// 認証済みのリクエストに付与されるコンテキスト
///
/// - `subject` は token の sub (principal の email)
/// - `jti` はログ相関用
/// - `role` は role 制限付き route を通過したときのみ Some
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub subject: String,
    pub jti: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub role: Option<Role>,
}

impl AuthCtx {
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }
}

impl From<VerifiedToken> for AuthCtx {
    fn from(token: VerifiedToken) -> Self {
        Self {
            subject: token.subject,
            jti: token.jti,
            expires_at: token.expires_at,
            role: None,
        }
    }
}
