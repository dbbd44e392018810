/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - auth: token 発行/検証, directory: principal lookup, authors: catalog store
 *   - policy: 認可ゲートが参照する route -> access の表
 * - Clone 前提で持つ (中身は全部 Arc なので clone は安い)
 */
use std::sync::Arc;

use crate::services::auth::{AuthService, RoutePolicy};
use crate::services::authors::AuthorStore;
use crate::services::directory::UserDirectory;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub directory: Arc<dyn UserDirectory>,
    pub authors: Arc<dyn AuthorStore>,
    pub policy: Arc<RoutePolicy>,
}

impl AppState {
    pub fn new(
        auth: Arc<AuthService>,
        directory: Arc<dyn UserDirectory>,
        authors: Arc<dyn AuthorStore>,
        policy: RoutePolicy,
    ) -> Self {
        Self {
            auth,
            directory,
            authors,
            policy: Arc::new(policy),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("auth", &self.auth)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
