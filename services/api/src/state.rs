//! Application state shared across handlers

use crate::jwt::JwtService;
use crate::repositories::{PostRepository, UserRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub jwt_service: JwtService,
    pub user_repository: UserRepository,
    pub post_repository: PostRepository,
}
