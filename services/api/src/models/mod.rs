//! API models for request and response payloads

pub mod post;
pub mod user;

// Re-export for convenience
pub use post::{CreatePostRequest, NewPost, Post, UpdatePost, UpdatePostRequest};
pub use user::{NewUser, RegisterRequest, User, UserResponse};

use serde::{Deserialize, Serialize};

/// Request for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response carrying a freshly issued token
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Generic confirmation message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
