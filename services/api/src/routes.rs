//! API service routes

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    middleware::{AuthUser, auth_middleware},
    models::{
        CreatePostRequest, LoginRequest, MessageResponse, NewPost, NewUser, Post,
        RegisterRequest, TokenResponse, UpdatePost, UpdatePostRequest, UserResponse,
    },
    state::AppState,
    validation,
};

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/api/auth", get(current_user))
        .route("/api/posts", post(create_post).get(list_posts))
        .route(
            "/api/posts/:id",
            get(get_post).put(update_post).delete(delete_post),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/", get(health_check))
        .route("/api/users", post(register))
        .route("/api/login", post(login))
        .merge(protected_routes)
        .nest_service("/app", ServeDir::new("client"))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    "GoodThings API is running"
}

/// Register a new user and return a signed token
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_registration(&payload).map_err(ApiError::Validation)?;

    info!("Registration attempt for {}", payload.email);

    let existing = state
        .user_repository
        .find_by_email(&payload.email)
        .await
        .map_err(|e| {
            error!("Failed to look up user: {}", e);
            ApiError::InternalServerError
        })?;

    if existing.is_some() {
        return Err(ApiError::UserExists);
    }

    let new_user = NewUser {
        name: payload.name,
        email: payload.email,
        password: payload.password,
    };

    let user = state.user_repository.create(&new_user).await.map_err(|e| {
        error!("Failed to create user: {}", e);
        ApiError::InternalServerError
    })?;

    let token = state.jwt_service.generate_token(user.id).map_err(|e| {
        error!("Failed to generate token: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(TokenResponse { token }))
}

/// Log a user in and return a signed token.
/// Unknown email and wrong password produce the identical error.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    info!("Login attempt for {}", payload.email);

    let user = state
        .user_repository
        .find_by_email(&payload.email)
        .await
        .map_err(|e| {
            error!("Failed to look up user: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::InvalidCredentials)?;

    let password_matches = state
        .user_repository
        .verify_password(&user, &payload.password)
        .map_err(|e| {
            error!("Failed to verify password: {}", e);
            ApiError::InternalServerError
        })?;

    if !password_matches {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.jwt_service.generate_token(user.id).map_err(|e| {
        error!("Failed to generate token: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(TokenResponse { token }))
}

/// Return the current authenticated user's public profile
pub async fn current_user(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let user = state
        .user_repository
        .find_by_id(auth_user.id)
        .await
        .map_err(|e| {
            error!("Failed to look up user: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::Unauthorized)?;

    Ok(Json(UserResponse::from(user)))
}

/// Create a new post owned by the caller
pub async fn create_post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(payload): Json<CreatePostRequest>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_post_content(&payload.title, &payload.body)
        .map_err(ApiError::Validation)?;

    let new_post = NewPost {
        user_id: auth_user.id,
        title: payload.title,
        body: payload.body,
    };

    let post = state.post_repository.create(&new_post).await.map_err(|e| {
        error!("Failed to create post: {}", e);
        ApiError::InternalServerError
    })?;

    Ok((StatusCode::OK, Json(post)))
}

/// List all posts, newest first
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let posts = state.post_repository.list_all().await.map_err(|e| {
        error!("Failed to list posts: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(posts))
}

/// Get a post by ID
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let post = state
        .post_repository
        .find_by_id(id)
        .await
        .map_err(|e| {
            error!("Failed to get post: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::NotFound("Post"))?;

    Ok(Json(post))
}

/// Fetch a post and check that the caller owns it
async fn find_owned_post(state: &AppState, id: Uuid, auth_user: &AuthUser) -> ApiResult<Post> {
    let post = state
        .post_repository
        .find_by_id(id)
        .await
        .map_err(|e| {
            error!("Failed to get post: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::NotFound("Post"))?;

    if post.user_id != auth_user.id {
        return Err(ApiError::NotOwner);
    }

    Ok(post)
}

/// Update a post's title and body; omitted fields keep their stored values
pub async fn update_post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePostRequest>,
) -> ApiResult<impl IntoResponse> {
    find_owned_post(&state, id, &auth_user).await?;

    let update = UpdatePost {
        title: payload.title,
        body: payload.body,
    };

    let post = state
        .post_repository
        .update(id, &update)
        .await
        .map_err(|e| {
            error!("Failed to update post: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(post))
}

/// Delete a post owned by the caller
pub async fn delete_post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    find_owned_post(&state, id, &auth_user).await?;

    let deleted = state.post_repository.delete(id).await.map_err(|e| {
        error!("Failed to delete post: {}", e);
        ApiError::InternalServerError
    })?;

    if !deleted {
        return Err(ApiError::NotFound("Post"));
    }

    Ok(Json(MessageResponse {
        message: "Post removed".to_string(),
    }))
}
