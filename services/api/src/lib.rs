//! GoodThings API service
//!
//! HTTP JSON API exposing user registration, login with JWT issuance, and a
//! small authenticated "posts" resource, backed by PostgreSQL. The static
//! single-page client is served by the same binary under `/app`.

pub mod config;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod validation;
