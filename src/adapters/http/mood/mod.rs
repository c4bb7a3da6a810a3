//! HTTP adapter for mood endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateMoodRequest, ListMoodsParams, MoodResponse};
pub use routes::mood_routes;
