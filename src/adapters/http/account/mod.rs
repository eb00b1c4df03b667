//! HTTP adapter for the tenant account page.

mod dto;
mod handlers;
mod routes;

pub use dto::{AccountResponse, SetTelegramChatRequest, UserResponse};
pub use handlers::AccountAppState;
pub use routes::account_router;
