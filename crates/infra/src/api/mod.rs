//! Quiz recommendation service client

mod client;
mod errors;

pub use client::{QuizServiceClient, USER_AGENT};
pub use errors::ApiError;
