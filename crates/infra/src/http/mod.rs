//! HTTP plumbing shared by the service clients

mod client;

pub use client::{HttpClient, HttpClientBuilder};
