//! medipredict-gemini
//!
//! Prediction request adapter and response validator for the Gemini
//! `generateContent` API: prompt construction, the structured-output schema,
//! the HTTP client, and schema-checked parsing of the model's reply.

pub mod client;
pub mod error;
pub mod prompt;
pub mod response;
pub mod schema;
pub mod service;
pub mod tokens;
pub mod transaction;
