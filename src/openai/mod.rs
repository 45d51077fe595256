//! Translation between the neutral shape and the OpenAI Chat Completions
//! format.
//!
//! The core of the bridge: request, response, and streaming-chunk conversion
//! are pure functions (no I/O); [`adapter::OpenAiAdapter`] wires them to the
//! vendor endpoints.

pub mod adapter;
pub mod request;
pub mod response;
pub mod streaming;
pub mod types;

pub use adapter::OpenAiAdapter;
