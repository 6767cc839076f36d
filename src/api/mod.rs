//! External service clients.
//!
//! Currently a single collaborator: the Gemini generative-model endpoint
//! used for optional activity reports. The client treats the service as a
//! REST endpoint returning JSON-wrapped text; everything Gemini-specific
//! stays inside [`gemini`].

pub mod gemini;
