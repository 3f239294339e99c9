//! lumira-core — Facial analysis via an external multimodal model.
//!
//! Encodes a facial photo into a base64 payload, sends it to the Gemini
//! generateContent API with a fixed structured-output schema, and validates
//! the returned document into a typed [`AnalysisResult`].

pub mod client;
pub mod encoder;
pub mod schema;
pub mod types;

pub use client::{AnalysisClient, AnalysisProvider, ClientError};
pub use encoder::{encode_image_file, EncodedImage, EncoderError};
pub use types::{
    AnalysisResult, Enhancement, EnhancementSolution, Score, ScoreCategory, SCORED_ATTRIBUTES,
};
