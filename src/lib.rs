//! # Gist Library
//!
//! Multi-language extractive text summarization using sentence embeddings
//! and graph centrality. Provides summarization, keyword extraction and
//! named-entity listing over a fixed set of supported languages.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod lang;
pub mod logger;
pub mod models;
pub mod nlp;
pub mod summarize;
pub mod types;
