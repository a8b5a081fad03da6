//! quizforge-core — Quiz data model, authoring validation, and scoring.
//!
//! This crate defines the fundamental types the rest of quizforge builds on:
//! validated questions, per-chapter quiz banks, attempts, and score reports.

pub mod error;
pub mod markdown;
pub mod model;
pub mod parser;
pub mod report;
pub mod scoring;
pub mod statistics;
