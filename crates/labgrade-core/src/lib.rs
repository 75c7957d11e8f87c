//! Labgrade Core Library
//!
//! Core domain logic for rubric-weighted lab assessment grading.

pub mod assessment;
pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod grade;
pub mod id;
pub mod logging;
pub mod policy;
pub mod records;
pub mod rubric;
pub mod scoring;
pub mod session;
pub mod weights;
