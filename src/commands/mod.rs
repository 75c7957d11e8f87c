//! Command implementations for labgrade

pub mod assessments;
pub mod config;
pub mod dispatch;
pub mod grade;
pub mod grades;
pub mod report;
pub mod rubric;
