//! Error macros for labgrade

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GradeError::UsageError($msg.to_string()))
    };
}
