//! Error macros for travel

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::TravelError::UsageError($msg.to_string()))
    };
}

/// Macro for creating invalid setting errors
#[macro_export]
macro_rules! bail_setting {
    ($key:expr, $value:expr) => {
        return Err($crate::error::TravelError::invalid_setting($key, $value))
    };
}
