//! Error macros for pathsearch

/// Macro for returning malformed input errors
#[macro_export]
macro_rules! bail_malformed {
    ($($arg:tt)*) => {
        return Err($crate::error::SearchError::malformed(format!($($arg)*)))
    };
}

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::SearchError::invalid_value($context, $value))
    };
}
