//! Error macros for campus-nav

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::NavError::invalid_value($context, $value))
    };
}

/// Macro for returning an unknown node error
#[macro_export]
macro_rules! bail_unknown_node {
    ($name:expr) => {
        return Err($crate::error::NavError::unknown_node($name))
    };
}

/// Macro for returning an unknown edge error
#[macro_export]
macro_rules! bail_unknown_edge {
    ($from:expr, $to:expr) => {
        return Err($crate::error::NavError::unknown_edge($from, $to))
    };
}
