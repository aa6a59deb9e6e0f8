//! Error macros for mailmark

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::MailmarkError::invalid_value($context, $value))
    };
}

/// Macro for creating unsupported errors
#[macro_export]
macro_rules! bail_unsupported {
    ($context:expr, $value:expr, $supported:expr) => {
        return Err($crate::error::MailmarkError::unsupported(
            $context, $value, $supported,
        ))
    };
}

/// Macro for failing a transformer stage
#[macro_export]
macro_rules! bail_transform {
    ($transformer:expr, $reason:expr) => {
        return Err($crate::error::MailmarkError::transform_failed(
            $transformer,
            $reason,
        ))
    };
}
