use thiserror::Error;

/// Configuration-level error type.
///
/// The fitting core never fails at runtime; these variants describe caller
/// faults that are caught before constraints or bounds reach the orchestrator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    #[error("Invalid size range: min {min} is greater than max {max}")]
    InvalidRange { min: u32, max: u32 },

    #[error("Size must be positive: {0}")]
    NonPositiveSize(&'static str),

    #[error("Max size {0} is out of range")]
    MaxSizeOutOfRange(u32),

    #[error("Invalid line spacing multiplier: {0}")]
    InvalidSpacing(f32),

    #[error("Invalid bounds: {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message_names_both_sizes() {
        let err = FitError::InvalidRange { min: 40, max: 12 };
        let msg = err.to_string();
        assert!(msg.contains("40") && msg.contains("12"), "got {msg}");
    }

    #[test]
    fn test_max_size_out_of_range_message_names_size() {
        let err = FitError::MaxSizeOutOfRange(u32::MAX);
        assert_eq!(err.to_string(), format!("Max size {} is out of range", u32::MAX));
    }

    #[test]
    fn test_non_positive_size_message_names_field() {
        let err = FitError::NonPositiveSize("min_size");
        assert_eq!(err.to_string(), "Size must be positive: min_size");
    }
}
