use core::fmt;

/// Errors that can occur when constructing or moving a page indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorError {
    /// Requested page index falls outside `[0, total)`, or a step would
    /// move past the first or last page.
    OutOfBounds,
}

impl fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IndicatorError::OutOfBounds => write!(f, "Page index out of bounds"),
        }
    }
}

impl core::error::Error for IndicatorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_message() {
        assert_eq!(
            IndicatorError::OutOfBounds.to_string(),
            "Page index out of bounds"
        );
    }
}
