//! Result type alias for svgsplit

use super::errors::SvgSplitError;

/// Result type alias for svgsplit operations
///
/// # Examples
///
/// ```
/// use svgsplit::domain::result::Result;
/// use svgsplit::domain::errors::SvgSplitError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SvgSplitError::Export("disk full".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SvgSplitError>;
