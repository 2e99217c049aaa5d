//! Domain types shared across svgsplit.
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, SvgSplitError>`]:
//!
//! ```rust
//! use svgsplit::domain::{Result, SvgSplitError};
//!
//! fn example(found: bool) -> Result<()> {
//!     if !found {
//!         return Err(SvgSplitError::CollectionNotFound("Traits".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;

pub use errors::SvgSplitError;
pub use result::Result;
