//! Built-in rules
//!
//! Ready-to-use rules for the common form-validation cases:
//!
//! - **Text**: [`NotBlank`], [`NotEmpty`], [`MaxChars`]
//! - **Numeric**: [`Min`], [`Max`], [`InRange`]
//! - **Nullable**: [`Required`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use lavka_validator::prelude::*;
//!
//! let name = not_blank().and(max_chars(80));
//! let price = in_range(1000_i64, 1_000_000);
//! let id = required::<u64>();
//! ```

pub mod nullable;
pub mod range;
pub mod text;

pub use nullable::{Required, required};
pub use range::{InRange, Max, Min, in_range, max, min};
pub use text::{MaxChars, NotBlank, NotEmpty, max_chars, not_blank, not_empty};
