//! Rule combinators
//!
//! Combinators compose small rules into larger ones without giving up the
//! concrete types: `And<NotBlank, MaxChars>` is still a zero-allocation
//! value. The [`ValidateExt`](crate::foundation::ValidateExt) methods are
//! the usual entry point; the free functions here are equivalent.

pub mod and;
pub mod field;
pub mod not;
pub mod optional;
pub mod or;
pub mod when;

pub use and::{And, and};
pub use field::{Field, field};
pub use not::{Not, not};
pub use optional::{Optional, optional};
pub use or::{Or, or};
pub use when::{When, when};
