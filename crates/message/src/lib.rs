//! # lavka-message
//!
//! Locale-aware message resolution with an explicit, testable fallback
//! chain: region entry, then language entry, then the base table.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lavka_message::{Locale, MessageTable, Tier};
//!
//! let table = MessageTable::builder()
//!     .message(Tier::Base, "hello", "안녕")
//!     .message(Tier::Base, "hello.name", "안녕 {0}")
//!     .message(Tier::language("en"), "hello", "hello")
//!     .build();
//!
//! assert_eq!(table.message("hello.name", &["Spring"], None)?, "안녕 Spring");
//! assert_eq!(table.resolve("hello", Some(&Locale::english()))?, "hello");
//! // unsupported locale: the base table answers
//! assert_eq!(table.resolve("hello", Some(&Locale::china()))?, "안녕");
//! ```
//!
//! The table is built once and read-only afterwards; lookups are pure and
//! safe to share across threads. The one genuine error is
//! [`MessageNotFound`]: the code resolves at no tier and the caller gave no
//! default.

pub mod codes;
pub mod locale;
pub mod render;
pub mod table;

pub use codes::CodeChain;
pub use locale::{Locale, ParseLocaleError, Tier};
pub use render::render;
pub use table::{MessageNotFound, MessageTable, MessageTableBuilder};
