//! Control structures shared by the sequence adapters.
//!
//! - [`Either`]: a value that can be one of two types; the element type of
//!   a flattened key/value sequence
//!
//! # Examples
//!
//! ```rust
//! use map_utils::control::Either;
//!
//! let element: Either<&str, u32> = Either::Left("id");
//! assert_eq!(element.map_left(str::len), Either::Left(2));
//! ```

mod either;

pub use either::Either;
