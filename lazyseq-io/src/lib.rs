//! Lazy character sequences backed by files and streams.
//!
//! ```rust,no_run
//! use lazyseq::take;
//!
//! let chars = lazyseq_io::read_file("notes.txt");
//! // nothing has been opened yet
//! let head: String = take(10, chars).iter().filter_map(Result::ok).collect();
//! ```
mod error;
mod read;

pub use crate::error::{Error, Result};
pub use crate::read::{read_file, read_stream};
