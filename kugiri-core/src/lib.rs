//! Statistical phrase segmentation for scripts without word separators
//!
//! Japanese and Chinese text carries no spaces between words, so anything
//! that wraps, highlights, or truncates such text needs to find the
//! phrase boundaries itself. This crate scores every inter-character
//! position with a trained n-gram model (13 weight tables over a six
//! codepoint window) and accepts the positions whose score clears the
//! model's bias.
//!
//! ```
//! use kugiri_core::Segmenter;
//!
//! let json = r#"{
//!   "UW1":{},"UW2":{},"UW3":{},"UW4":{},"UW5":{},"UW6":{},
//!   "BW1":{},"BW2":{"はそ":2000,"ずず":-1999},"BW3":{},
//!   "TW1":{},"TW2":{},"TW3":{},"TW4":{}
//! }"#
//! .as_bytes();
//! let segmenter = Segmenter::from_json(json)?;
//! assert_eq!(segmenter.segment_str("私はその"), vec!["私は", "その"]);
//! # Ok::<(), kugiri_core::ModelError>(())
//! ```
//!
//! Inputs may arrive as UTF-8 bytes, UTF-16 code units, or already
//! decoded codepoints; boundary offsets come back in the same units the
//! input used. For unbounded input there is a pull-based streaming engine
//! ([`Segmenter::stream`]) that holds only a six-codepoint window.

#![warn(missing_docs)]

pub mod decode;
pub mod error;
pub mod model;
pub mod segmenter;

mod window;

// Re-export key types
pub use decode::{decode_utf16, decode_utf8, Decoded};
pub use error::{DecodeError, DecodeResult, ModelError, ModelResult};
pub use model::{Model, NgramTable};
pub use segmenter::{Boundaries, Segmenter};
