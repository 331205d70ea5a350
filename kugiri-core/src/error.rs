//! Error types for decoding and model loading

use thiserror::Error;

/// Errors produced while decoding encoded text into codepoints
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Malformed UTF-8: overlong form, surrogate value, value above
    /// U+10FFFF, truncated sequence, or a stray continuation byte
    #[error("invalid UTF-8 sequence at byte {position}")]
    InvalidUtf8 {
        /// Byte offset of the first byte that is not valid UTF-8
        position: usize,
    },

    /// A UTF-16 surrogate code unit without its counterpart
    #[error("unpaired surrogate at code unit {position}")]
    UnpairedSurrogate {
        /// Code-unit offset of the offending surrogate
        position: usize,
    },
}

/// Errors produced while building a model from its JSON description
#[derive(Error, Debug)]
pub enum ModelError {
    /// The bytes are not well-formed JSON
    #[error("malformed model JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value is not an object
    #[error("model root is not an object")]
    RootNotObject,

    /// A slot value (e.g. the value under "UW1") is not an object
    #[error("slot {slot} is not an object")]
    SlotNotObject {
        /// Name of the offending slot
        slot: String,
    },

    /// A weight is not an integer or does not fit in 32 bits
    #[error("slot {slot}, key {key:?}: weight is not a 32-bit integer")]
    InvalidWeight {
        /// Name of the offending slot
        slot: String,
        /// The n-gram key whose weight is invalid
        key: String,
    },

    /// An n-gram key decodes to more codepoints than the slot's arity
    #[error("slot {slot}, key {key:?}: longer than {arity} codepoint(s)")]
    KeyTooLong {
        /// Name of the offending slot
        slot: String,
        /// The over-long n-gram key
        key: String,
        /// Arity of the slot's table
        arity: usize,
    },

    /// The same slot was defined twice
    #[error("duplicate slot {slot}")]
    DuplicateSlot {
        /// Name of the slot defined more than once
        slot: String,
    },

    /// One of the 13 required slots is absent
    #[error("missing slot {slot}")]
    MissingSlot {
        /// Name of the absent slot
        slot: &'static str,
    },
}

/// Result type for model-loading operations
pub type ModelResult<T> = std::result::Result<T, ModelError>;

/// Result type for decoding operations
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
