//! Error types for Rangepack operations

/// Broad classification of a [`PacketError`]
///
/// The transport layer treats the classes differently: validation and
/// capacity errors are caller bugs and never retried, format errors signal a
/// protocol mismatch, and uncorrectable errors signal channel corruption
/// worth a retransmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad option values or unusable input, surfaced before any encoding
    Validation,
    /// Malformed header or body encountered while decoding
    Format,
    /// Corruption beyond the correction capacity of the FEC level
    Uncorrectable,
    /// Assembled packet would exceed the channel ceiling
    Capacity,
}

/// Errors that can occur during Rangepack packet operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PacketError {
    /// Input text is empty
    #[error("input text is empty")]
    EmptyInput,

    /// Flag bits do not fit the 4-bit wire field
    #[error("flag value {0:#x} does not fit in 4 bits")]
    InvalidFlags(u8),

    /// Codebook mode selected without a template backend or template id
    #[error("codebook compression requires a template codec and template id")]
    MissingTemplate,

    /// Template parameters rejected by the template backend
    #[error("template parameter error: {0}")]
    TemplateParams(String),

    /// Message plus parity would exceed the 255-symbol block limit
    #[error("message of {len} bytes with {parity} parity symbols exceeds the 255-symbol block")]
    BlockTooLarge {
        /// Message length in symbols.
        len: usize,
        /// Parity symbols requested.
        parity: usize,
    },

    /// Division by zero in GF(2^8)
    #[error("division by zero in GF(2^8)")]
    DivisionByZero,

    /// Packet shorter than the fixed header
    #[error("packet of {0} bytes is shorter than the 2-byte header")]
    PacketTooSmall(usize),

    /// Unsupported protocol version
    #[error("unsupported protocol version: {0}")]
    UnsupportedVersion(u8),

    /// Unknown compression code in the header
    #[error("unknown compression code: {0}")]
    UnknownCompression(u8),

    /// Unknown FEC level code in the header
    #[error("unknown FEC level code: {0}")]
    UnknownFec(u8),

    /// Packet body shorter than the parity the header promises
    #[error("body of {len} bytes cannot carry {parity} parity symbols")]
    BodyTooShort {
        /// Body length in bytes.
        len: usize,
        /// Parity symbols the FEC level requires.
        parity: usize,
    },

    /// Literal escape sequence runs past the end of the stream
    #[error("literal run truncated at offset {0}")]
    TruncatedLiteral(usize),

    /// Reserved byte 0xFF encountered in a compressed stream
    #[error("reserved byte 0xFF at offset {0}")]
    ReservedByte(usize),

    /// Byte does not index the codebook
    #[error("invalid codebook index {0}")]
    InvalidIndex(u8),

    /// Decompressed bytes are not valid UTF-8
    #[error("decompressed payload is not valid UTF-8")]
    InvalidUtf8,

    /// Error locator degree exceeds the correction capacity
    #[error("error locator degree {degree} exceeds correction capacity {max}")]
    TooManyErrors {
        /// Degree of the error locator polynomial.
        degree: usize,
        /// Maximum correctable symbol errors for the level.
        max: usize,
    },

    /// Chien search root count disagrees with the locator degree
    #[error("Chien search found {found} roots, locator degree is {expected}")]
    LocatorMismatch {
        /// Roots located in the codeword.
        found: usize,
        /// Degree of the error locator polynomial.
        expected: usize,
    },

    /// Syndromes are nonzero after applying the computed correction
    #[error("post-correction syndrome verification failed")]
    VerificationFailed,

    /// Assembled packet exceeds the channel ceiling
    #[error("packet of {len} bytes exceeds the {max}-byte ceiling")]
    PacketTooLarge {
        /// Assembled packet length.
        len: usize,
        /// Channel ceiling.
        max: usize,
    },
}

impl PacketError {
    /// Classify this error for transport-layer policy decisions
    pub const fn kind(&self) -> ErrorKind {
        match self {
            PacketError::EmptyInput
            | PacketError::InvalidFlags(_)
            | PacketError::MissingTemplate
            | PacketError::TemplateParams(_)
            | PacketError::BlockTooLarge { .. }
            | PacketError::DivisionByZero => ErrorKind::Validation,

            PacketError::PacketTooSmall(_)
            | PacketError::UnsupportedVersion(_)
            | PacketError::UnknownCompression(_)
            | PacketError::UnknownFec(_)
            | PacketError::BodyTooShort { .. }
            | PacketError::TruncatedLiteral(_)
            | PacketError::ReservedByte(_)
            | PacketError::InvalidIndex(_)
            | PacketError::InvalidUtf8 => ErrorKind::Format,

            PacketError::TooManyErrors { .. }
            | PacketError::LocatorMismatch { .. }
            | PacketError::VerificationFailed => ErrorKind::Uncorrectable,

            PacketError::PacketTooLarge { .. } => ErrorKind::Capacity,
        }
    }
}
