//! Constants and limits for the Rangepack packet format

use serde::{Deserialize, Serialize};

/// Current protocol version (carried in the high nibble of header byte 0)
pub const PROTOCOL_VERSION: u8 = 1;

/// Packet header size in bytes
pub const HEADER_SIZE: usize = 2;

/// Hard ceiling on an assembled packet (header + body), set by the radio
/// channel's maximum payload
pub const MAX_PACKET_SIZE: usize = 237;

/// Maximum Reed-Solomon block length in symbols (GF(2^8) field order - 1)
pub const MAX_BLOCK_SIZE: usize = 255;

/// Escape byte introducing a literal run in the compressed stream
pub const LITERAL_MARKER: u8 = 0xFE;

/// Reserved byte value; never legal anywhere in a compressed stream
pub const RESERVED_BYTE: u8 = 0xFF;

/// Number of codebook entries (wire codes 0x00..=0xFD)
pub const CODEBOOK_SIZE: usize = 254;

/// Longest literal run a single escape sequence can carry
pub const MAX_LITERAL_RUN: usize = 255;

/// Packet flags (low nibble of header byte 1)
///
/// Only bit 0 has assigned semantics. Bits 1-3 are reserved and must
/// round-trip through encode/decode unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketFlags(u8);

impl PacketFlags {
    /// No flags set
    pub const NONE: u8 = 0b0000;

    /// Packet is a fragment of a longer message (reserved semantics)
    pub const FRAGMENT: u8 = 0b0001;

    /// Widest value the 4-bit flag field can hold
    pub const MAX: u8 = 0b1111;

    /// Create flags from a raw nibble
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Get the raw nibble
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Check whether the flags fit in the 4-bit wire field
    pub const fn is_valid(&self) -> bool {
        self.0 <= Self::MAX
    }

    /// Check if the fragment marker is set
    pub const fn is_fragment(&self) -> bool {
        (self.0 & Self::FRAGMENT) != 0
    }
}

impl Default for PacketFlags {
    fn default() -> Self {
        Self(Self::NONE)
    }
}
