//! Core types for Rangepack packets

use crate::constants::{PacketFlags, HEADER_SIZE, PROTOCOL_VERSION};
use crate::error::PacketError;
use crate::fec::FecLevel;
use serde::{Deserialize, Serialize};

/// How the packet body was compressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompressionMode {
    /// Raw UTF-8 bytes
    None,
    /// Codebook substitution ([`crate::compress`])
    #[default]
    Substitution,
    /// Template lookup via an external [`crate::template::TemplateCodec`]
    Codebook,
}

impl CompressionMode {
    /// Wire code carried in the header
    pub const fn code(self) -> u8 {
        match self {
            CompressionMode::None => 0,
            CompressionMode::Substitution => 1,
            CompressionMode::Codebook => 2,
        }
    }

    /// Parse a wire code
    pub fn from_code(code: u8) -> Result<Self, PacketError> {
        match code {
            0 => Ok(CompressionMode::None),
            1 => Ok(CompressionMode::Substitution),
            2 => Ok(CompressionMode::Codebook),
            other => Err(PacketError::UnknownCompression(other)),
        }
    }
}

/// Two-byte bit-packed packet header
///
/// Wire layout: byte 0 = (version << 4) | compression code,
/// byte 1 = (FEC code << 4) | flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketHeader {
    /// Protocol version
    pub version: u8,
    /// Body compression mode
    pub compression: CompressionMode,
    /// Forward error correction level
    pub fec: FecLevel,
    /// 4-bit flag field
    pub flags: PacketFlags,
}

impl PacketHeader {
    /// Create a header for the current protocol version
    pub fn new(compression: CompressionMode, fec: FecLevel, flags: PacketFlags) -> Self {
        Self {
            version: PROTOCOL_VERSION,
            compression,
            fec,
            flags,
        }
    }

    /// Validate fields before encoding
    pub fn validate(&self) -> Result<(), PacketError> {
        if self.version != PROTOCOL_VERSION {
            return Err(PacketError::UnsupportedVersion(self.version));
        }
        if !self.flags.is_valid() {
            return Err(PacketError::InvalidFlags(self.flags.as_u8()));
        }
        Ok(())
    }

    /// Serialize to the two wire bytes
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        [
            (self.version << 4) | self.compression.code(),
            (self.fec.code() << 4) | self.flags.as_u8(),
        ]
    }

    /// Parse the two wire bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PacketError> {
        if bytes.len() < HEADER_SIZE {
            return Err(PacketError::PacketTooSmall(bytes.len()));
        }

        let version = bytes[0] >> 4;
        if version != PROTOCOL_VERSION {
            return Err(PacketError::UnsupportedVersion(version));
        }

        let compression = CompressionMode::from_code(bytes[0] & 0x0F)?;
        let fec = FecLevel::from_code(bytes[1] >> 4)?;
        let flags = PacketFlags::new(bytes[1] & 0x0F);

        Ok(Self {
            version,
            compression,
            fec,
            flags,
        })
    }
}

/// Byte counts observed while decoding a packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeStats {
    /// Full packet length on the wire (header + body)
    pub packet_len: usize,
    /// Body length after parity stripping, before decompression
    pub body_len: usize,
    /// Recovered text length in bytes
    pub text_len: usize,
}

impl SizeStats {
    /// Packet bytes per text byte; above 1.0 means the pipeline expanded
    /// the message
    pub fn ratio(&self) -> f64 {
        if self.text_len == 0 {
            return 0.0;
        }
        self.packet_len as f64 / self.text_len as f64
    }

    /// Percentage of airtime saved relative to sending the raw text
    pub fn saved_percent(&self) -> f64 {
        (1.0 - self.ratio()) * 100.0
    }
}

/// Result of decoding a packet
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPacket {
    /// Recovered message text
    pub text: String,
    /// Parsed header fields
    pub header: PacketHeader,
    /// Size statistics for the decode
    pub stats: SizeStats,
}
