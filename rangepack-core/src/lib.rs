//! # Rangepack Core
//!
//! A packet codec for short text messages over bandwidth-constrained radio
//! links: codebook substitution compression plus Reed-Solomon forward error
//! correction over GF(2^8), framed behind a two-byte header.
//!
//! ## Modules
//!
//! - `constants`: Packet format constants and limits
//! - `types`: Core types (PacketHeader, DecodedPacket, CompressionMode)
//! - `gf256`: GF(2^8) field arithmetic
//! - `poly`: Polynomial helpers over GF(2^8)
//! - `fec`: Reed-Solomon encoding and algebraic decoding
//! - `compress`: Substitution text compression
//! - `encoder`: Packet assembly
//! - `decoder`: Packet parsing and recovery
//! - `template`: Template table interface (interface only)
//! - `radio`: Radio parameter recommender interface (interface only)

#![warn(missing_docs)]

pub mod compress;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod fec;
pub mod gf256;
pub mod poly;
pub mod radio;
pub mod template;
pub mod types;

// Re-export commonly used types
pub use decoder::{decode_packet, decode_packet_with};
pub use encoder::{encode_packet, PacketBuilder};
pub use error::{ErrorKind, PacketError};
pub use fec::FecLevel;
pub use types::{CompressionMode, DecodedPacket, PacketHeader, SizeStats};

/// Result type alias for Rangepack operations
pub type Result<T> = core::result::Result<T, PacketError>;
