//! Packet decoding
//!
//! Inverse of the encode pipeline: parse the header, Reed-Solomon-decode the
//! body when a FEC level is present, then undo the header's compression
//! mode. FEC failures propagate as uncorrectable errors so the transport can
//! distinguish corruption from protocol mismatches.

use crate::compress;
use crate::constants::HEADER_SIZE;
use crate::error::PacketError;
use crate::fec;
use crate::template::{NoTemplates, TemplateCodec};
use crate::types::{CompressionMode, DecodedPacket, PacketHeader, SizeStats};
use tracing::debug;

/// Decode a packet that does not use codebook compression
///
/// Codebook-mode packets fail with `MissingTemplate`; use
/// [`decode_packet_with`] to supply the template backend.
pub fn decode_packet(data: &[u8]) -> Result<DecodedPacket, PacketError> {
    decode_packet_with(data, &NoTemplates)
}

/// Decode a packet, resolving codebook bodies through `templates`
pub fn decode_packet_with(
    data: &[u8],
    templates: &dyn TemplateCodec,
) -> Result<DecodedPacket, PacketError> {
    let header = PacketHeader::from_bytes(data)?;
    let body = &data[HEADER_SIZE..];

    let payload = fec::decode(body, header.fec)?;

    let text = match header.compression {
        CompressionMode::None => std::str::from_utf8(&payload)
            .map_err(|_| PacketError::InvalidUtf8)?
            .to_string(),
        CompressionMode::Substitution => compress::decompress(&payload)?,
        CompressionMode::Codebook => templates.decode(&payload)?.text,
    };

    let stats = SizeStats {
        packet_len: data.len(),
        body_len: payload.len(),
        text_len: text.len(),
    };

    debug!(
        packet_len = stats.packet_len,
        text_len = stats.text_len,
        fec = ?header.fec,
        "decoded packet"
    );

    Ok(DecodedPacket {
        text,
        header,
        stats,
    })
}
