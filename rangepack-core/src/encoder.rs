//! Packet encoding
//!
//! Pipeline: compress the text, optionally Reed-Solomon-protect the body,
//! then prepend the two-byte header. The channel ceiling is enforced before
//! any packet leaves this module.

use crate::compress;
use crate::constants::{PacketFlags, HEADER_SIZE, MAX_PACKET_SIZE};
use crate::error::PacketError;
use crate::fec::{self, FecLevel};
use crate::template::TemplateCodec;
use crate::types::{CompressionMode, PacketHeader};
use tracing::debug;

/// Encode text with the given compression mode and FEC level
///
/// Convenience wrapper for the common path; codebook mode needs the extra
/// knobs on [`PacketBuilder`].
pub fn encode_packet(
    text: &str,
    compression: CompressionMode,
    fec: FecLevel,
) -> Result<Vec<u8>, PacketError> {
    PacketBuilder::new()
        .compression(compression)
        .fec(fec)
        .build(text)
}

/// Builder for assembling packets with various options
pub struct PacketBuilder<'a> {
    compression: CompressionMode,
    fec: FecLevel,
    flags: u8,
    template: Option<(u8, Vec<String>)>,
    templates: Option<&'a dyn TemplateCodec>,
}

impl<'a> PacketBuilder<'a> {
    /// Create a builder with substitution compression and no FEC
    pub fn new() -> Self {
        Self {
            compression: CompressionMode::Substitution,
            fec: FecLevel::None,
            flags: PacketFlags::NONE,
            template: None,
            templates: None,
        }
    }

    /// Set the compression mode
    pub fn compression(mut self, mode: CompressionMode) -> Self {
        self.compression = mode;
        self
    }

    /// Set the FEC level
    pub fn fec(mut self, level: FecLevel) -> Self {
        self.fec = level;
        self
    }

    /// Set the raw 4-bit flag field
    pub fn flags(mut self, bits: u8) -> Self {
        self.flags = bits;
        self
    }

    /// Set the fragment marker flag
    pub fn fragment(mut self) -> Self {
        self.flags |= PacketFlags::FRAGMENT;
        self
    }

    /// Select a template and its parameters for codebook mode
    pub fn template(mut self, template_id: u8, params: Vec<String>) -> Self {
        self.template = Some((template_id, params));
        self
    }

    /// Wire in the external template backend for codebook mode
    pub fn templates(mut self, codec: &'a dyn TemplateCodec) -> Self {
        self.templates = Some(codec);
        self
    }

    /// Build and encode the packet
    pub fn build(self, text: &str) -> Result<Vec<u8>, PacketError> {
        if text.is_empty() {
            return Err(PacketError::EmptyInput);
        }

        let header = PacketHeader::new(self.compression, self.fec, PacketFlags::new(self.flags));
        header.validate()?;

        let payload = match self.compression {
            CompressionMode::None => text.as_bytes().to_vec(),
            CompressionMode::Substitution => compress::compress(text),
            CompressionMode::Codebook => {
                let codec = self.templates.ok_or(PacketError::MissingTemplate)?;
                let (id, params) = self.template.as_ref().ok_or(PacketError::MissingTemplate)?;
                codec.encode(*id, params)?
            }
        };

        let body = fec::encode(&payload, self.fec)?;

        let total = HEADER_SIZE + body.len();
        if total > MAX_PACKET_SIZE {
            return Err(PacketError::PacketTooLarge {
                len: total,
                max: MAX_PACKET_SIZE,
            });
        }

        let mut packet = Vec::with_capacity(total);
        packet.extend_from_slice(&header.to_bytes());
        packet.extend_from_slice(&body);

        let saved = 100.0 * (1.0 - packet.len() as f64 / text.len() as f64);
        debug!(
            raw_len = text.len(),
            packet_len = packet.len(),
            saved_percent = saved,
            "encoded packet"
        );
        Ok(packet)
    }
}

impl Default for PacketBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::template::NoTemplates;

    #[test]
    fn test_encode_header_bytes() {
        let packet = encode_packet("Hello", CompressionMode::None, FecLevel::None).unwrap();
        assert_eq!(packet[0], 0x10);
        assert_eq!(packet[1], 0x00);
        assert_eq!(&packet[2..], b"Hello");
    }

    #[test]
    fn test_encode_appends_parity() {
        let plain = encode_packet("status check", CompressionMode::None, FecLevel::None).unwrap();
        let protected =
            encode_packet("status check", CompressionMode::None, FecLevel::Low).unwrap();
        assert_eq!(protected.len(), plain.len() + 16);
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = encode_packet("", CompressionMode::Substitution, FecLevel::None).unwrap_err();
        assert_eq!(err, PacketError::EmptyInput);
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_flags_width_enforced() {
        let err = PacketBuilder::new().flags(0x1F).build("hi").unwrap_err();
        assert_eq!(err, PacketError::InvalidFlags(0x1F));
    }

    #[test]
    fn test_capacity_ceiling() {
        // 236 raw bytes + 2-byte header exceeds 237
        let text: String = std::iter::repeat('Q').take(236).collect();
        let err = encode_packet(&text, CompressionMode::None, FecLevel::None).unwrap_err();
        assert!(matches!(err, PacketError::PacketTooLarge { len: 238, .. }));
        assert_eq!(err.kind(), ErrorKind::Capacity);

        let text: String = std::iter::repeat('Q').take(235).collect();
        let packet = encode_packet(&text, CompressionMode::None, FecLevel::None).unwrap();
        assert_eq!(packet.len(), 237);
    }

    #[test]
    fn test_codebook_without_backend() {
        let err = PacketBuilder::new()
            .compression(CompressionMode::Codebook)
            .template(3, vec!["10".to_string()])
            .build("ETA 10 minutes")
            .unwrap_err();
        assert_eq!(err, PacketError::MissingTemplate);
    }

    #[test]
    fn test_codebook_without_template_selection() {
        let backend = NoTemplates;
        let err = PacketBuilder::new()
            .compression(CompressionMode::Codebook)
            .templates(&backend)
            .build("ETA 10 minutes")
            .unwrap_err();
        assert_eq!(err, PacketError::MissingTemplate);
    }

    #[test]
    fn test_fragment_flag_set() {
        let packet = PacketBuilder::new().fragment().build("part one").unwrap();
        assert_eq!(packet[1] & 0x0F, PacketFlags::FRAGMENT);
    }
}
