//! Template table collaborator interface (interface only)
//!
//! Codebook compression delegates to an external phrase/template table. The
//! framer treats it as an opaque compression backend: it never inspects the
//! bytes, only routes them through the packet pipeline.

use crate::error::PacketError;

/// A catalogue entry describing one template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    /// Template identifier carried on the wire
    pub id: u8,
    /// Human-readable pattern, e.g. "ETA {} minutes"
    pub pattern: String,
    /// Number of parameters the pattern expects
    pub param_count: u8,
}

/// A message recovered from template-encoded bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMessage {
    /// Template identifier
    pub template_id: u8,
    /// Rendered message text
    pub text: String,
    /// Parameters substituted into the pattern
    pub params: Vec<String>,
}

/// Trait for the external template lookup table
pub trait TemplateCodec {
    /// Encode a template id plus parameters into body bytes
    fn encode(&self, template_id: u8, params: &[String]) -> Result<Vec<u8>, PacketError>;

    /// Decode body bytes back into the rendered message
    fn decode(&self, bytes: &[u8]) -> Result<TemplateMessage, PacketError>;

    /// Enumerate the available templates
    fn catalogue(&self) -> Vec<TemplateInfo>;
}

/// Backend used when no template table is wired in; every codebook-mode
/// operation fails with `MissingTemplate`
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTemplates;

impl TemplateCodec for NoTemplates {
    fn encode(&self, _template_id: u8, _params: &[String]) -> Result<Vec<u8>, PacketError> {
        Err(PacketError::MissingTemplate)
    }

    fn decode(&self, _bytes: &[u8]) -> Result<TemplateMessage, PacketError> {
        Err(PacketError::MissingTemplate)
    }

    fn catalogue(&self) -> Vec<TemplateInfo> {
        Vec::new()
    }
}
