//! Opaque module payload.

/// Retrieved binary module.
///
/// The loader buffers the whole payload in memory and never inspects it; the
/// bytes flow unchanged from retrieval to instantiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePayload(Vec<u8>);

impl ModulePayload {
    /// Wrap retrieved bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for ModulePayload {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}
