//! Encoding and decoding of the panel's JSON envelopes.
//!
//! Single resources arrive as `{"object": "...", "attributes": {...}}`,
//! collections as `{"object": "list", "data": [{"attributes": {...}}, ...]}`,
//! top-level collections with an extra `meta.pagination` block.

use crate::core::domain::{
    error::{PanelError, PanelResult},
    model::client_config::DEFAULT_ERROR_EXCERPT_LEN,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// A single-resource envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub attributes: T,
}

/// A collection envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope<T> {
    pub data: Vec<Envelope<T>>,
    /// Absent on relationship lists.
    #[serde(default)]
    pub meta: Option<ListMeta>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListMeta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Position of one page within a paginated collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub(crate) struct Pagination {
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// Codec owned by a client; separate clients may carry different policies.
#[derive(Debug, Clone)]
pub struct EnvelopeCodec {
    excerpt_limit: usize,
}

impl EnvelopeCodec {
    /// Creates a codec that keeps at most `excerpt_limit` bytes of a body in errors.
    pub fn new(excerpt_limit: usize) -> Self {
        Self { excerpt_limit }
    }

    /// Decodes `{"attributes": {...}}` into `T`.
    ///
    /// # Errors
    /// Returns `PanelError::Decode` for malformed JSON or a missing `attributes` key.
    pub fn decode_item<T>(&self, context: &str, bytes: &[u8]) -> PanelResult<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice::<Envelope<T>>(bytes)
            .map(|envelope| envelope.attributes)
            .map_err(|e| self.decode_error(context, bytes, e))
    }

    /// Decodes `{"data": [{"attributes": {...}}, ...]}` into a `Vec<T>`, keeping order.
    ///
    /// # Errors
    /// Returns `PanelError::Decode` for malformed JSON or a missing `data` array.
    pub fn decode_list<T>(&self, context: &str, bytes: &[u8]) -> PanelResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.decode_page(context, bytes).map(|(items, _)| items)
    }

    /// Decodes one page of a collection together with its pagination block, if any.
    pub(crate) fn decode_page<T>(
        &self,
        context: &str,
        bytes: &[u8],
    ) -> PanelResult<(Vec<T>, Option<Pagination>)>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice::<ListEnvelope<T>>(bytes)
            .map(|list| {
                let pagination = list.meta.and_then(|meta| meta.pagination);
                let items = list.data.into_iter().map(|item| item.attributes).collect();
                (items, pagination)
            })
            .map_err(|e| self.decode_error(context, bytes, e))
    }

    /// Serializes a write payload.
    ///
    /// # Errors
    /// Returns `PanelError::Decode` if the payload cannot be represented as JSON.
    pub fn encode<B>(&self, context: &str, payload: &B) -> PanelResult<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        serde_json::to_vec(payload).map_err(|e| PanelError::Decode {
            context: context.to_string(),
            message: format!("cannot encode payload: {}", e),
        })
    }

    /// Returns the body as lossy UTF-8, cut to the configured limit on a char boundary.
    #[must_use]
    pub fn excerpt(&self, bytes: &[u8]) -> String {
        let text = String::from_utf8_lossy(bytes);
        if text.len() <= self.excerpt_limit {
            return text.into_owned();
        }
        let mut end = self.excerpt_limit;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }

    fn decode_error(&self, context: &str, bytes: &[u8], error: serde_json::Error) -> PanelError {
        PanelError::Decode {
            context: context.to_string(),
            message: format!("{} (body: {})", error, self.excerpt(bytes)),
        }
    }
}

impl Default for EnvelopeCodec {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_EXCERPT_LEN)
    }
}
