//! Internal API client: status-code policy on top of a `Transport` and an `EnvelopeCodec`.

use crate::core::{
    domain::error::{PanelError, PanelResult},
    infrastructure::{
        endpoint::Endpoint,
        envelope_codec::EnvelopeCodec,
        transport::{PanelRequest, RawResponse, Transport},
    },
};
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use std::{fmt, sync::Arc};
use tracing::{debug, warn};

pub(crate) const STATUS_OK: u16 = 200;
pub(crate) const STATUS_CREATED: u16 = 201;
pub(crate) const STATUS_NO_CONTENT: u16 = 204;
pub(crate) const STATUS_BAD_REQUEST: u16 = 400;
pub(crate) const STATUS_NOT_FOUND: u16 = 404;

/// Internal HTTP client that resources and composite operations are built on.
///
/// It translates status codes into the crate's three outcomes: a decoded value,
/// an absent resource (`None`) or a `PanelError`.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    codec: EnvelopeCodec,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, codec: EnvelopeCodec) -> Self {
        Self { transport, codec }
    }

    /// Returns the codec used for payloads and responses.
    pub fn codec(&self) -> &EnvelopeCodec {
        &self.codec
    }

    /// Sends one request without interpreting the status.
    pub async fn send(
        &self,
        method: Method,
        endpoint: Endpoint<'_>,
        body: Option<Vec<u8>>,
    ) -> PanelResult<RawResponse> {
        self.transport
            .send(PanelRequest::new(method, endpoint.path(), body))
            .await
    }

    /// Encodes `payload` and sends it with `method`.
    pub async fn send_json<B>(
        &self,
        method: Method,
        endpoint: Endpoint<'_>,
        context: &str,
        payload: &B,
    ) -> PanelResult<RawResponse>
    where
        B: Serialize + ?Sized,
    {
        let body = self.codec.encode(context, payload)?;
        self.send(method, endpoint, Some(body)).await
    }

    /// GETs a single resource.
    ///
    /// `200` decodes to `Some`, `400`/`404` mean absent (`None`), anything else
    /// is a `PanelError::Api`.
    pub async fn fetch<T>(&self, endpoint: Endpoint<'_>, context: &str) -> PanelResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let response = self.send(Method::GET, endpoint, None).await?;
        match response.status {
            STATUS_OK => self
                .codec
                .decode_item(context, &response.body)
                .map(Some),
            STATUS_BAD_REQUEST | STATUS_NOT_FOUND => {
                debug!(%endpoint, status = response.status, "{} not found", context);
                Ok(None)
            }
            _ => Err(self.unexpected(&format!("get {}", context), endpoint, &response)),
        }
    }

    /// GETs every page of a collection; only `200` is accepted for each page.
    ///
    /// The first page is requested without a `page` parameter. Further pages
    /// are requested while `meta.pagination.total_pages` says there are more.
    pub async fn list<T>(&self, endpoint: Endpoint<'_>, context: &str) -> PanelResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let base = endpoint.path();
        let mut items = Vec::new();
        let mut page: u32 = 1;
        loop {
            let path = page_path(&base, page);
            let response = self
                .transport
                .send(PanelRequest::new(Method::GET, path.as_str(), None))
                .await?;
            if response.status != STATUS_OK {
                return Err(self.failure(&format!("list {}", context), &path, &response));
            }
            let (mut batch, pagination) = self.codec.decode_page(context, &response.body)?;
            items.append(&mut batch);

            match pagination {
                Some(pagination) if page < pagination.total_pages => {
                    debug!(
                        %endpoint,
                        page,
                        total_pages = pagination.total_pages,
                        "fetching next page of {}",
                        context
                    );
                    page += 1;
                }
                _ => return Ok(items),
            }
        }
    }

    /// Performs an action whose only success is `expected`; the body is ignored.
    pub async fn action(
        &self,
        method: Method,
        endpoint: Endpoint<'_>,
        body: Option<Vec<u8>>,
        expected: u16,
        operation: &str,
        target: u64,
    ) -> PanelResult<()> {
        let response = self.send(method, endpoint, body).await?;
        if response.status != expected {
            return Err(self.failure(operation, &target.to_string(), &response));
        }
        Ok(())
    }

    /// Builds the error for a status the operation does not accept.
    pub fn failure(&self, operation: &str, target: &str, response: &RawResponse) -> PanelError {
        warn!(
            operation,
            target,
            status = response.status,
            "panel rejected request"
        );
        PanelError::Api {
            operation: operation.to_string(),
            target: target.to_string(),
            status: response.status,
            body: self.codec.excerpt(&response.body),
        }
    }

    fn unexpected(&self, operation: &str, endpoint: Endpoint<'_>, response: &RawResponse) -> PanelError {
        self.failure(operation, &endpoint.path(), response)
    }
}

fn page_path(base: &str, page: u32) -> String {
    match page {
        1 => base.to_string(),
        _ if base.contains('?') => format!("{}&page={}", base, page),
        _ => format!("{}?page={}", base, page),
    }
}
