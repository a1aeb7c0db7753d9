//! Edit client implementation

use std::sync::Arc;

use async_trait::async_trait;
use folio_core::FolioConfig;
use tonic::transport::{Channel, Endpoint};
use tracing::instrument;

use crate::proto::{EditRequest, EditResponse, EditServiceClient};
use crate::{Error, Result};

/// Sends one edit request and returns the raw response.
#[async_trait]
pub trait EditTransport: Send + Sync {
    /// Perform the unary `Edit` call.
    async fn edit(&self, request: EditRequest) -> Result<EditResponse>;
}

/// [`EditTransport`] over a gRPC channel.
///
/// The channel is one long-lived handle shared by every call; each call
/// works on a cheap clone of the stub.
#[derive(Debug, Clone)]
pub struct GrpcEditTransport {
    client: EditServiceClient,
}

impl GrpcEditTransport {
    /// Create a transport for `addr` (`host:port` or a full `http://` URI).
    ///
    /// The connection is established on first use. Must be called from
    /// within a Tokio runtime.
    pub fn connect_lazy(addr: &str) -> Result<Self> {
        let uri = if addr.contains("://") {
            addr.to_string()
        } else {
            format!("http://{addr}")
        };
        let endpoint = Endpoint::from_shared(uri).map_err(|source| Error::InvalidAddress {
            addr: addr.to_string(),
            source,
        })?;
        Ok(Self::from_channel(endpoint.connect_lazy()))
    }

    /// Wrap an existing channel.
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            client: EditServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl EditTransport for GrpcEditTransport {
    async fn edit(&self, request: EditRequest) -> Result<EditResponse> {
        let mut client = self.client.clone();
        let response = client.edit(request).await?;
        Ok(response.into_inner())
    }
}

/// Transforms text through the remote edit service.
#[derive(Clone)]
pub struct EditClient {
    transport: Arc<dyn EditTransport>,
}

impl std::fmt::Debug for EditClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditClient").finish_non_exhaustive()
    }
}

impl EditClient {
    /// Create a client over any transport.
    pub fn new(transport: impl EditTransport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Create a gRPC client for `addr`, connecting lazily.
    pub fn connect_lazy(addr: &str) -> Result<Self> {
        Ok(Self::new(GrpcEditTransport::connect_lazy(addr)?))
    }

    /// Create a gRPC client for the configured edit service address.
    pub fn from_config(config: &FolioConfig) -> Result<Self> {
        Self::connect_lazy(&config.edit_service_addr)
    }

    /// Send `text` to the edit service and return its suggested edit.
    ///
    /// Fails with [`Error::Rpc`] when the call fails and with
    /// [`Error::MissingSuggestedEdit`] when it succeeds without a
    /// suggestion. An empty suggestion counts as missing.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn transform(&self, text: &str) -> Result<String> {
        let request = EditRequest {
            text: text.to_string(),
        };
        let response = self.transport.edit(request).await.inspect_err(|e| {
            tracing::warn!(error = %e, "Edit service call failed");
        })?;

        if response.suggested_edit.is_empty() {
            tracing::warn!("Edit service returned no suggested edit");
            return Err(Error::MissingSuggestedEdit);
        }

        tracing::debug!(
            suggested_len = response.suggested_edit.len(),
            "Received suggested edit"
        );
        Ok(response.suggested_edit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Transport that records requests and replays a fixed outcome.
    struct MockTransport {
        outcome: fn() -> Result<EditResponse>,
        seen: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl EditTransport for MockTransport {
        async fn edit(&self, request: EditRequest) -> Result<EditResponse> {
            self.seen.lock().unwrap().push(request.text);
            (self.outcome)()
        }
    }

    fn client(outcome: fn() -> Result<EditResponse>) -> (EditClient, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let transport = MockTransport {
            outcome,
            seen: Arc::clone(&seen),
        };
        (EditClient::new(transport), seen)
    }

    #[tokio::test]
    async fn test_transform_returns_suggestion() {
        let (client, seen) = client(|| {
            Ok(EditResponse {
                suggested_edit: "the cat".to_string(),
            })
        });

        assert_eq!(client.transform("teh cat").await.unwrap(), "the cat");
        assert_eq!(*seen.lock().unwrap(), vec!["teh cat".to_string()]);
    }

    #[tokio::test]
    async fn test_transform_missing_suggestion() {
        let (client, _) = client(|| Ok(EditResponse::default()));

        let err = client.transform("teh cat").await.unwrap_err();
        assert!(matches!(err, Error::MissingSuggestedEdit));
    }

    #[tokio::test]
    async fn test_transform_propagates_rpc_error() {
        let (client, _) = client(|| Err(tonic::Status::internal("model crashed").into()));

        let err = client.transform("teh cat").await.unwrap_err();
        assert_eq!(err.code(), Some(tonic::Code::Internal));
        assert!(err.to_string().contains("model crashed"));
    }

    #[tokio::test]
    async fn test_each_call_is_independent() {
        let (client, seen) = client(|| {
            Ok(EditResponse {
                suggested_edit: "ok".to_string(),
            })
        });

        client.transform("one").await.unwrap();
        client.clone().transform("two").await.unwrap();
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_address() {
        let err = GrpcEditTransport::connect_lazy("http://bad host:1").unwrap_err();
        assert!(matches!(err, Error::InvalidAddress { .. }));
    }
}
