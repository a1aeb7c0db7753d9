//! Wire types and stub for `edit.EditService`.
//!
//! Mirrors this protobuf definition:
//!
//! ```proto
//! syntax = "proto3";
//! package edit;
//!
//! service EditService {
//!   rpc Edit (EditRequest) returns (EditResponse);
//! }
//!
//! message EditRequest  { string text = 1; }
//! message EditResponse { string suggested_edit = 1; }
//! ```

use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;

/// Fully qualified service name.
pub const SERVICE_NAME: &str = "edit.EditService";

/// Request carrying the text to edit.
#[derive(Clone, PartialEq, prost::Message)]
pub struct EditRequest {
    /// Input text fragment.
    #[prost(string, tag = "1")]
    pub text: String,
}

/// Response carrying the suggested replacement.
///
/// proto3 has no presence for plain strings: an absent field decodes as
/// the empty string.
#[derive(Clone, PartialEq, prost::Message)]
pub struct EditResponse {
    /// Suggested replacement text.
    #[prost(string, tag = "1")]
    pub suggested_edit: String,
}

/// Unary client stub for `edit.EditService`.
#[derive(Debug, Clone)]
pub struct EditServiceClient {
    inner: tonic::client::Grpc<Channel>,
}

impl EditServiceClient {
    /// Wrap an existing channel.
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    /// Call `Edit`.
    pub async fn edit(
        &mut self,
        request: impl tonic::IntoRequest<EditRequest>,
    ) -> std::result::Result<tonic::Response<EditResponse>, tonic::Status> {
        self.inner
            .ready()
            .await
            .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {e}")))?;
        let codec = tonic::codec::ProstCodec::default();
        let path = PathAndQuery::from_static("/edit.EditService/Edit");
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(tonic::GrpcMethod::new(SERVICE_NAME, "Edit"));
        self.inner.unary(req, path, codec).await
    }
}
