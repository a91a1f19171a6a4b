use serde_json::json;

use tooldesk_protocol::{JsonRpcOutput, RequestId};

use super::respond;

/// `ping` answers with an empty object.
pub(crate) fn handle_ping(id: RequestId) -> JsonRpcOutput {
    respond(id, json!({}))
}
