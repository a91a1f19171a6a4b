//! The request decoder must never panic, and must only accept envelopes
//! carrying both `id` and `method`.

use proptest::prelude::*;
use serde_json::json;
use tooldesk_protocol::jsonrpc::{JsonRpcRequest, RequestId};

proptest! {
    #[test]
    fn garbage_text_never_panics(input in "\\PC{0,256}") {
        let _ = serde_json::from_str::<JsonRpcRequest>(&input);
    }

    #[test]
    fn method_and_id_survive_reencoding(method in "[a-z/]{1,32}", id in any::<i64>()) {
        let req: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": id, "method": method.clone()}))
                .expect("test: well-formed request");
        let text = serde_json::to_string(&req).expect("test: encodes");
        let again: JsonRpcRequest = serde_json::from_str(&text).expect("test: decodes");
        prop_assert_eq!(again.method, method);
        prop_assert_eq!(again.id, RequestId::Number(id));
    }

    #[test]
    fn string_ids_are_kept_verbatim(id in "[A-Za-z0-9-]{1,24}") {
        let req: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": id.clone(), "method": "ping"}))
                .expect("test: well-formed request");
        prop_assert_eq!(req.id, RequestId::String(id));
    }

    #[test]
    fn envelope_without_method_is_rejected(id in 1i64..1000) {
        let text = format!(r#"{{"jsonrpc":"2.0","id":{id},"params":{{}}}}"#);
        prop_assert!(serde_json::from_str::<JsonRpcRequest>(&text).is_err());
    }

    #[test]
    fn envelope_without_id_is_not_a_request(method in "[a-z]{2,16}") {
        let text = format!(r#"{{"jsonrpc":"2.0","method":"{method}"}}"#);
        prop_assert!(serde_json::from_str::<JsonRpcRequest>(&text).is_err());
    }
}
