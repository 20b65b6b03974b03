//! CreateRecord action

use serde_json::{json, Value};

use crate::observability::{Logger, Severity};
use crate::record::normalize_for_create;

use super::errors::ActionResult;
use super::handler::{effective_idempotency_key, Connector};
use super::request::CreateRecordRequest;

impl Connector {
    /// Create one record.
    ///
    /// An idempotency replay short-circuits before payload validation and
    /// returns the cached response verbatim, with no store mutation.
    pub fn create_record(
        &self,
        request: CreateRecordRequest,
        header_key: Option<String>,
    ) -> ActionResult<Value> {
        let key = effective_idempotency_key(request.idempotency_key.clone(), header_key);
        if let Some(cached) = self.replay(key.as_deref()) {
            return Ok(cached);
        }

        let entity = self.entity(&request.type_name)?;
        let record = normalize_for_create(entity, request.record_id.as_deref(), &request.data)?;

        let stored = self
            .store
            .insert(entity.table, record)
            .map_err(Self::map_store_error)?;

        let record_id = stored
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        let response = json!({ "recordId": record_id });
        self.remember(key.as_deref(), &response);

        Logger::log(
            Severity::Info,
            "record_created",
            &[("type", request.type_name.as_str()), ("record_id", &record_id)],
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::errors::ActionError;
    use crate::store::{RecordStore, StoreQuery};
    use serde_json::json;
    use uuid::Uuid;

    fn create_request(data: Value) -> CreateRecordRequest {
        CreateRecordRequest {
            type_name: "Cliente".to_string(),
            idempotency_key: None,
            record_id: None,
            data,
        }
    }

    #[test]
    fn test_create_returns_record_id() {
        let connector = Connector::in_memory();

        let response = connector
            .create_record(
                create_request(json!({"Nome": "Ana", "CpfCnpj": "11111111111"})),
                None,
            )
            .unwrap();

        let record_id = response["recordId"].as_str().unwrap();
        assert!(Uuid::parse_str(record_id).is_ok());
    }

    #[test]
    fn test_create_honors_caller_record_id() {
        let connector = Connector::in_memory();
        let id = Uuid::new_v4().to_string();

        let mut request = create_request(json!({"Nome": "Ana", "CpfCnpj": "11111111111"}));
        request.record_id = Some(id.clone());

        let response = connector.create_record(request, None).unwrap();
        assert_eq!(response["recordId"], json!(id));
    }

    #[test]
    fn test_create_rejects_unknown_type() {
        let connector = Connector::in_memory();

        let mut request = create_request(json!({"Nome": "Ana"}));
        request.type_name = "Pedido".to_string();

        assert!(matches!(
            connector.create_record(request, None),
            Err(ActionError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_create_rejects_missing_identity_fields() {
        let connector = Connector::in_memory();

        let result = connector.create_record(create_request(json!({"Nome": "Ana"})), None);
        assert!(matches!(result, Err(ActionError::Validation(_))));
    }

    #[test]
    fn test_validation_failure_mutates_nothing() {
        let connector = Connector::in_memory();

        let _ = connector.create_record(create_request(json!({"Nome": "Ana"})), None);

        let page = connector
            .store
            .fetch(&StoreQuery::table("clientes").limit(10))
            .unwrap();
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_same_key_creates_once_and_replays_response() {
        let connector = Connector::in_memory();

        let mut first = create_request(json!({"Nome": "Ana", "CpfCnpj": "11111111111"}));
        first.idempotency_key = Some("k-1".to_string());
        let mut second = first.clone();
        second.idempotency_key = Some("k-1".to_string());

        let response_a = connector.create_record(first, None).unwrap();
        let response_b = connector.create_record(second, None).unwrap();

        assert_eq!(response_a, response_b);

        let page = connector
            .store
            .fetch(&StoreQuery::table("clientes").limit(10))
            .unwrap();
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_distinct_keys_create_two_records() {
        let connector = Connector::in_memory();

        let mut first = create_request(json!({"Nome": "Ana", "CpfCnpj": "11111111111"}));
        first.idempotency_key = Some("k-1".to_string());
        let mut second = create_request(json!({"Nome": "Ana", "CpfCnpj": "11111111111"}));
        second.idempotency_key = Some("k-2".to_string());

        let response_a = connector.create_record(first, None).unwrap();
        let response_b = connector.create_record(second, None).unwrap();
        assert_ne!(response_a, response_b);

        let page = connector
            .store
            .fetch(&StoreQuery::table("clientes").limit(10))
            .unwrap();
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_header_key_used_when_body_key_absent() {
        let connector = Connector::in_memory();

        let request = create_request(json!({"Nome": "Ana", "CpfCnpj": "11111111111"}));
        let replayed = request.clone();

        let response_a = connector
            .create_record(request, Some("hdr-1".to_string()))
            .unwrap();
        let response_b = connector
            .create_record(replayed, Some("hdr-1".to_string()))
            .unwrap();

        assert_eq!(response_a, response_b);
    }

    #[test]
    fn test_replay_short_circuits_validation() {
        let connector = Connector::in_memory();

        let mut valid = create_request(json!({"Nome": "Ana", "CpfCnpj": "11111111111"}));
        valid.idempotency_key = Some("k-1".to_string());
        let first = connector.create_record(valid, None).unwrap();

        // retry arrives with a broken payload but the same key
        let mut broken = create_request(json!({}));
        broken.idempotency_key = Some("k-1".to_string());
        let second = connector.create_record(broken, None).unwrap();

        assert_eq!(first, second);
    }
}
