//! Verify action

use crate::record::{project_known, NormalizeError};
use crate::store::{StorePredicate, StoreQuery};

use super::errors::{ActionError, ActionResult};
use super::handler::Connector;
use super::request::VerifyRequest;
use super::response::VerifyResponse;

/// Matches beyond this add nothing to a boolean validity answer
const VERIFY_MATCH_LIMIT: usize = 10;

impl Connector {
    /// Check whether any stored record matches the given identifying
    /// fields, trying identifier, natural key, then contact fields in
    /// that order.
    pub fn verify(&self, request: VerifyRequest) -> ActionResult<VerifyResponse> {
        let entity = self.entity(&request.type_name)?;
        let payload = request
            .data
            .as_object()
            .ok_or_else(|| ActionError::from(NormalizeError::NotAnObject))?;
        let known = project_known(entity, payload);

        let mut lookup_columns: Vec<&str> = vec!["id", entity.natural_key];
        lookup_columns.extend(entity.contact_fields);

        for column in lookup_columns {
            let value = match known.get(column) {
                Some(v) => v.clone(),
                None => continue,
            };

            let page = self
                .store
                .fetch(
                    &StoreQuery::table(entity.table)
                        .filter(StorePredicate::Eq {
                            column: column.to_string(),
                            value,
                        })
                        .limit(VERIFY_MATCH_LIMIT),
                )
                .map_err(Self::map_store_error)?;

            if !page.rows.is_empty() {
                return Ok(VerifyResponse {
                    valid: true,
                    matches: page
                        .rows
                        .iter()
                        .map(|row| self.to_protocol(entity, row))
                        .collect(),
                });
            }
        }

        Ok(VerifyResponse {
            valid: false,
            matches: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::request::CreateRecordRequest;
    use serde_json::json;

    fn connector_with_record() -> (Connector, String) {
        let connector = Connector::in_memory();
        let response = connector
            .create_record(
                CreateRecordRequest {
                    type_name: "Cliente".to_string(),
                    idempotency_key: None,
                    record_id: None,
                    data: json!({
                        "Nome": "Ana",
                        "CpfCnpj": "11111111111",
                        "Telefone": "11999990000",
                        "Email": "ana@example.com"
                    }),
                },
                None,
            )
            .unwrap();
        let id = response["recordId"].as_str().unwrap().to_string();
        (connector, id)
    }

    fn verify_request(data: serde_json::Value) -> VerifyRequest {
        VerifyRequest {
            type_name: "Cliente".to_string(),
            data,
        }
    }

    #[test]
    fn test_verify_by_identifier() {
        let (connector, id) = connector_with_record();

        let response = connector.verify(verify_request(json!({"Id": id}))).unwrap();
        assert!(response.valid);
        assert_eq!(response.matches.len(), 1);
        assert_eq!(response.matches[0]["Nome"], "Ana");
    }

    #[test]
    fn test_verify_by_natural_key() {
        let (connector, _) = connector_with_record();

        let response = connector
            .verify(verify_request(json!({"CpfCnpj": "111.111.111-11"})))
            .unwrap();
        assert!(response.valid);
    }

    #[test]
    fn test_verify_by_contact_field() {
        let (connector, _) = connector_with_record();

        let response = connector
            .verify(verify_request(json!({"Telefone": "11999990000"})))
            .unwrap();
        assert!(response.valid);

        let response = connector
            .verify(verify_request(json!({"Email": "ana@example.com"})))
            .unwrap();
        assert!(response.valid);
    }

    #[test]
    fn test_verify_no_match() {
        let (connector, _) = connector_with_record();

        let response = connector
            .verify(verify_request(json!({"CpfCnpj": "99999999999"})))
            .unwrap();
        assert!(!response.valid);
        assert!(response.matches.is_empty());
    }

    #[test]
    fn test_verify_identifier_outranks_contact_field() {
        let (connector, id) = connector_with_record();

        // telefone belongs to nobody, id matches: identifier wins
        let response = connector
            .verify(verify_request(json!({"Id": id, "Telefone": "00000000000"})))
            .unwrap();
        assert!(response.valid);
    }

    #[test]
    fn test_verify_unknown_type_rejected() {
        let (connector, _) = connector_with_record();

        let result = connector.verify(VerifyRequest {
            type_name: "Pedido".to_string(),
            data: json!({}),
        });
        assert!(matches!(result, Err(ActionError::UnsupportedType(_))));
    }

    #[test]
    fn test_verify_with_no_identifying_fields() {
        let (connector, _) = connector_with_record();

        let response = connector
            .verify(verify_request(json!({"Endereco": "Rua A"})))
            .unwrap();
        assert!(!response.valid);
    }

    #[test]
    fn test_verify_matches_in_protocol_casing() {
        let (connector, _) = connector_with_record();

        let response = connector
            .verify(verify_request(json!({"CpfCnpj": "11111111111"})))
            .unwrap();
        assert!(response.matches[0].get("CpfCnpj").is_some());
        assert!(response.matches[0].get("cpf_cnpj").is_none());
    }
}
