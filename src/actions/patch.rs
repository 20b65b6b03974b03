//! PatchRecord action

use serde_json::{json, Value};
use uuid::Uuid;

use crate::catalog::EntitySpec;
use crate::observability::{Logger, Severity};
use crate::record::{normalize_for_patch, project_known, NormalizeError};
use crate::store::{StorePredicate, StoreQuery};

use super::errors::{ActionError, ActionResult};
use super::handler::{effective_idempotency_key, Connector};
use super::request::PatchRecordRequest;

impl Connector {
    /// Partially update one record.
    ///
    /// Identifier resolution: explicit `recordId` first, then the
    /// entity's natural key taken from the payload. A malformed
    /// `recordId` is a 400 (not a store round trip); an identifier that
    /// matches nothing is a 404 and mutates nothing.
    pub fn patch_record(
        &self,
        request: PatchRecordRequest,
        header_key: Option<String>,
    ) -> ActionResult<Value> {
        let key = effective_idempotency_key(request.idempotency_key.clone(), header_key);
        if let Some(cached) = self.replay(key.as_deref()) {
            return Ok(cached);
        }

        let entity = self.entity(&request.type_name)?;
        let predicate = self.resolve_identifier(entity, &request)?;

        let page = self
            .store
            .fetch(
                &StoreQuery::table(entity.table)
                    .filter(predicate)
                    .limit(1),
            )
            .map_err(Self::map_store_error)?;

        if page.total > 1 {
            return Err(ActionError::MultipleRecordsFound);
        }
        let existing = page.rows.first().ok_or(ActionError::NotFound)?;
        let id = existing
            .get("id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ActionError::Store("record missing identifier".to_string()))?
            .to_string();

        let changes = normalize_for_patch(entity, &request.data)?;
        self.store
            .update(entity.table, &id, changes)
            .map_err(Self::map_store_error)?;

        let response = json!({ "success": true });
        self.remember(key.as_deref(), &response);

        Logger::log(
            Severity::Info,
            "record_patched",
            &[("type", request.type_name.as_str()), ("record_id", &id)],
        );

        Ok(response)
    }

    fn resolve_identifier(
        &self,
        entity: &EntitySpec,
        request: &PatchRecordRequest,
    ) -> ActionResult<StorePredicate> {
        if let Some(record_id) = &request.record_id {
            if Uuid::parse_str(record_id).is_err() {
                return Err(ActionError::InvalidRecordId(record_id.clone()));
            }
            return Ok(StorePredicate::Eq {
                column: "id".to_string(),
                value: Value::String(record_id.clone()),
            });
        }

        let payload = request
            .data
            .as_object()
            .ok_or_else(|| ActionError::from(NormalizeError::NotAnObject))?;
        let known = project_known(entity, payload);

        match known.get(entity.natural_key) {
            Some(value) => Ok(StorePredicate::Eq {
                column: entity.natural_key.to_string(),
                value: value.clone(),
            }),
            None => Err(ActionError::MissingIdentifier),
        }
    }
}
