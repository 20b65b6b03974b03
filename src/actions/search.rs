//! SearchRecords action

use crate::filter::{translate, Translation};
use crate::observability::{Logger, Severity};
use crate::store::StoreQuery;

use super::errors::{ActionError, ActionResult};
use super::handler::Connector;
use super::request::SearchRecordsRequest;
use super::response::SearchRecordsResponse;

/// The protocol fixes the search page size at one record
pub const SEARCH_PAGE_SIZE: usize = 1;

impl Connector {
    /// Search for at most one record.
    ///
    /// The single-record invariant is enforced with one count-aware
    /// query: the store reports the total match count alongside the
    /// requested page, so no second uncapped round trip is needed.
    pub fn search_records(
        &self,
        request: SearchRecordsRequest,
    ) -> ActionResult<SearchRecordsResponse> {
        let entity = self.entity(&request.query.from)?;

        let skip = request.pagination.unwrap_or_default().skip;
        let mut query = StoreQuery::table(entity.table)
            .limit(SEARCH_PAGE_SIZE)
            .offset(skip);

        if let Some(comparison) = &request.query.query_filter {
            if let Translation::Predicate(predicate) = translate(entity, comparison) {
                query = query.filter(predicate);
            }
        }

        if let Some(attributes) = &request.query.attributes_to_select {
            let columns: Vec<String> = attributes
                .iter()
                .filter_map(|a| entity.map_field_to_column(a))
                .map(String::from)
                .collect();
            if !columns.is_empty() {
                query = query.select(columns);
            }
        }

        let page = self.store.fetch(&query).map_err(Self::map_store_error)?;

        if page.total > 1 {
            Logger::log(
                Severity::Warn,
                "multiple_records_found",
                &[
                    ("type", request.query.from.as_str()),
                    ("total", &page.total.to_string()),
                ],
            );
            return Err(ActionError::MultipleRecordsFound);
        }

        let records = page
            .rows
            .iter()
            .map(|row| self.to_protocol(entity, row))
            .collect();

        Ok(SearchRecordsResponse { records })
    }
}
