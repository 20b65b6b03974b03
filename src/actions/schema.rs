//! GetTypeNames / GetTypeDefinitions actions

use super::errors::ActionResult;
use super::handler::Connector;
use super::request::GetTypeDefinitionsRequest;
use super::response::{TypeDefinitionError, TypeDefinitionsResponse, TypeNamesResponse};

impl Connector {
    /// List the type names the connector exposes
    pub fn get_type_names(&self) -> TypeNamesResponse {
        TypeNamesResponse {
            type_names: self
                .catalog
                .type_names()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    /// Resolve type declarations.
    ///
    /// Partial success: unknown names produce per-type error entries
    /// alongside whatever resolved, never an all-or-nothing failure.
    pub fn get_type_definitions(
        &self,
        request: GetTypeDefinitionsRequest,
    ) -> ActionResult<TypeDefinitionsResponse> {
        let names: Vec<String> = match request.type_names {
            Some(names) => names,
            None => self
                .catalog
                .type_names()
                .into_iter()
                .map(String::from)
                .collect(),
        };

        let mut declarations = Vec::new();
        let mut errors = Vec::new();

        for name in names {
            match self.catalog.entity(&name) {
                Some(entity) => declarations.push(entity.declaration()),
                None => errors.push(TypeDefinitionError {
                    error: format!("Unsupported type: {}", name),
                    type_name: name,
                }),
            }
        }

        Ok(TypeDefinitionsResponse {
            declarations,
            errors: if errors.is_empty() { None } else { Some(errors) },
        })
    }
}
