//! Built-in entity registry
//!
//! The catalog is fixed at compile time and read-only after initialization.
//! Alias tables are exhaustive: a spelling absent from a field's alias list
//! does not resolve, regardless of case similarity.

use super::types::{EntitySpec, FieldSpec, FieldType};

/// Fields of the Cliente entity
const CLIENTE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        column: "id",
        protocol_name: "Id",
        aliases: &["Id", "id"],
        field_type: FieldType::Uuid,
        required: false,
        createable: false,
        readable: true,
        updateable: false,
    },
    FieldSpec {
        column: "nome",
        protocol_name: "Nome",
        aliases: &["Nome", "nome"],
        field_type: FieldType::String,
        required: true,
        createable: true,
        readable: true,
        updateable: true,
    },
    FieldSpec {
        column: "cpf_cnpj",
        protocol_name: "CpfCnpj",
        aliases: &["CpfCnpj", "cpfCnpj", "cpf_cnpj"],
        field_type: FieldType::String,
        required: true,
        createable: true,
        readable: true,
        updateable: true,
    },
    FieldSpec {
        column: "telefone",
        protocol_name: "Telefone",
        aliases: &["Telefone", "telefone"],
        field_type: FieldType::String,
        required: false,
        createable: true,
        readable: true,
        updateable: true,
    },
    FieldSpec {
        column: "email",
        protocol_name: "Email",
        aliases: &["Email", "email"],
        field_type: FieldType::String,
        required: false,
        createable: true,
        readable: true,
        updateable: true,
    },
    FieldSpec {
        column: "endereco",
        protocol_name: "Endereco",
        aliases: &["Endereco", "endereco"],
        field_type: FieldType::String,
        required: false,
        createable: true,
        readable: true,
        updateable: true,
    },
    FieldSpec {
        column: "created_at",
        protocol_name: "CreatedAt",
        aliases: &["CreatedAt", "created_at"],
        field_type: FieldType::Timestamp,
        required: false,
        createable: false,
        readable: true,
        updateable: false,
    },
    FieldSpec {
        column: "updated_at",
        protocol_name: "UpdatedAt",
        aliases: &["UpdatedAt", "updated_at"],
        field_type: FieldType::Timestamp,
        required: false,
        createable: false,
        readable: true,
        updateable: false,
    },
];

/// The Cliente entity
const CLIENTE: EntitySpec = EntitySpec {
    type_name: "Cliente",
    table: "clientes",
    natural_key: "cpf_cnpj",
    contact_fields: &["telefone", "email"],
    fields: CLIENTE_FIELDS,
};

/// The full entity catalog
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entities: &'static [EntitySpec],
}

impl Catalog {
    /// Look up an entity by protocol type name
    pub fn entity(&self, type_name: &str) -> Option<&EntitySpec> {
        self.entities.iter().find(|e| e.type_name == type_name)
    }

    /// All exposed type names
    pub fn type_names(&self) -> Vec<&'static str> {
        self.entities.iter().map(|e| e.type_name).collect()
    }

    /// All entities
    pub fn entities(&self) -> &'static [EntitySpec] {
        self.entities
    }
}

static CATALOG: Catalog = Catalog {
    entities: &[CLIENTE],
};

/// The process-wide catalog
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_lookup() {
        assert!(catalog().entity("Cliente").is_some());
        assert!(catalog().entity("cliente").is_none());
        assert!(catalog().entity("Pedido").is_none());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(catalog().type_names(), vec!["Cliente"]);
    }

    #[test]
    fn test_every_alias_maps_to_its_column() {
        let entity = catalog().entity("Cliente").unwrap();

        for field in entity.fields {
            for alias in field.aliases {
                assert_eq!(
                    entity.map_field_to_column(alias),
                    Some(field.column),
                    "alias {} should map to {}",
                    alias,
                    field.column
                );
            }
        }
    }

    #[test]
    fn test_unknown_field_maps_to_none() {
        let entity = catalog().entity("Cliente").unwrap();

        assert_eq!(entity.map_field_to_column("Saldo"), None);
        assert_eq!(entity.map_field_to_column("NOME"), None);
        assert_eq!(entity.map_field_to_column(""), None);
    }

    #[test]
    fn test_alias_tables_do_not_overlap() {
        let entity = catalog().entity("Cliente").unwrap();

        let mut seen = std::collections::HashSet::new();
        for field in entity.fields {
            for alias in field.aliases {
                assert!(seen.insert(*alias), "alias {} claimed twice", alias);
            }
        }
    }

    #[test]
    fn test_natural_key_and_contacts_exist() {
        let entity = catalog().entity("Cliente").unwrap();

        assert!(entity.field_by_column(entity.natural_key).is_some());
        for column in entity.contact_fields {
            assert!(entity.field_by_column(column).is_some());
        }
    }
}
