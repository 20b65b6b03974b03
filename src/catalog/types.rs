//! Catalog type definitions
//!
//! Supported store types:
//! - string: UTF-8 string
//! - timestamp: RFC 3339 UTC timestamp
//! - uuid: UUID v4 identifier

use serde::Serialize;

/// Store-level field types exposed through type declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// RFC 3339 UTC timestamp
    Timestamp,
    /// UUID v4 identifier
    Uuid,
}

impl FieldType {
    /// Returns the type name for declarations and error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Timestamp => "timestamp",
            FieldType::Uuid => "uuid",
        }
    }
}

/// One logical field of an entity: its storage column, the protocol names
/// that resolve to it, and its capability flags.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Canonical storage column (snake_case)
    pub column: &'static str,

    /// Primary protocol name (PascalCase), used when rendering records
    /// back in protocol casing
    pub protocol_name: &'static str,

    /// Every accepted spelling, including `protocol_name` and `column`
    pub aliases: &'static [&'static str],

    /// Store type
    pub field_type: FieldType,

    /// Whether CreateRecord must reject payloads lacking this field
    pub required: bool,

    /// Capability flags surfaced in type declarations
    pub createable: bool,
    pub readable: bool,
    pub updateable: bool,
}

impl FieldSpec {
    /// Whether `name` is a recognized spelling of this field
    pub fn matches_name(&self, name: &str) -> bool {
        self.aliases.iter().any(|a| *a == name)
    }
}

/// One entity exposed by the connector
#[derive(Debug, Clone, Copy)]
pub struct EntitySpec {
    /// Protocol type name ("Cliente")
    pub type_name: &'static str,

    /// Backing store table
    pub table: &'static str,

    /// Column acting as the natural key for patch/verify fallback
    pub natural_key: &'static str,

    /// Columns usable as contact-field lookups in Verify
    pub contact_fields: &'static [&'static str],

    /// Exhaustive field list
    pub fields: &'static [FieldSpec],
}

impl EntitySpec {
    /// Map a protocol field name (any recognized alias) to its field spec.
    ///
    /// Returns `None` for unrecognized names; callers must treat `None`
    /// as "ignore this clause/column", never as an error.
    pub fn map_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.matches_name(name))
    }

    /// Map a protocol field name to its storage column
    pub fn map_field_to_column(&self, name: &str) -> Option<&'static str> {
        self.map_field(name).map(|f| f.column)
    }

    /// Look up a field by its storage column
    pub fn field_by_column(&self, column: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.column == column)
    }

    /// Columns that CreateRecord requires after normalization
    pub fn required_columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.column)
    }

    /// Build the declaration returned by GetTypeDefinitions
    pub fn declaration(&self) -> TypeDeclaration {
        TypeDeclaration {
            name: self.type_name.to_string(),
            fields: self
                .fields
                .iter()
                .map(|f| FieldDeclaration {
                    name: f.protocol_name.to_string(),
                    field_type: f.field_type,
                    required: f.required,
                    createable: f.createable,
                    readable: f.readable,
                    updateable: f.updateable,
                })
                .collect(),
        }
    }
}

/// Declarative field description returned by GetTypeDefinitions
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    pub createable: bool,
    pub readable: bool,
    pub updateable: bool,
}

/// Declarative entity description returned by GetTypeDefinitions
#[derive(Debug, Clone, Serialize)]
pub struct TypeDeclaration {
    pub name: String,
    pub fields: Vec<FieldDeclaration>,
}
