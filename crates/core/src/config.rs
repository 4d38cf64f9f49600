use cindex_api::{CursorKind, DiagnosticSeverity, KindGroup};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::kinds::Registered;

/// One extension value: a code the native library reports that the builtin
/// table does not know about yet.
///
/// `group` is the enumeration's class for the value (a [`KindGroup`] for
/// cursor kinds). Left out, the class follows from where libclang places
/// the code.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct KindEntry<C = ()> {
    pub code: i32,
    pub name: String,
    #[serde(default = "Option::default", skip_serializing_if = "Option::<C>::is_none")]
    pub group: Option<C>,
}

pub type CursorKindEntry = KindEntry<Option<KindGroup>>;

impl<C> KindEntry<C> {
    pub fn new(code: i32, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
            group: None,
        }
    }

    pub fn with_group(code: i32, name: impl Into<String>, group: C) -> Self {
        Self {
            code,
            name: name.into(),
            group: Some(group),
        }
    }
}

/// Extension values to add on top of the builtin tables, usually loaded from
/// a JSON file shipped alongside a newer libclang.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct KindTable {
    #[serde(default)]
    pub cursor_kinds: Vec<CursorKindEntry>,
    #[serde(default)]
    pub diagnostic_severities: Vec<KindEntry>,
}

/// Values registered by [`KindTable::apply`].
#[derive(Debug, Clone, Default)]
pub struct AppliedKinds {
    pub cursor_kinds: Vec<&'static CursorKind>,
    pub diagnostic_severities: Vec<&'static DiagnosticSeverity>,
}

impl KindTable {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let table = Self::from_json_str(&content)?;
        info!(
            path = %path.as_ref().display(),
            cursor_kinds = table.cursor_kinds.len(),
            diagnostic_severities = table.diagnostic_severities.len(),
            "Loaded kind table"
        );
        Ok(table)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON schema describing the kind table format.
    pub fn schema() -> schemars::Schema {
        schemars::schema_for!(KindTable)
    }

    pub fn is_empty(&self) -> bool {
        self.cursor_kinds.is_empty() && self.diagnostic_severities.is_empty()
    }

    /// Register every entry into the process-wide registries.
    ///
    /// The whole table is checked against both registries before anything is
    /// inserted, with writes to both held off meanwhile, so a rejected table
    /// registers nothing.
    pub fn apply(&self) -> Result<AppliedKinds> {
        let cursor_registry = CursorKind::registry();
        let severity_registry = DiagnosticSeverity::registry();
        let _cursor_writes = cursor_registry.lock_writes();
        let _severity_writes = severity_registry.lock_writes();

        cursor_registry.check_entries(&self.cursor_kinds)?;
        severity_registry.check_entries(&self.diagnostic_severities)?;

        Ok(AppliedKinds {
            cursor_kinds: cursor_registry.insert_entries(&self.cursor_kinds)?,
            diagnostic_severities: severity_registry.insert_entries(&self.diagnostic_severities)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CindexError;

    #[test]
    fn test_group_is_optional() {
        let table = KindTable::from_json_str(
            r#"{ "cursor_kinds": [
                { "code": 146, "name": "OBJC_SELF_EXPR", "group": "expression" },
                { "code": 700, "name": "UNPLACED" }
            ] }"#,
        )
        .unwrap();
        assert_eq!(
            table.cursor_kinds,
            vec![
                KindEntry::with_group(146, "OBJC_SELF_EXPR", Some(KindGroup::Expression)),
                KindEntry::new(700, "UNPLACED"),
            ]
        );
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let table = KindTable::from_json_str(r#"{ "cursor_kinds": [] }"#).unwrap();
        assert!(table.is_empty());
        assert_eq!(table, KindTable::default());
    }

    #[test]
    fn test_malformed_table_is_json_error() {
        let err = KindTable::from_json_str(r#"{ "cursor_kinds": [{ "code": "x" }] }"#).unwrap_err();
        assert!(matches!(err, CindexError::Json(_)));
    }

    #[test]
    fn test_schema_lists_sections() {
        let schema = serde_json::to_value(KindTable::schema()).unwrap();
        let properties = schema.get("properties").unwrap();
        assert!(properties.get("cursor_kinds").is_some());
        assert!(properties.get("diagnostic_severities").is_some());
    }
}
