use chrono::{DateTime, Utc};
use roster_query::{FieldRegistry, Number, Predicate, SortRule, Sortable, Timestamp, Value};
use serde::{Deserialize, Serialize};

use crate::entity::{require, Entity, FilterSet, NoPayload};
use crate::error::ListError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

impl Sortable for Role {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Number(Number::I64(self.id)),
            "name" => Value::String(&self.name),
            "isDefault" => Value::Bool(self.is_default),
            "createdAt" => Value::Timestamp(self.created_at.into()),
            _ => Value::None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleFilters {
    pub name: Option<String>,
}

impl FilterSet for RoleFilters {
    fn predicates(&self) -> Vec<Option<Predicate>> {
        vec![Predicate::contains_if("name", self.name.as_deref())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleDraft {
    pub name: String,
}

impl RoleDraft {
    pub fn new(name: impl Into<String>) -> Self {
        RoleDraft { name: name.into() }
    }
}

impl Entity for Role {
    type Filters = RoleFilters;
    type Draft = RoleDraft;
    type Patch = NoPayload;

    const RESOURCE: &'static str = "roles";

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at.into()
    }

    fn registry() -> FieldRegistry {
        FieldRegistry::new()
            .number("id")
            .string("name")
            .bool("isDefault")
            .timestamp("createdAt")
    }

    fn default_order() -> Vec<SortRule> {
        vec![SortRule::desc("createdAt"), SortRule::desc("isDefault")]
    }

    fn validate_draft(draft: &RoleDraft) -> Result<(), ListError> {
        require("name", &draft.name, "Role name is required")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_rest_record() {
        let role: Role = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "auditor",
            "isDefault": false,
            "createdAt": "2024-02-10T08:30:00.000Z"
        }))
        .unwrap();
        assert_eq!(role.name, "auditor");
        assert_eq!(
            role.created_at(),
            Timestamp::parse("2024-02-10T08:30:00Z").unwrap()
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Role::validate_draft(&RoleDraft::new("  ")).unwrap_err();
        assert_eq!(err.to_string(), "Role name is required");
        assert!(Role::validate_draft(&RoleDraft::new("auditor")).is_ok());
    }

    #[test]
    fn name_slot() {
        let mut filters = RoleFilters::default();
        assert!(filters.is_empty());
        filters.name = Some("adm".into());
        assert_eq!(
            filters.predicates(),
            vec![Some(Predicate::contains("name", "adm"))]
        );
    }
}
