use chrono::{DateTime, Utc};
use roster_query::{FieldRegistry, Number, Predicate, SortRule, Sortable, Timestamp, Value};
use serde::{Deserialize, Serialize};

use crate::entity::{require, Entity, FilterSet};
use crate::error::ListError;

/// A team (`groups` resource).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub parent: Option<TeamParent>,
    #[serde(default)]
    pub group_picture_url: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamParent {
    pub id: i64,
    pub name: String,
}

impl Team {
    /// Name of the parent team, if any.
    pub fn parent_name(&self) -> Option<&str> {
        self.parent.as_ref().map(|p| p.name.as_str())
    }
}

impl Sortable for Team {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Number(Number::I64(self.id)),
            "name" => Value::String(&self.name),
            "parentId" => self
                .parent
                .as_ref()
                .map_or(Value::None, |p| Value::Number(Number::I64(p.id))),
            "parentTeam" => self.parent_name().into(),
            "isDefault" => Value::Bool(self.is_default),
            "createdAt" => Value::Timestamp(self.created_at.into()),
            _ => Value::None,
        }
    }
}

/// Team page inputs. Fragments appear as `name`, then `parentId`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamFilters {
    pub name: Option<String>,
    /// Selected parent team; `None` is "All".
    pub parent_id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl FilterSet for TeamFilters {
    fn predicates(&self) -> Vec<Option<Predicate>> {
        vec![
            Predicate::contains_if("name", self.name.as_deref()),
            self.parent_id.map(|id| Predicate::int("parentId", id)),
        ]
    }

    fn date_inputs(&self) -> (Option<&str>, Option<&str>) {
        (self.start_date.as_deref(), self.end_date.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDraft {
    pub name: String,
    pub parent_id: Option<i64>,
}

impl TeamDraft {
    pub fn new(name: impl Into<String>) -> Self {
        TeamDraft {
            name: name.into(),
            parent_id: None,
        }
    }

    pub fn with_parent(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

/// Rename payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamPatch {
    pub name: String,
}

impl Entity for Team {
    type Filters = TeamFilters;
    type Draft = TeamDraft;
    type Patch = TeamPatch;

    const RESOURCE: &'static str = "groups";

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
            .number("parentId")
            .string("parentTeam")
            .bool("isDefault")
            .timestamp("createdAt")
    }

    fn default_order() -> Vec<SortRule> {
        vec![SortRule::desc("createdAt"), SortRule::desc("isDefault")]
    }

    fn validate_draft(draft: &TeamDraft) -> Result<(), ListError> {
        require("name", &draft.name, "Team name is required")
    }

    fn validate_patch(patch: &TeamPatch) -> Result<(), ListError> {
        require("name", &patch.name, "Team name is required")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_query::compose_filter_query;

    #[test]
    fn decodes_with_and_without_parent() {
        let child: Team = serde_json::from_value(serde_json::json!({
            "id": 9,
            "name": "platform",
            "parent": { "id": 4, "name": "engineering" },
            "groupPictureUrl": null,
            "isDefault": false,
            "createdAt": "2024-03-01T12:00:00Z"
        }))
        .unwrap();
        assert_eq!(child.parent_name(), Some("engineering"));
        assert_eq!(child.field_value("parentId"), Value::Number(Number::I64(4)));

        let root: Team = serde_json::from_value(serde_json::json!({
            "id": 4,
            "name": "engineering",
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(root.parent_name(), None);
        assert_eq!(root.field_value("parentId"), Value::None);
    }

    #[test]
    fn filter_fragments() {
        let filters = TeamFilters {
            name: Some("core".into()),
            parent_id: Some(4),
            ..TeamFilters::default()
        };
        assert_eq!(
            compose_filter_query(filters.predicates()),
            "name:contains core,parentId: int(+4)"
        );
    }

    #[test]
    fn draft_wire_form() {
        let draft = TeamDraft::new("platform").with_parent(4);
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            serde_json::json!({ "name": "platform", "parentId": 4 })
        );
        assert_eq!(
            Team::validate_draft(&TeamDraft::new("")).unwrap_err().to_string(),
            "Team name is required"
        );
    }
}
