use chrono::{DateTime, Utc};
use roster_query::{FieldRegistry, Number, Predicate, SortRule, Sortable, Timestamp, Value};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, FilterSet, NoPayload};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub two_factor_phone: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// `"Active"` or `"Inactive"`.
    pub fn status(&self) -> &'static str {
        if self.active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

impl Sortable for User {
    fn field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Number(Number::I64(self.id)),
            "name" => Value::String(&self.name),
            "gender" => self.gender.as_ref().into(),
            "role" => self.role.as_ref().into(),
            "active" => Value::Bool(self.active),
            "status" => Value::String(self.status()),
            "contactNo" => self.two_factor_phone.as_ref().into(),
            // createdOn is the display column for the same timestamp
            "createdAt" | "createdOn" => Value::Timestamp(self.created_at.into()),
            _ => Value::None,
        }
    }
}

/// User page inputs. Fragments appear as `name`, `gender`, `active`, `role`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilters {
    pub name: Option<String>,
    pub gender: Option<String>,
    /// Restrict to active users. Unchecked adds no fragment.
    pub only_active: bool,
    pub role: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl FilterSet for UserFilters {
    fn predicates(&self) -> Vec<Option<Predicate>> {
        vec![
            Predicate::contains_if("name", self.name.as_deref()),
            Predicate::equals_if("gender", self.gender.as_deref()),
            self.only_active.then(|| Predicate::boolean("active", true)),
            Predicate::equals_if("role", self.role.as_deref()),
        ]
    }

    fn date_inputs(&self) -> (Option<&str>, Option<&str>) {
        (self.start_date.as_deref(), self.end_date.as_deref())
    }
}

/// Editable user fields. `None` members are left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl Entity for User {
    type Filters = UserFilters;
    type Draft = NoPayload;
    type Patch = UserPatch;

    const RESOURCE: &'static str = "users";

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
            .string("gender")
            .string("role")
            .bool("active")
            .string("status")
            .string("contactNo")
            .timestamp("createdAt")
            .timestamp("createdOn")
    }

    fn default_order() -> Vec<SortRule> {
        vec![SortRule::desc("createdAt")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_query::compose_filter_query;

    #[test]
    fn fragments_in_declared_order() {
        let filters = UserFilters {
            name: Some("jo".into()),
            role: Some("ADMIN".into()),
            only_active: true,
            gender: Some(String::new()),
            ..UserFilters::default()
        };
        assert_eq!(
            compose_filter_query(filters.predicates()),
            "name:contains jo,active:boolean(true),role:equals ADMIN"
        );
    }

    #[test]
    fn missing_optionals_decode() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Jo",
            "active": true,
            "createdAt": "2024-05-05T05:05:05Z"
        }))
        .unwrap();
        assert_eq!(user.status(), "Active");
        assert_eq!(user.field_value("gender"), Value::None);
        assert_eq!(user.field_value("createdOn"), user.field_value("createdAt"));
    }

    #[test]
    fn patch_skips_unset_members() {
        let patch = UserPatch {
            role: Some("ADMIN".into()),
            ..UserPatch::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({ "role": "ADMIN" })
        );
    }
}
