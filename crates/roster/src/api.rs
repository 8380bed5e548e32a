//! Data-access collaborator for list pages.

use async_trait::async_trait;
use roster_query::ListParams;
use serde::Deserialize;

use crate::entities::TeamParent;
use crate::entity::Entity;
use crate::error::{ApiError, ListError};

/// Raw list response: `{ <items>, length }`.
///
/// The REST API names the item array after the resource (`roles`, `groups`,
/// `users`); all of them decode into [`RawPage::items`]. `length` is the
/// total number of matching records, not the number returned.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPage {
    #[serde(alias = "roles", alias = "groups", alias = "users", default)]
    pub items: Vec<serde_json::Value>,
    #[serde(default)]
    pub length: u64,
}

impl RawPage {
    /// Wraps already-encoded records.
    pub fn new(items: Vec<serde_json::Value>, length: u64) -> Self {
        RawPage { items, length }
    }

    /// Decodes every record as `E`.
    ///
    /// The first record that does not match `E` fails the whole page.
    pub fn decode<E: Entity>(self) -> Result<Vec<E>, ListError> {
        self.items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item).map_err(|source| ListError::DataShape {
                    resource: E::RESOURCE,
                    index,
                    source,
                })
            })
            .collect()
    }
}

/// The REST operations a list page needs for one resource.
///
/// Only [`list`](EntityApi::list) is required. Mutations a resource does not
/// offer report [`ApiError::Unsupported`].
#[async_trait]
pub trait EntityApi<E: Entity>: Send + Sync {
    /// Fetches one page (lazy) or the whole set (eager, empty `params`).
    async fn list(&self, params: &ListParams) -> Result<RawPage, ApiError>;

    async fn create(&self, _draft: &E::Draft) -> Result<(), ApiError> {
        Err(ApiError::Unsupported("create"))
    }

    async fn update(&self, _id: i64, _patch: &E::Patch) -> Result<(), ApiError> {
        Err(ApiError::Unsupported("update"))
    }

    async fn delete(&self, _id: i64) -> Result<(), ApiError> {
        Err(ApiError::Unsupported("delete"))
    }
}

/// Teams that can be chosen as a parent (`GET /groups/parents`).
#[async_trait]
pub trait ParentTeamsApi: Send + Sync {
    async fn parent_teams(&self) -> Result<Vec<TeamParent>, ApiError>;
}
