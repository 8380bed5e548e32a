//! Roster - list pages for the roles, teams and users of an admin console.
//!
//! Each page is a [`ListPage`] over an [`Entity`] type and an
//! [`EntityApi`] collaborator that talks to the REST backend. The page owns
//! a [`roster_query::ListState`] and turns table events (page change,
//! filter change, column sort) and CRUD actions into fetches. The teams
//! page wraps its list in a [`TeamsPage`], which also keeps the
//! parent-team options.
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use roster::entities::Role;
//! use roster::{ApiError, EntityApi, ListConfig, ListPage, RawPage};
//! use roster_query::ListParams;
//!
//! struct RolesApi;
//!
//! #[async_trait]
//! impl EntityApi<Role> for RolesApi {
//!     async fn list(&self, _params: &ListParams) -> Result<RawPage, ApiError> {
//!         Ok(RawPage::default())
//!     }
//! }
//!
//! # async fn run() -> roster::Result<()> {
//! let config = ListConfig::default();
//! let mut roles: ListPage<Role, _> = ListPage::from_config(RolesApi, &config);
//! roles.open().await?;
//! roles
//!     .on_filter_change(|filters| filters.name = Some("admin".into()))
//!     .await?;
//! println!("{} of {}", roles.rows().len(), roles.total_records());
//! # Ok(())
//! # }
//! ```
//!
//! Logging goes through `tracing`; no subscriber is installed here.

mod api;
mod config;
pub mod entities;
mod entity;
mod error;
mod page;
mod teams;

pub use api::{EntityApi, ParentTeamsApi, RawPage};
pub use config::{ListConfig, PageModes};
pub use entity::{Entity, FilterSet, NoPayload};
pub use error::{ApiError, ConfigError, ListError, Result};
pub use page::ListPage;
pub use teams::{ParentOption, TeamsPage};

/// Roles page.
pub type RolesPage<A> = ListPage<entities::Role, A>;
/// Users page.
pub type UsersPage<A> = ListPage<entities::User, A>;
