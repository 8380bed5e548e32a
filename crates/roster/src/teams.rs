//! Teams page: a [`ListPage`] of teams plus the parent-team options shown
//! by the parent filter and the create form.

use std::ops::{Deref, DerefMut};

use tracing::{debug, warn};

use crate::api::{EntityApi, ParentTeamsApi};
use crate::config::ListConfig;
use crate::entities::{Team, TeamDraft, TeamParent};
use crate::error::{ListError, Result};
use crate::page::ListPage;

/// One entry of a parent-team dropdown. `id` is `None` for the leading
/// "All" (filter) or "None" (create form) entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentOption {
    pub name: String,
    pub id: Option<i64>,
}

impl ParentOption {
    fn unset(name: &str) -> Self {
        ParentOption {
            name: name.to_string(),
            id: None,
        }
    }
}

impl From<TeamParent> for ParentOption {
    fn from(parent: TeamParent) -> Self {
        ParentOption {
            name: parent.name,
            id: Some(parent.id),
        }
    }
}

/// Teams list page.
///
/// Every [`ListPage`] event is reachable through `Deref`. Opening the page,
/// creating a team and deleting one also refresh the parent filter options,
/// since any of them can change which teams are parents.
pub struct TeamsPage<A> {
    list: ListPage<Team, A>,
    parent_options: Vec<ParentOption>,
}

impl<A> TeamsPage<A>
where
    A: EntityApi<Team> + ParentTeamsApi,
{
    pub fn new(list: ListPage<Team, A>) -> Self {
        TeamsPage {
            list,
            parent_options: vec![ParentOption::unset("All")],
        }
    }

    pub fn from_config(api: A, config: &ListConfig) -> Self {
        Self::new(ListPage::from_config(api, config))
    }

    /// Loads the parent options, then the first page.
    pub async fn open(&mut self) -> Result<()> {
        self.load_parent_options().await?;
        self.list.open().await
    }

    /// Re-fetches the parent filter options.
    pub async fn load_parent_options(&mut self) -> Result<()> {
        let parents = self.list.api().parent_teams().await.map_err(|source| {
            warn!(resource = "groups/parents", error = %source, "parent teams fetch failed");
            ListError::Api {
                action: "fetch parent teams".to_string(),
                source,
            }
        })?;

        self.parent_options = std::iter::once(ParentOption::unset("All"))
            .chain(parents.into_iter().map(ParentOption::from))
            .collect();
        debug!(count = self.parent_options.len() - 1, "parent teams loaded");
        Ok(())
    }

    /// Creates a team, reloads the list and the parent options.
    pub async fn create(&mut self, draft: TeamDraft) -> Result<()> {
        self.list.create(draft).await?;
        self.load_parent_options().await
    }

    /// Deletes a team, reloads the list and the parent options.
    pub async fn delete(&mut self, id: i64) -> Result<()> {
        self.list.delete(id).await?;
        self.load_parent_options().await
    }

    /// Parent filter entries: "All", then every team `GET /groups/parents`
    /// returned.
    pub fn parent_options(&self) -> &[ParentOption] {
        &self.parent_options
    }

    /// Parent choices for the create form: "None", then the loaded teams.
    pub fn parent_choices(&self) -> Vec<ParentOption> {
        std::iter::once(ParentOption::unset("None"))
            .chain(self.list.rows().iter().map(|team| ParentOption {
                name: team.name.clone(),
                id: Some(team.id),
            }))
            .collect()
    }

    pub fn into_inner(self) -> ListPage<Team, A> {
        self.list
    }
}

impl<A> Deref for TeamsPage<A> {
    type Target = ListPage<Team, A>;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}

impl<A> DerefMut for TeamsPage<A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.list
    }
}
