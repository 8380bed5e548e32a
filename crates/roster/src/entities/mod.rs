//! Records listed by the admin console.

mod role;
mod team;
mod user;

pub use role::{Role, RoleDraft, RoleFilters};
pub use team::{Team, TeamDraft, TeamFilters, TeamParent, TeamPatch};
pub use user::{User, UserFilters, UserPatch};
