//! Client core for the SkillSwap app: search and ranking over the entity
//! store, the swap request lifecycle, form rules, and per-view controllers.

pub mod auth;
pub mod controller;
pub mod format;
pub mod lifecycle;
pub mod predicate;
pub mod ranking;
pub mod skills;
pub mod validation;

pub use auth::{AuthBackend, AuthHandle, AuthKind, AuthOutcome, AuthRequest, SimulatedAuth};
pub use controller::{App, AppAction};

use shared::domain::{Profile, UserId};
use storage::Storage;

/// The viewer for this session, passed explicitly to view-level functions.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    viewer: Profile,
}

impl Session {
    pub fn new(viewer: Profile) -> Self {
        Self { viewer }
    }

    pub fn from_storage(storage: &Storage) -> Self {
        Self::new(storage.current_user().clone())
    }

    pub fn viewer(&self) -> &Profile {
        &self.viewer
    }

    pub fn viewer_id(&self) -> UserId {
        self.viewer.user.id
    }
}
