//! Explore view: search, skill filters and sorting over the user directory.

use serde::Serialize;
use shared::{criteria::UserSortKey, domain::User};

use crate::{predicate::UserCriteria, ranking::sort_users};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExploreState {
    pub search: String,
    pub teach_skill: String,
    pub learn_skill: String,
    pub sort: UserSortKey,
    pub show_filters: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExploreAction {
    SetSearch(String),
    SetTeachSkill(String),
    SetLearnSkill(String),
    SetSort(UserSortKey),
    ToggleFilters,
    /// Resets search, both skill filters and the sort key.
    ClearFilters,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExploreView {
    pub users: Vec<User>,
    pub sort: UserSortKey,
    pub active_filter_count: usize,
    pub has_criteria: bool,
}

impl ExploreState {
    pub fn with_sort(sort: UserSortKey) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    pub fn reduce(self, action: ExploreAction) -> Self {
        match action {
            ExploreAction::SetSearch(search) => Self { search, ..self },
            ExploreAction::SetTeachSkill(teach_skill) => Self {
                teach_skill,
                ..self
            },
            ExploreAction::SetLearnSkill(learn_skill) => Self {
                learn_skill,
                ..self
            },
            ExploreAction::SetSort(sort) => Self { sort, ..self },
            ExploreAction::ToggleFilters => Self {
                show_filters: !self.show_filters,
                ..self
            },
            ExploreAction::ClearFilters => Self {
                show_filters: self.show_filters,
                ..Self::default()
            },
        }
    }

    pub fn criteria(&self) -> UserCriteria {
        UserCriteria {
            search: self.search.clone(),
            teach_skill: self.teach_skill.clone(),
            learn_skill: self.learn_skill.clone(),
        }
    }

    /// Number of skill filters set; search text is not counted.
    pub fn active_filter_count(&self) -> usize {
        [&self.teach_skill, &self.learn_skill]
            .iter()
            .filter(|skill| !skill.is_empty())
            .count()
    }

    pub fn has_criteria(&self) -> bool {
        !self.search.is_empty() || self.active_filter_count() > 0
    }

    pub fn view(&self, users: &[User]) -> ExploreView {
        let filtered = self.criteria().filter(users);
        ExploreView {
            users: sort_users(&filtered, self.sort),
            sort: self.sort,
            active_filter_count: self.active_filter_count(),
            has_criteria: self.has_criteria(),
        }
    }
}

#[cfg(test)]
#[path = "tests/explore_tests.rs"]
mod tests;
