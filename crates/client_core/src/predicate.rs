//! Match predicates for the Explore and Requests lists.
//!
//! Every predicate is pure and total. Textual search is case-insensitive;
//! skill filters compare exact catalog names.

use shared::{
    criteria::StatusFilter,
    domain::{Direction, SwapRequest, User},
};

/// Substring search over name, bio and both skill lists. An empty term matches.
pub fn matches_search(user: &User, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    let hit = |text: &str| text.to_lowercase().contains(&needle);

    hit(&user.name)
        || hit(&user.bio)
        || user.teach_skills.iter().any(|skill| hit(skill))
        || user.learn_skills.iter().any(|skill| hit(skill))
}

pub fn matches_teach_filter(user: &User, skill: &str) -> bool {
    skill.is_empty() || user.teach_skills.iter().any(|s| s == skill)
}

pub fn matches_learn_filter(user: &User, skill: &str) -> bool {
    skill.is_empty() || user.learn_skills.iter().any(|s| s == skill)
}

pub fn matches_status(request: &SwapRequest, status: StatusFilter) -> bool {
    match status {
        StatusFilter::All => true,
        StatusFilter::Only(wanted) => request.status == wanted,
    }
}

pub fn matches_direction(request: &SwapRequest, direction: Direction) -> bool {
    request.direction == direction
}

/// Explore criteria. Empty strings mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserCriteria {
    pub search: String,
    pub teach_skill: String,
    pub learn_skill: String,
}

impl UserCriteria {
    pub fn matches(&self, user: &User) -> bool {
        matches_search(user, &self.search)
            && matches_teach_filter(user, &self.teach_skill)
            && matches_learn_filter(user, &self.learn_skill)
    }

    pub fn filter(&self, users: &[User]) -> Vec<User> {
        users.iter().filter(|u| self.matches(u)).cloned().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestCriteria {
    pub direction: Direction,
    pub status: StatusFilter,
}

impl RequestCriteria {
    pub fn new(direction: Direction, status: StatusFilter) -> Self {
        Self { direction, status }
    }

    pub fn matches(&self, request: &SwapRequest) -> bool {
        matches_direction(request, self.direction) && matches_status(request, self.status)
    }

    pub fn filter(&self, requests: &[SwapRequest]) -> Vec<SwapRequest> {
        requests
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/predicate_tests.rs"]
mod tests;
