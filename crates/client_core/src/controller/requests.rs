//! Requests view: incoming and outgoing tabs over the viewer's swap requests.

use serde::Serialize;
use shared::{
    criteria::{RequestSortKey, StatusFilter},
    domain::{Direction, SwapRequest},
};

use crate::{predicate::RequestCriteria, ranking::sort_requests};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestsState {
    pub sort: RequestSortKey,
    pub status_filter: StatusFilter,
    pub tab: Direction,
}

impl Default for RequestsState {
    fn default() -> Self {
        Self {
            sort: RequestSortKey::default(),
            status_filter: StatusFilter::default(),
            tab: Direction::Incoming,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestsAction {
    SetSort(RequestSortKey),
    SetStatusFilter(StatusFilter),
    SelectTab(Direction),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestsView {
    pub tab: Direction,
    pub sort: RequestSortKey,
    pub status_filter: StatusFilter,
    pub incoming: Vec<SwapRequest>,
    pub outgoing: Vec<SwapRequest>,
    pub incoming_badge: usize,
    pub outgoing_badge: usize,
}

impl RequestsView {
    pub fn active(&self) -> &[SwapRequest] {
        match self.tab {
            Direction::Incoming => &self.incoming,
            Direction::Outgoing => &self.outgoing,
        }
    }
}

impl RequestsState {
    pub fn with_sort(sort: RequestSortKey) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    pub fn reduce(self, action: RequestsAction) -> Self {
        match action {
            RequestsAction::SetSort(sort) => Self { sort, ..self },
            RequestsAction::SetStatusFilter(status_filter) => Self {
                status_filter,
                ..self
            },
            RequestsAction::SelectTab(tab) => Self { tab, ..self },
        }
    }

    pub fn list(&self, requests: &[SwapRequest], direction: Direction) -> Vec<SwapRequest> {
        let filtered = RequestCriteria::new(direction, self.status_filter).filter(requests);
        sort_requests(&filtered, self.sort)
    }

    /// Tab badge: requests in `direction` under the active status filter.
    pub fn badge_count(&self, requests: &[SwapRequest], direction: Direction) -> usize {
        let criteria = RequestCriteria::new(direction, self.status_filter);
        requests.iter().filter(|r| criteria.matches(r)).count()
    }

    pub fn view(&self, requests: &[SwapRequest]) -> RequestsView {
        RequestsView {
            tab: self.tab,
            sort: self.sort,
            status_filter: self.status_filter,
            incoming: self.list(requests, Direction::Incoming),
            outgoing: self.list(requests, Direction::Outgoing),
            incoming_badge: self.badge_count(requests, Direction::Incoming),
            outgoing_badge: self.badge_count(requests, Direction::Outgoing),
        }
    }
}

/// Empty-tab message for `direction`.
pub fn empty_message(direction: Direction) -> &'static str {
    match direction {
        Direction::Incoming => "You don't have any pending requests right now.",
        Direction::Outgoing => "You haven't sent any requests yet.",
    }
}

#[cfg(test)]
#[path = "tests/requests_tests.rs"]
mod tests;
