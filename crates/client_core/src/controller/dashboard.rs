//! Dashboard: greeting, headline stats and shortcuts.

use serde::Serialize;
use shared::{
    domain::{Direction, RequestStatus, SwapRequest},
    route::Route,
};

use crate::Session;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub route: Route,
}

pub const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        title: "Find Skills",
        description: "Discover people who can teach you new skills",
        route: Route::Explore,
    },
    QuickAction {
        title: "View Requests",
        description: "Check your pending skill swap requests",
        route: Route::Requests,
    },
    QuickAction {
        title: "Start Chatting",
        description: "Continue conversations with your matches",
        route: Route::Chat,
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub first_name: String,
    pub initials: String,
    pub total_swaps: u32,
    pub pending_requests: usize,
    pub active_chats: usize,
    pub rating: f64,
    pub teach_skills: Vec<String>,
    pub learn_skills: Vec<String>,
    pub quick_actions: Vec<QuickAction>,
}

/// Incoming requests still waiting on the viewer.
pub fn pending_request_count(requests: &[SwapRequest]) -> usize {
    requests
        .iter()
        .filter(|r| r.direction == Direction::Incoming && r.status == RequestStatus::Pending)
        .count()
}

/// Accepted swaps in either direction.
pub fn active_swap_count(requests: &[SwapRequest]) -> usize {
    requests
        .iter()
        .filter(|r| r.status == RequestStatus::Accepted)
        .count()
}

pub fn build(session: &Session, requests: &[SwapRequest]) -> DashboardView {
    let viewer = &session.viewer().user;
    DashboardView {
        first_name: viewer.first_name().to_string(),
        initials: viewer.initials(),
        total_swaps: viewer.swaps_completed,
        pending_requests: pending_request_count(requests),
        active_chats: active_swap_count(requests),
        rating: viewer.rating,
        teach_skills: viewer.teach_skills.clone(),
        learn_skills: viewer.learn_skills.clone(),
        quick_actions: QUICK_ACTIONS.to_vec(),
    }
}
