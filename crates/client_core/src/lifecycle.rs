//! Swap request state machine: `pending` moves once to `accepted` or
//! `rejected`, and only the receiving side may move it.

use chrono::{DateTime, Utc};
use shared::{
    domain::{Direction, RequestId, RequestStatus, SwapRequest, User, UserId},
    error::SwapError,
};
use tracing::info;

use crate::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapAction {
    Accept,
    Decline,
}

impl SwapAction {
    fn target(self) -> RequestStatus {
        match self {
            SwapAction::Accept => RequestStatus::Accepted,
            SwapAction::Decline => RequestStatus::Rejected,
        }
    }
}

/// Whether the viewer may still accept or decline this request.
pub fn can_respond(request: &SwapRequest) -> bool {
    request.direction == Direction::Incoming && request.status == RequestStatus::Pending
}

/// Whether the request has become an active swap with a conversation.
pub fn can_chat(request: &SwapRequest) -> bool {
    request.status == RequestStatus::Accepted
}

/// Refuses a second outgoing proposal while one to `to` is still pending.
pub fn ensure_no_pending(requests: &[SwapRequest], to: UserId) -> Result<(), SwapError> {
    let pending = requests.iter().any(|r| {
        r.direction == Direction::Outgoing
            && r.status == RequestStatus::Pending
            && r.to_user.id == to
    });
    if pending {
        return Err(SwapError::DuplicatePending(to));
    }
    Ok(())
}

/// Status the request would move to. The request itself is not touched.
pub fn transition(request: &SwapRequest, action: SwapAction) -> Result<RequestStatus, SwapError> {
    if request.direction != Direction::Incoming {
        return Err(SwapError::NotIncoming(request.id));
    }
    if request.status.is_terminal() {
        return Err(SwapError::AlreadyResolved {
            id: request.id,
            status: request.status,
        });
    }
    Ok(action.target())
}

/// Applies `action` to the request with `id`, returning the updated record.
/// On error the collection is unchanged.
pub fn apply<'a>(
    requests: &'a mut [SwapRequest],
    id: RequestId,
    action: SwapAction,
) -> Result<&'a SwapRequest, SwapError> {
    let request = requests
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or(SwapError::UnknownRequest(id))?;
    let next = transition(request, action)?;
    info!(
        request_id = %id,
        from = %request.status,
        to = %next,
        counterpart = %request.from_user.name,
        "swap request resolved"
    );
    request.status = next;
    Ok(request)
}

/// Skills offered and requested in a new proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapProposal {
    pub teach_skill: String,
    pub learn_skill: String,
    pub message: String,
}

impl SwapProposal {
    /// Suggested pairing between the viewer and `target`.
    ///
    /// Prefers a viewer skill the target wants and a target skill the
    /// viewer wants; falls back to each side's first teach skill.
    pub fn suggest(viewer: &User, target: &User) -> Result<Self, SwapError> {
        let teach_skill = viewer
            .teach_skills
            .iter()
            .find(|skill| target.learn_skills.contains(skill))
            .or_else(|| viewer.teach_skills.first())
            .ok_or(SwapError::NoSkills(viewer.id))?
            .clone();
        let learn_skill = target
            .teach_skills
            .iter()
            .find(|skill| viewer.learn_skills.contains(skill))
            .or_else(|| target.teach_skills.first())
            .ok_or(SwapError::NoSkills(target.id))?
            .clone();
        let message = format!(
            "Hi {}! Would you like to swap your {learn_skill} knowledge for my {teach_skill} skills?",
            target.first_name()
        );
        Ok(Self {
            teach_skill,
            learn_skill,
            message,
        })
    }
}

pub fn next_request_id(requests: &[SwapRequest]) -> RequestId {
    RequestId(requests.iter().map(|r| r.id.0).max().unwrap_or(0) + 1)
}

/// New outgoing pending request from the session viewer to `target`.
pub fn propose(
    session: &Session,
    target: &User,
    proposal: SwapProposal,
    id: RequestId,
    now: DateTime<Utc>,
) -> Result<SwapRequest, SwapError> {
    if target.id == session.viewer_id() {
        return Err(SwapError::SelfSwap);
    }
    info!(
        request_id = %id,
        to = %target.name,
        teach = %proposal.teach_skill,
        learn = %proposal.learn_skill,
        "swap request proposed"
    );
    Ok(SwapRequest {
        id,
        from_user: session.viewer().user.clone(),
        to_user: target.clone(),
        teach_skill: proposal.teach_skill,
        learn_skill: proposal.learn_skill,
        status: RequestStatus::Pending,
        message: proposal.message,
        created_at: now,
        direction: Direction::Outgoing,
    })
}

#[cfg(test)]
#[path = "tests/lifecycle_tests.rs"]
mod tests;
