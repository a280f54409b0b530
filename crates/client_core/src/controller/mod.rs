//! App root: owns the session, the mutable request and chat copies, and one
//! state value per view. Views are pure reducers; the root carries out the
//! effects they ask for and collects notices.

pub mod chat;
pub mod dashboard;
pub mod events;
pub mod explore;
pub mod login;
pub mod profile;
pub mod requests;
pub mod signup;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use shared::{
    criteria::{RequestSortKey, UserSortKey},
    domain::{RequestId, SwapRequest, UserId},
    error::SwapError,
    route::Route,
};
use storage::Storage;
use tracing::{debug, info};

use crate::{
    auth::{AuthBackend, AuthHandle, AuthKind, AuthOutcome},
    lifecycle::{self, SwapAction, SwapProposal},
    Session,
};

use self::{
    chat::{ChatAction, ChatState, ChatView},
    dashboard::DashboardView,
    events::{Effect, Notice},
    explore::{ExploreAction, ExploreState, ExploreView},
    login::{LoginAction, LoginState},
    profile::{ProfileAction, ProfileState, ProfileView},
    requests::{RequestsAction, RequestsState, RequestsView},
    signup::{SignupAction, SignupState, SignupView},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    Navigate(Route),
    Explore(ExploreAction),
    RequestSwap(UserId),
    Requests(RequestsAction),
    Respond { id: RequestId, action: SwapAction },
    Chat(ChatAction),
    Profile(ProfileAction),
    Login(LoginAction),
    Signup(SignupAction),
}

pub struct App {
    session: Session,
    storage: Storage,
    requests: Vec<SwapRequest>,
    route: Route,
    explore: ExploreState,
    requests_view: RequestsState,
    chat: ChatState,
    profile: ProfileState,
    login: LoginState,
    signup: SignupState,
    notices: Vec<Notice>,
    auth: Option<AuthHandle>,
    backend: Arc<dyn AuthBackend>,
    clock: fn() -> DateTime<Utc>,
}

impl App {
    pub fn new(storage: Storage, backend: Arc<dyn AuthBackend>) -> Self {
        let session = Session::from_storage(&storage);
        Self {
            requests: storage.list_requests().to_vec(),
            chat: ChatState::new(storage.list_chats().to_vec()),
            profile: ProfileState::new(&session),
            explore: ExploreState::default(),
            requests_view: RequestsState::default(),
            login: LoginState::default(),
            signup: SignupState::default(),
            route: Route::default(),
            notices: Vec::new(),
            auth: None,
            backend,
            clock: Utc::now,
            session,
            storage,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Initial sort keys for the explore and requests views.
    pub fn with_sorts(mut self, users: UserSortKey, requests: RequestSortKey) -> Self {
        self.explore = ExploreState::with_sort(users);
        self.requests_view = RequestsState::with_sort(requests);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn requests(&self) -> &[SwapRequest] {
        &self.requests
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn chat_state(&self) -> &ChatState {
        &self.chat
    }

    pub fn login_state(&self) -> &LoginState {
        &self.login
    }

    pub fn signup_state(&self) -> &SignupState {
        &self.signup
    }

    pub fn auth_pending(&self) -> bool {
        self.auth.is_some()
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    pub fn dispatch(&mut self, action: AppAction) -> Result<(), SwapError> {
        match action {
            AppAction::Navigate(route) => self.navigate(route),
            AppAction::Explore(action) => {
                self.explore = std::mem::take(&mut self.explore).reduce(action);
            }
            AppAction::RequestSwap(user_id) => self.request_swap(user_id)?,
            AppAction::Requests(action) => {
                self.requests_view = self.requests_view.reduce(action);
            }
            AppAction::Respond { id, action } => self.respond(id, action)?,
            AppAction::Chat(action) => {
                let now = self.now();
                self.chat = std::mem::take(&mut self.chat).reduce(action, &self.session, now);
            }
            AppAction::Profile(action) => {
                let state = self.profile.clone();
                let (state, notice) = state.reduce(action, &self.session);
                self.profile = state;
                self.notices.extend(notice);
            }
            AppAction::Login(action) => {
                let (state, effect) = std::mem::take(&mut self.login).reduce(action);
                self.login = state;
                self.run(effect);
            }
            AppAction::Signup(action) => {
                let (state, effect) = std::mem::take(&mut self.signup).reduce(action);
                self.signup = state;
                self.run(effect);
            }
        }
        Ok(())
    }

    fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        if self.auth.is_some() {
            self.cancel_auth();
        }
        debug!(from = %self.route.path(), to = %route.path(), "navigate");
        self.route = route;
    }

    fn cancel_auth(&mut self) {
        if let Some(handle) = self.auth.take() {
            handle.cancel();
        }
        self.login = std::mem::take(&mut self.login).settle();
        self.signup = std::mem::take(&mut self.signup).settle();
    }

    fn run(&mut self, effect: Option<Effect>) {
        match effect {
            Some(Effect::Notify(notice)) => self.notices.push(notice),
            Some(Effect::Authenticate(request)) => {
                self.auth = Some(AuthHandle::spawn(Arc::clone(&self.backend), request));
            }
            None => {}
        }
    }

    fn request_swap(&mut self, user_id: UserId) -> Result<(), SwapError> {
        let target = self
            .storage
            .user(user_id)
            .ok_or(SwapError::UnknownUser(user_id))?
            .clone();
        let outcome = lifecycle::ensure_no_pending(&self.requests, user_id)
            .and_then(|()| SwapProposal::suggest(&self.session.viewer().user, &target))
            .and_then(|proposal| {
                let id = lifecycle::next_request_id(&self.requests);
                lifecycle::propose(&self.session, &target, proposal, id, self.now())
            });
        match outcome {
            Ok(request) => {
                self.requests.push(request);
                self.notices.push(Notice::info(
                    "Swap Request Sent!",
                    format!("Your skill swap request has been sent to {}.", target.name),
                ));
                Ok(())
            }
            Err(error) => {
                self.notices.push(Notice::from(&error));
                Err(error)
            }
        }
    }

    fn respond(&mut self, id: RequestId, action: SwapAction) -> Result<(), SwapError> {
        let counterpart = match lifecycle::apply(&mut self.requests, id, action) {
            Ok(request) => request.counterpart().clone(),
            Err(error) => {
                self.notices.push(Notice::from(&error));
                return Err(error);
            }
        };
        match action {
            SwapAction::Accept => {
                let now = self.now();
                self.chat.open_with(&counterpart, now);
                self.notices.push(Notice::info(
                    "Request Accepted!",
                    format!("You've accepted the skill swap with {}.", counterpart.name),
                ));
            }
            SwapAction::Decline => {
                self.notices.push(Notice::info(
                    "Request Declined",
                    format!("You've declined the skill swap with {}.", counterpart.name),
                ));
            }
        }
        Ok(())
    }

    /// Waits for the pending auth task, if any, and applies its result.
    pub async fn settle_auth(&mut self) -> Option<AuthOutcome> {
        let handle = self.auth.take()?;
        let outcome = handle.wait().await;
        match &outcome {
            AuthOutcome::Completed(request) => {
                let notice = match request.kind {
                    AuthKind::Login => login::welcome_notice(),
                    AuthKind::Signup => signup::account_created_notice(),
                };
                self.notices.push(notice);
                self.login = std::mem::take(&mut self.login).settle();
                self.signup = std::mem::take(&mut self.signup).settle();
                info!(email = %request.email, "signed in");
                self.route = Route::Dashboard;
            }
            AuthOutcome::Cancelled(_) => {
                self.login = std::mem::take(&mut self.login).settle();
                self.signup = std::mem::take(&mut self.signup).settle();
            }
        }
        Some(outcome)
    }

    pub fn dashboard_view(&self) -> DashboardView {
        dashboard::build(&self.session, &self.requests)
    }

    pub fn explore_view(&self) -> ExploreView {
        self.explore.view(self.storage.list_users())
    }

    pub fn requests_view(&self) -> RequestsView {
        self.requests_view.view(&self.requests)
    }

    pub fn chat_view(&self) -> ChatView {
        self.chat.view(self.now())
    }

    pub fn profile_view(&self) -> ProfileView {
        self.profile.view(self.storage.skill_vocabulary())
    }

    pub fn signup_view(&self) -> SignupView {
        self.signup.view(self.storage.skill_vocabulary())
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
