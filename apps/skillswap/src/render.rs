//! Plain-text rendering of view models for the terminal.

use client_core::{
    controller::{
        chat::ChatView,
        dashboard::DashboardView,
        events::Notice,
        explore::ExploreView,
        profile::ProfileView,
        requests::{empty_message, RequestsView},
    },
    format::format_request_date,
    lifecycle::can_respond,
};
use shared::route::{NavItem, Route};

pub fn dashboard(view: &DashboardView) -> String {
    let mut lines = vec![
        format!("Welcome back, {}! [{}]", view.first_name, view.initials),
        format!(
            "Total swaps: {}  Pending requests: {}  Active chats: {}  Rating: {:.1}",
            view.total_swaps, view.pending_requests, view.active_chats, view.rating
        ),
        format!("Teaching: {}", view.teach_skills.join(", ")),
        format!("Learning: {}", view.learn_skills.join(", ")),
    ];
    lines.extend(view.quick_actions.iter().map(|action| {
        format!(
            "  {} ({}): {}",
            action.title,
            action.route.path(),
            action.description
        )
    }));
    lines.join("\n")
}

pub fn explore(view: &ExploreView) -> String {
    let mut lines = vec![if view.has_criteria {
        format!(
            "{} result(s), {} filter(s) active, sorted by {}",
            view.users.len(),
            view.active_filter_count,
            view.sort
        )
    } else {
        format!("{} member(s), sorted by {}", view.users.len(), view.sort)
    }];
    if view.users.is_empty() {
        lines.push("No users found. Try adjusting your search or filters.".to_string());
    }
    for user in &view.users {
        lines.push(format!(
            "#{} {} [{}] {:.1} stars, {} swaps",
            user.id,
            user.name,
            user.initials(),
            user.rating,
            user.swaps_completed
        ));
        lines.push(format!("    teaches: {}", user.teach_skills.join(", ")));
        lines.push(format!("    learns:  {}", user.learn_skills.join(", ")));
    }
    lines.join("\n")
}

pub fn requests(view: &RequestsView) -> String {
    let mut lines = vec![format!(
        "Incoming ({})  Outgoing ({})  status: {}  sort: {}",
        view.incoming_badge, view.outgoing_badge, view.status_filter, view.sort
    )];
    let active = view.active();
    if active.is_empty() {
        lines.push(empty_message(view.tab).to_string());
    }
    for request in active {
        lines.push(format!(
            "#{} [{}] {} teaches {} / you teach {}",
            request.id,
            request.status,
            request.counterpart().name,
            request.counterpart_teaches(),
            request.viewer_teaches()
        ));
        lines.push(format!("    \"{}\"", request.message));
        lines.push(format!("    {}", format_request_date(request.created_at)));
        if can_respond(request) {
            lines.push(format!(
                "    accept or decline with: skillswap accept|decline {}",
                request.id
            ));
        }
    }
    lines.join("\n")
}

pub fn chat(view: &ChatView) -> String {
    let mut lines = Vec::new();
    if view.chats.is_empty() {
        lines.push("No conversations found".to_string());
    }
    for chat in &view.chats {
        let marker = if chat.selected { ">" } else { " " };
        let unread = if chat.unread_count > 0 {
            format!(" ({} unread)", chat.unread_count)
        } else {
            String::new()
        };
        lines.push(format!(
            "{marker} #{} {}{unread}  {}  {}",
            chat.id, chat.name, chat.last_activity, chat.last_message
        ));
    }
    lines.push(String::new());
    match &view.conversation {
        Some(conversation) => {
            lines.push(format!("{} ({})", conversation.name, conversation.presence));
            lines.extend(
                conversation
                    .messages
                    .iter()
                    .map(|line| format!("  [{}] {}: {}", line.time, line.sender_name, line.text)),
            );
        }
        None => lines.push("Select a conversation to start messaging.".to_string()),
    }
    lines.join("\n")
}

pub fn profile(view: &ProfileView) -> String {
    [
        format!("{} [{}] <{}>", view.name, view.initials, view.email),
        view.bio.clone(),
        format!(
            "Rating {:.1}, {} swaps completed, member since {}",
            view.rating, view.swaps_completed, view.member_since
        ),
        format!("Skills I teach: {}", view.teach_skills.join(", ")),
        format!("Skills I want to learn: {}", view.learn_skills.join(", ")),
    ]
    .join("\n")
}

pub fn routes() -> String {
    Route::ALL
        .iter()
        .map(|route| format!("{:<10} {}", route.path(), route.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn nav(items: &[NavItem]) -> String {
    items
        .iter()
        .map(|item| {
            if item.active {
                format!("[{}]", item.label)
            } else {
                item.label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// One line per notice, each newline-terminated so callers can `eprint!`.
pub fn notices(notices: &[Notice]) -> String {
    notices
        .iter()
        .map(|notice| {
            let prefix = if notice.is_destructive() { "!" } else { "*" };
            format!("{prefix} {}: {}\n", notice.title, notice.description)
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
