use super::*;

use std::sync::Arc;

use client_core::{auth::SimulatedAuth, App};
use storage::Storage;

fn app() -> App {
    let storage = Storage::seeded().expect("seed fixture");
    App::new(storage, Arc::new(SimulatedAuth::default()))
}

#[test]
fn dashboard_lists_greeting_stats_and_quick_actions() {
    let view = app().dashboard_view();
    let text = dashboard(&view);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Welcome back, Sarah! [SC]");
    assert!(lines[1].contains("Pending requests: 2"));
    assert_eq!(lines.len(), 4 + view.quick_actions.len());
    assert!(!text.ends_with('\n'));
}

#[test]
fn explore_lists_three_lines_per_user() {
    let view = app().explore_view();
    let text = explore(&view);
    assert_eq!(text.lines().count(), 1 + 3 * view.users.len());
    assert!(text.lines().nth(1).is_some_and(|line| line.starts_with('#')));
}

#[test]
fn chat_without_selection_prompts_to_pick_one() {
    let view = app().chat_view();
    let text = chat(&view);
    assert!(text.ends_with("Select a conversation to start messaging."));
    assert_eq!(text.lines().count(), view.chats.len() + 2);
}

#[test]
fn notices_end_every_line() {
    let text = notices(&[
        Notice::info("Swap Request Sent!", "sent"),
        Notice::destructive("Not Found", "missing"),
    ]);
    assert_eq!(text, "* Swap Request Sent!: sent\n! Not Found: missing\n");
    assert!(notices(&[]).is_empty());
}

#[test]
fn nav_brackets_the_active_route() {
    assert_eq!(
        nav(&Route::Chat.nav_items()),
        "Dashboard  Explore  Requests  [Chat]"
    );
}
