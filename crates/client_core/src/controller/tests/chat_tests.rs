use super::*;
use chrono::TimeZone;
use shared::domain::UserId;
use storage::Storage;

fn fixture() -> (Storage, Session, ChatState) {
    let storage = Storage::seeded().expect("seed fixture");
    let session = Session::from_storage(&storage);
    let state = ChatState::new(storage.list_chats().to_vec());
    (storage, session, state)
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 16, 12, 0, 0)
        .single()
        .expect("now")
}

#[test]
fn nothing_selected_initially() {
    let (_, _, state) = fixture();
    let view = state.view(now());
    assert_eq!(view.chats.len(), 3);
    assert!(view.conversation.is_none());
    assert_eq!(view.chats[0].initials, "MR");
    assert_eq!(view.chats[0].last_activity, "10:40 AM");
    assert_eq!(view.chats[1].last_activity, "02:20 PM");
    assert_eq!(view.chats[2].last_activity, "Jan 14");
}

#[test]
fn selecting_clears_unread_and_shows_thread() {
    let (_, session, state) = fixture();
    let state = state.reduce(ChatAction::Select(ChatId(2)), &session, now());
    assert_eq!(state.chats[1].unread_count, 0);

    let state = state.reduce(ChatAction::Select(ChatId(1)), &session, now());
    let view = state.view(now());
    let conversation = view.conversation.expect("conversation");
    assert_eq!(conversation.name, "Marcus Rodriguez");
    assert_eq!(conversation.presence, "Online");
    assert_eq!(conversation.messages.len(), 4);
    assert!(view.chats[0].selected);
}

#[test]
fn selecting_unknown_chat_is_ignored() {
    let (_, session, state) = fixture();
    let state = state.reduce(ChatAction::Select(ChatId(99)), &session, now());
    assert!(state.selected.is_none());
}

#[test]
fn send_appends_own_message_and_clears_draft() {
    let (_, session, state) = fixture();
    let state = state
        .reduce(ChatAction::Select(ChatId(1)), &session, now())
        .reduce(ChatAction::SetDraft("See you Saturday".to_string()), &session, now())
        .reduce(ChatAction::Send, &session, now());

    let chat = state.selected_chat().expect("selected");
    let last = chat.messages.last().expect("message");
    assert_eq!(last.id, MessageId(5));
    assert_eq!(last.sender_id, UserId(1));
    assert_eq!(last.sender_name, OWN_SENDER_NAME);
    assert_eq!(last.text, "See you Saturday");
    assert_eq!(last.timestamp, now());
    assert!(last.is_own);
    assert_eq!(chat.last_message, "See you Saturday");
    assert!(state.draft.is_empty());
}

#[test]
fn blank_draft_or_no_selection_is_a_no_op() {
    let (_, session, state) = fixture();
    let unselected = state
        .clone()
        .reduce(ChatAction::SetDraft("hello".to_string()), &session, now())
        .reduce(ChatAction::Send, &session, now());
    assert_eq!(unselected.draft, "hello");
    assert_eq!(unselected.chats, state.chats);

    let blank = state
        .reduce(ChatAction::Select(ChatId(1)), &session, now())
        .reduce(ChatAction::SetDraft("   ".to_string()), &session, now())
        .reduce(ChatAction::Send, &session, now());
    assert_eq!(blank.selected_chat().expect("selected").messages.len(), 4);
}

#[test]
fn search_filters_conversations_by_name() {
    let (_, session, state) = fixture();
    let view = state
        .reduce(ChatAction::SetSearch("lisa".to_string()), &session, now())
        .view(now());
    let names: Vec<_> = view.chats.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Lisa Wang"]);
}

#[test]
fn open_with_reuses_existing_chat() {
    let (storage, _, mut state) = fixture();
    let marcus = storage.user(UserId(2)).expect("marcus");
    assert_eq!(state.open_with(marcus, now()), ChatId(1));
    assert_eq!(state.chats.len(), 3);

    let emma = storage.user(UserId(3)).expect("emma");
    let id = state.open_with(emma, now());
    assert_eq!(id, ChatId(4));
    assert_eq!(state.chats[0].user.id, UserId(3));
    assert_eq!(state.chats.len(), 4);
}
