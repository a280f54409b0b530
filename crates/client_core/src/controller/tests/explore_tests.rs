use super::*;
use storage::Storage;

fn users() -> Vec<User> {
    Storage::seeded().expect("seed fixture").list_users().to_vec()
}

fn names(view: &ExploreView) -> Vec<&str> {
    view.users.iter().map(|u| u.name.as_str()).collect()
}

#[test]
fn initial_view_lists_everyone_by_rating() {
    let view = ExploreState::default().view(&users());
    assert_eq!(
        names(&view),
        vec![
            "Marcus Rodriguez",
            "Lisa Wang",
            "Sarah Chen",
            "Alex Thompson",
            "Emma Johnson",
            "David Kim",
        ]
    );
    assert_eq!(view.active_filter_count, 0);
    assert!(!view.has_criteria);
}

#[test]
fn search_and_filters_compose() {
    let state = ExploreState::default()
        .reduce(ExploreAction::SetSearch("DEV".to_string()))
        .reduce(ExploreAction::SetSort(UserSortKey::Name));
    let view = state.view(&users());
    assert_eq!(
        names(&view),
        vec!["Alex Thompson", "David Kim", "Emma Johnson", "Marcus Rodriguez", "Sarah Chen"]
    );
    assert!(view.has_criteria);
    assert_eq!(view.active_filter_count, 0);

    let view = state
        .reduce(ExploreAction::SetLearnSkill("AWS".to_string()))
        .view(&users());
    assert_eq!(names(&view), vec!["Marcus Rodriguez"]);
    assert_eq!(view.active_filter_count, 1);
}

#[test]
fn teach_filter_with_no_match_yields_empty_list() {
    let view = ExploreState::default()
        .reduce(ExploreAction::SetTeachSkill("Docker".to_string()))
        .view(&users());
    assert!(view.users.is_empty());
    assert!(view.has_criteria);
}

#[test]
fn clear_filters_resets_criteria_and_sort() {
    let state = ExploreState::default()
        .reduce(ExploreAction::ToggleFilters)
        .reduce(ExploreAction::SetSearch("python".to_string()))
        .reduce(ExploreAction::SetTeachSkill("SQL".to_string()))
        .reduce(ExploreAction::SetLearnSkill("Blockchain".to_string()))
        .reduce(ExploreAction::SetSort(UserSortKey::Swaps));
    assert_eq!(state.active_filter_count(), 2);

    let cleared = state.reduce(ExploreAction::ClearFilters);
    assert!(cleared.search.is_empty());
    assert!(cleared.teach_skill.is_empty());
    assert!(cleared.learn_skill.is_empty());
    assert_eq!(cleared.sort, UserSortKey::Rating);
    assert!(cleared.show_filters);
}

#[test]
fn toggle_flips_filter_panel() {
    let state = ExploreState::default().reduce(ExploreAction::ToggleFilters);
    assert!(state.show_filters);
    assert!(!state.reduce(ExploreAction::ToggleFilters).show_filters);
}
