use super::*;
use shared::domain::{RequestId, RequestStatus, UserId};
use storage::Storage;

fn store() -> Storage {
    Storage::seeded().expect("seed fixture")
}

fn user<'a>(storage: &'a Storage, id: i64) -> &'a User {
    storage.user(UserId(id)).expect("fixture user")
}

#[test]
fn empty_term_matches_every_user() {
    let storage = store();
    assert!(storage.list_users().iter().all(|u| matches_search(u, "")));
}

#[test]
fn case_variants_of_the_name_match() {
    let storage = store();
    for u in storage.list_users() {
        let upper = u.name.to_uppercase();
        let lower_fragment = u.name[..3].to_lowercase();
        assert!(matches_search(u, &upper), "{}", u.name);
        assert!(matches_search(u, &lower_fragment), "{}", u.name);
    }
}

#[test]
fn search_reaches_bio_and_skill_lists() {
    let storage = store();
    let lisa = user(&storage, 5);
    assert!(matches_search(lisa, "real-world"));
    assert!(matches_search(lisa, "sql"));
    assert!(matches_search(lisa, "BLOCKCHAIN"));
    assert!(!matches_search(lisa, "figma"));
}

#[test]
fn teach_filter_requires_exact_skill_name() {
    let storage = store();
    let sarah = user(&storage, 1);
    assert!(matches_teach_filter(sarah, ""));
    assert!(matches_teach_filter(sarah, "Python"));
    assert!(!matches_teach_filter(sarah, "python"));
    assert!(!matches_teach_filter(sarah, "Machine Learning"));
}

#[test]
fn learn_filter_is_symmetric() {
    let storage = store();
    let sarah = user(&storage, 1);
    assert!(matches_learn_filter(sarah, "Machine Learning"));
    assert!(!matches_learn_filter(sarah, "Python"));
}

#[test]
fn user_criteria_and_all_predicates() {
    let storage = store();
    let criteria = UserCriteria {
        search: "data".to_string(),
        teach_skill: "Python".to_string(),
        learn_skill: String::new(),
    };
    let hits: Vec<_> = criteria
        .filter(storage.list_users())
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(hits, vec!["Sarah Chen", "Lisa Wang"]);

    let narrowed = UserCriteria {
        learn_skill: "Blockchain".to_string(),
        ..criteria
    };
    let hits: Vec<_> = narrowed
        .filter(storage.list_users())
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(hits, vec!["Lisa Wang"]);
}

#[test]
fn status_filter_all_is_a_sentinel() {
    let storage = store();
    let accepted = &storage.list_requests()[1];
    assert!(matches_status(accepted, StatusFilter::All));
    assert!(matches_status(
        accepted,
        StatusFilter::Only(RequestStatus::Accepted)
    ));
    assert!(!matches_status(
        accepted,
        StatusFilter::Only(RequestStatus::Pending)
    ));
}

#[test]
fn incoming_pending_requests_on_fixture() {
    let storage = store();
    let criteria = RequestCriteria::new(
        Direction::Incoming,
        StatusFilter::Only(RequestStatus::Pending),
    );
    let hits = criteria.filter(storage.list_requests());
    let expected: Vec<_> = storage
        .list_requests()
        .iter()
        .filter(|r| r.direction == Direction::Incoming && r.status == RequestStatus::Pending)
        .map(|r| r.id)
        .collect();
    let ids: Vec<_> = hits.iter().map(|r| r.id).collect();
    assert_eq!(ids, expected);
    assert_eq!(ids, vec![RequestId(1), RequestId(3)]);
    assert_eq!(hits[0].from_user.name, "Marcus Rodriguez");
    assert_eq!(hits[0].to_user.name, "Sarah Chen");
}

#[test]
fn outgoing_direction_excludes_incoming() {
    let storage = store();
    let criteria = RequestCriteria::new(Direction::Outgoing, StatusFilter::All);
    let ids: Vec<_> = criteria
        .filter(storage.list_requests())
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![RequestId(2), RequestId(4)]);
}
