//! Orderings for filtered lists. Inputs are never mutated: each function
//! sorts a copy, and every sort is stable so equal keys keep input order.

use std::cmp::Ordering;

use shared::{
    criteria::{RequestSortKey, UserSortKey},
    domain::{SwapRequest, User},
};

pub fn sort_users(users: &[User], key: UserSortKey) -> Vec<User> {
    let mut ranked = users.to_vec();
    ranked.sort_by(|a, b| compare_users(a, b, key));
    ranked
}

pub fn compare_users(a: &User, b: &User, key: UserSortKey) -> Ordering {
    match key {
        UserSortKey::Rating => b.rating.total_cmp(&a.rating),
        UserSortKey::Swaps => b.swaps_completed.cmp(&a.swaps_completed),
        UserSortKey::Name => compare_names(&a.name, &b.name),
    }
}

pub fn sort_requests(requests: &[SwapRequest], key: RequestSortKey) -> Vec<SwapRequest> {
    let mut ranked = requests.to_vec();
    ranked.sort_by(|a, b| compare_requests(a, b, key));
    ranked
}

pub fn compare_requests(a: &SwapRequest, b: &SwapRequest, key: RequestSortKey) -> Ordering {
    match key {
        RequestSortKey::Newest => b.created_at.cmp(&a.created_at),
        RequestSortKey::Oldest => a.created_at.cmp(&b.created_at),
        RequestSortKey::Status => a.status.rank().cmp(&b.status.rank()),
    }
}

/// Case-folded comparison with a code-point tie-break, so "alex" and
/// "Alex" sit together but still order deterministically.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
#[path = "tests/ranking_tests.rs"]
mod tests;
