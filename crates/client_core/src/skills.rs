//! Uniqueness-constrained skill lists used by the profile and signup forms.

/// Appends `candidate` unless it is empty or already listed (exact match).
/// Returns whether the list changed.
pub fn add(list: &mut Vec<String>, candidate: &str) -> bool {
    if candidate.is_empty() || list.iter().any(|skill| skill == candidate) {
        return false;
    }
    list.push(candidate.to_string());
    true
}

/// Removes the first occurrence of `target`. Returns whether the list changed.
pub fn remove(list: &mut Vec<String>, target: &str) -> bool {
    match list.iter().position(|skill| skill == target) {
        Some(index) => {
            list.remove(index);
            true
        }
        None => false,
    }
}

/// Vocabulary entries not yet in `list`, in vocabulary order.
pub fn available_choices<'a>(vocabulary: &'a [String], list: &[String]) -> Vec<&'a str> {
    vocabulary
        .iter()
        .filter(|skill| !list.contains(skill))
        .map(String::as_str)
        .collect()
}

/// A skill list plus the entry currently picked in its "add" dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillEditor {
    pub skills: Vec<String>,
    pub pending: String,
}

impl SkillEditor {
    pub fn new(skills: Vec<String>) -> Self {
        Self {
            skills,
            pending: String::new(),
        }
    }

    pub fn select(mut self, candidate: impl Into<String>) -> Self {
        self.pending = candidate.into();
        self
    }

    /// Adds the pending pick. The pick is cleared only when it was added.
    pub fn commit(mut self) -> Self {
        let pending = std::mem::take(&mut self.pending);
        if !add(&mut self.skills, &pending) {
            self.pending = pending;
        }
        self
    }

    pub fn remove(mut self, target: &str) -> Self {
        remove(&mut self.skills, target);
        self
    }

    pub fn available<'a>(&self, vocabulary: &'a [String]) -> Vec<&'a str> {
        available_choices(vocabulary, &self.skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn add_is_idempotent() {
        let mut skills = list(&["React"]);
        assert!(add(&mut skills, "Python"));
        let len = skills.len();
        assert!(!add(&mut skills, "Python"));
        assert_eq!(skills.len(), len);
    }

    #[test]
    fn add_ignores_empty_and_is_case_sensitive() {
        let mut skills = list(&["React"]);
        assert!(!add(&mut skills, ""));
        assert!(add(&mut skills, "react"));
        assert_eq!(skills, list(&["React", "react"]));
    }

    #[test]
    fn remove_then_add_restores_membership_not_order() {
        let mut skills = list(&["React", "JavaScript", "Python"]);
        assert!(remove(&mut skills, "React"));
        assert!(add(&mut skills, "React"));
        assert_eq!(skills, list(&["JavaScript", "Python", "React"]));

        let mut sorted = skills.clone();
        sorted.sort();
        let mut original = list(&["React", "JavaScript", "Python"]);
        original.sort();
        assert_eq!(sorted, original);
    }

    #[test]
    fn removing_a_missing_skill_is_a_no_op() {
        let mut skills = list(&["React"]);
        assert!(!remove(&mut skills, "Go"));
        assert_eq!(skills, list(&["React"]));
    }

    #[test]
    fn choices_exclude_current_list() {
        let vocabulary = list(&["React", "Python", "SQL"]);
        let skills = list(&["Python"]);
        assert_eq!(available_choices(&vocabulary, &skills), vec!["React", "SQL"]);
    }

    #[test]
    fn editor_keeps_rejected_pick() {
        let editor = SkillEditor::new(list(&["React"])).select("React").commit();
        assert_eq!(editor.pending, "React");
        assert_eq!(editor.skills.len(), 1);

        let editor = editor.select("SQL").commit();
        assert!(editor.pending.is_empty());
        assert_eq!(editor.skills, list(&["React", "SQL"]));

        let editor = editor.remove("React");
        assert_eq!(editor.skills, list(&["SQL"]));
    }
}
