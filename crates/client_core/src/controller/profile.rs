//! Profile view: a local editable copy of the viewer's profile.
//!
//! Saving keeps the edited copy in this view only; the session viewer is
//! never changed. Cancel restores the session viewer.

use serde::Serialize;
use shared::domain::Profile;

use crate::{controller::events::Notice, format::format_joined, skills, Session};

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileState {
    pub profile: Profile,
    pub editing: bool,
    pub new_teach_skill: String,
    pub new_learn_skill: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileAction {
    ToggleEdit,
    SetName(String),
    SetEmail(String),
    SetBio(String),
    SelectTeachSkill(String),
    AddTeachSkill,
    RemoveTeachSkill(String),
    SelectLearnSkill(String),
    AddLearnSkill,
    RemoveLearnSkill(String),
    Save,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub initials: String,
    pub email: String,
    pub bio: String,
    pub editing: bool,
    pub teach_skills: Vec<String>,
    pub learn_skills: Vec<String>,
    pub available_teach_skills: Vec<String>,
    pub available_learn_skills: Vec<String>,
    pub rating: f64,
    pub swaps_completed: u32,
    pub member_since: String,
}

impl ProfileState {
    pub fn new(session: &Session) -> Self {
        Self {
            profile: session.viewer().clone(),
            editing: false,
            new_teach_skill: String::new(),
            new_learn_skill: String::new(),
        }
    }

    pub fn reduce(mut self, action: ProfileAction, session: &Session) -> (Self, Option<Notice>) {
        match action {
            ProfileAction::ToggleEdit => self.editing = !self.editing,
            ProfileAction::SetName(name) => self.profile.user.name = name,
            ProfileAction::SetEmail(email) => self.profile.email = email,
            ProfileAction::SetBio(bio) => self.profile.user.bio = bio,
            ProfileAction::SelectTeachSkill(skill) => self.new_teach_skill = skill,
            ProfileAction::AddTeachSkill => {
                if skills::add(&mut self.profile.user.teach_skills, &self.new_teach_skill) {
                    self.new_teach_skill.clear();
                }
            }
            ProfileAction::RemoveTeachSkill(skill) => {
                skills::remove(&mut self.profile.user.teach_skills, &skill);
            }
            ProfileAction::SelectLearnSkill(skill) => self.new_learn_skill = skill,
            ProfileAction::AddLearnSkill => {
                if skills::add(&mut self.profile.user.learn_skills, &self.new_learn_skill) {
                    self.new_learn_skill.clear();
                }
            }
            ProfileAction::RemoveLearnSkill(skill) => {
                skills::remove(&mut self.profile.user.learn_skills, &skill);
            }
            ProfileAction::Save => {
                self.editing = false;
                return (
                    self,
                    Some(Notice::info(
                        "Profile Updated!",
                        "Your profile has been successfully updated.",
                    )),
                );
            }
            ProfileAction::Cancel => {
                return (Self::new(session), None);
            }
        }
        (self, None)
    }

    pub fn view(&self, vocabulary: &[String]) -> ProfileView {
        let user = &self.profile.user;
        ProfileView {
            name: user.name.clone(),
            initials: user.initials(),
            email: self.profile.email.clone(),
            bio: user.bio.clone(),
            editing: self.editing,
            teach_skills: user.teach_skills.clone(),
            learn_skills: user.learn_skills.clone(),
            available_teach_skills: owned(skills::available_choices(
                vocabulary,
                &user.teach_skills,
            )),
            available_learn_skills: owned(skills::available_choices(
                vocabulary,
                &user.learn_skills,
            )),
            rating: user.rating,
            swaps_completed: user.swaps_completed,
            member_since: format_joined(self.profile.joined_date),
        }
    }
}

fn owned(choices: Vec<&str>) -> Vec<String> {
    choices.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
#[path = "tests/profile_tests.rs"]
mod tests;
