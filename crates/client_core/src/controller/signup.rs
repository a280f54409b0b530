//! Signup form with the same skill editors the profile view uses.

use serde::Serialize;

use crate::{
    auth::{AuthKind, AuthRequest},
    controller::events::{Effect, Notice},
    skills::SkillEditor,
    validation::{validate_signup, SignupInput},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub bio: String,
    pub teach: SkillEditor,
    pub learn: SkillEditor,
    pub show_password: bool,
    pub show_confirm_password: bool,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupAction {
    SetName(String),
    SetEmail(String),
    SetPassword(String),
    SetConfirmPassword(String),
    SetBio(String),
    SelectTeachSkill(String),
    AddTeachSkill,
    RemoveTeachSkill(String),
    SelectLearnSkill(String),
    AddLearnSkill,
    RemoveLearnSkill(String),
    TogglePasswordVisibility,
    ToggleConfirmVisibility,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupView {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub teach_skills: Vec<String>,
    pub learn_skills: Vec<String>,
    pub available_teach_skills: Vec<String>,
    pub available_learn_skills: Vec<String>,
    pub loading: bool,
}

impl SignupState {
    pub fn reduce(mut self, action: SignupAction) -> (Self, Option<Effect>) {
        match action {
            SignupAction::SetName(name) => self.name = name,
            SignupAction::SetEmail(email) => self.email = email,
            SignupAction::SetPassword(password) => self.password = password,
            SignupAction::SetConfirmPassword(confirm) => self.confirm_password = confirm,
            SignupAction::SetBio(bio) => self.bio = bio,
            SignupAction::SelectTeachSkill(skill) => self.teach = self.teach.select(skill),
            SignupAction::AddTeachSkill => self.teach = self.teach.commit(),
            SignupAction::RemoveTeachSkill(skill) => self.teach = self.teach.remove(&skill),
            SignupAction::SelectLearnSkill(skill) => self.learn = self.learn.select(skill),
            SignupAction::AddLearnSkill => self.learn = self.learn.commit(),
            SignupAction::RemoveLearnSkill(skill) => self.learn = self.learn.remove(&skill),
            SignupAction::TogglePasswordVisibility => self.show_password = !self.show_password,
            SignupAction::ToggleConfirmVisibility => {
                self.show_confirm_password = !self.show_confirm_password
            }
            SignupAction::Submit => return self.submit(),
        }
        (self, None)
    }

    fn submit(mut self) -> (Self, Option<Effect>) {
        if self.loading {
            return (self, None);
        }
        let checked = validate_signup(SignupInput {
            name: &self.name,
            email: &self.email,
            password: &self.password,
            confirm_password: &self.confirm_password,
            teach_skills: &self.teach.skills,
            learn_skills: &self.learn.skills,
        });
        if let Err(error) = checked {
            return (self, Some(Effect::Notify(Notice::from(error))));
        }
        self.loading = true;
        let request = AuthRequest {
            kind: AuthKind::Signup,
            email: self.email.clone(),
            display_name: Some(self.name.clone()),
        };
        (self, Some(Effect::Authenticate(request)))
    }

    pub fn settle(self) -> Self {
        Self {
            loading: false,
            ..self
        }
    }

    pub fn view(&self, vocabulary: &[String]) -> SignupView {
        SignupView {
            name: self.name.clone(),
            email: self.email.clone(),
            bio: self.bio.clone(),
            teach_skills: self.teach.skills.clone(),
            learn_skills: self.learn.skills.clone(),
            available_teach_skills: self
                .teach
                .available(vocabulary)
                .into_iter()
                .map(str::to_string)
                .collect(),
            available_learn_skills: self
                .learn
                .available(vocabulary)
                .into_iter()
                .map(str::to_string)
                .collect(),
            loading: self.loading,
        }
    }
}

pub fn account_created_notice() -> Notice {
    Notice::info(
        "Account Created!",
        "Welcome to SkillSwap! Your account has been created successfully.",
    )
}

#[cfg(test)]
#[path = "tests/signup_tests.rs"]
mod tests;
