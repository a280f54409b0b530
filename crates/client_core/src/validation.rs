//! Login and signup form rules. Checks run in a fixed order and stop at the
//! first failure, which the caller shows as a notice.

use shared::error::ValidationError;

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    validate_email(email)
}

#[derive(Debug, Clone, Copy)]
pub struct SignupInput<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
    pub teach_skills: &'a [String],
    pub learn_skills: &'a [String],
}

pub fn validate_signup(input: SignupInput<'_>) -> Result<(), ValidationError> {
    if [input.name, input.email, input.password, input.confirm_password]
        .iter()
        .any(|field| field.is_empty())
    {
        return Err(ValidationError::MissingFields);
    }
    validate_email(input.email)?;
    if input.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    if input.password != input.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if input.teach_skills.is_empty() {
        return Err(ValidationError::NoTeachSkills);
    }
    if input.learn_skills.is_empty() {
        return Err(ValidationError::NoLearnSkills);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn login_requires_both_fields() {
        assert_eq!(
            validate_login("", "secret"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_login("a@b.c", ""),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(validate_login("nobody", "x"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_login("a@b", "x"), Ok(()));
    }

    #[test]
    fn signup_checks_run_in_order() {
        let teach = skills(&["React"]);
        let learn = skills(&["SQL"]);
        let valid = SignupInput {
            name: "Jo",
            email: "jo@example.com",
            password: "hunter22",
            confirm_password: "hunter22",
            teach_skills: &teach,
            learn_skills: &learn,
        };
        assert_eq!(validate_signup(valid), Ok(()));

        let missing = SignupInput { name: "", ..valid };
        assert_eq!(validate_signup(missing), Err(ValidationError::MissingFields));

        let bad_email = SignupInput {
            email: "jo.example.com",
            password: "abc",
            ..valid
        };
        assert_eq!(validate_signup(bad_email), Err(ValidationError::InvalidEmail));

        let short = SignupInput {
            password: "abc",
            confirm_password: "abc",
            ..valid
        };
        assert_eq!(
            validate_signup(short),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );

        let mismatch = SignupInput {
            confirm_password: "hunter23",
            ..valid
        };
        assert_eq!(validate_signup(mismatch), Err(ValidationError::PasswordMismatch));

        let no_teach = SignupInput {
            teach_skills: &[],
            ..valid
        };
        assert_eq!(validate_signup(no_teach), Err(ValidationError::NoTeachSkills));

        let no_learn = SignupInput {
            learn_skills: &[],
            ..valid
        };
        assert_eq!(validate_signup(no_learn), Err(ValidationError::NoLearnSkills));
    }

    #[test]
    fn password_length_counts_characters() {
        let teach = skills(&["React"]);
        let input = SignupInput {
            name: "Zoë",
            email: "zoe@example.com",
            password: "ééééé",
            confirm_password: "ééééé",
            teach_skills: &teach,
            learn_skills: &teach,
        };
        assert_eq!(
            validate_signup(input),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
    }
}
