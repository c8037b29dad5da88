//! Login / signup form. Submitting only validates and logs; there is no
//! identity provider behind it yet.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn heading(self) -> &'static str {
        match self {
            Self::Login => "Welcome back",
            Self::Signup => "Create your account",
        }
    }

    pub fn subheading(self) -> &'static str {
        match self {
            Self::Login => "Sign in to access your Synapse dashboard",
            Self::Signup => "Get started with your AI operating system",
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            Self::Login => "Log In",
            Self::Signup => "Sign Up",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthFieldError {
    NameRequired,
    InvalidEmail,
    PasswordRequired,
}

impl AuthFieldError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NameRequired => "Enter your full name",
            Self::InvalidEmail => "Enter a valid email address",
            Self::PasswordRequired => "Enter your password",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    /// Slide direction for the form transition: 1 towards signup, -1 back.
    pub direction: i8,
    pub show_password: bool,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self {
            mode: AuthMode::Login,
            direction: 1,
            show_password: false,
            name: String::new(),
            email: String::new(),
            password: String::new(),
        }
    }
}

impl AuthForm {
    pub fn switch_mode(&mut self, to: AuthMode) {
        self.direction = if to == AuthMode::Signup { 1 } else { -1 };
        self.mode = to;
        self.show_password = false;
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn validate(&self) -> Result<(), Vec<AuthFieldError>> {
        let mut errors = Vec::new();
        if self.mode == AuthMode::Signup && self.name.trim().is_empty() {
            errors.push(AuthFieldError::NameRequired);
        }
        let email = self.email.trim();
        let valid_email = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && !domain.is_empty());
        if !valid_email {
            errors.push(AuthFieldError::InvalidEmail);
        }
        if self.password.is_empty() {
            errors.push(AuthFieldError::PasswordRequired);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    pub fn submit(&self) -> Result<(), Vec<AuthFieldError>> {
        self.validate()?;
        tracing::info!(mode = ?self.mode, email = %self.email.trim(), "auth form submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_sets_direction_and_hides_password() {
        let mut form = AuthForm::default();
        form.toggle_password();
        form.switch_mode(AuthMode::Signup);
        assert_eq!(form.direction, 1);
        assert!(!form.show_password);
        form.switch_mode(AuthMode::Login);
        assert_eq!(form.direction, -1);
    }

    #[test]
    fn login_does_not_need_name() {
        let form = AuthForm {
            email: "ada@example.com".into(),
            password: "hunter2".into(),
            ..AuthForm::default()
        };
        assert!(form.submit().is_ok());
    }

    #[test]
    fn signup_reports_every_missing_field() {
        let mut form = AuthForm::default();
        form.switch_mode(AuthMode::Signup);
        form.email = "not-an-email".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                AuthFieldError::NameRequired,
                AuthFieldError::InvalidEmail,
                AuthFieldError::PasswordRequired,
            ]
        );
    }
}
