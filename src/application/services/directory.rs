use crate::application::errors::RegistrationError;
use crate::domain::entities::User;
use crate::domain::rules;

pub const REGISTRATION_SUCCESSFUL: &str = "Registration successful!";
pub const LOGIN_WELCOME: &str = "Welcome, it is great to see you again";
pub const LOGIN_FAILED: &str = "Username or password incorrect, please try again";

/// In-memory directory of registered users, in registration order
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate every field and append the user.
    ///
    /// Duplicate usernames are accepted; login matches the first entry
    /// whose username and password both match.
    pub fn register_user(
        &mut self,
        username: &str,
        password: &str,
        cellphone: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<&'static str, RegistrationError> {
        if !rules::check_username(username) {
            tracing::warn!("Registration rejected: bad username format");
            return Err(RegistrationError::InvalidUsername);
        }
        if !rules::check_password_complexity(password) {
            tracing::warn!("Registration rejected for {}: weak password", username);
            return Err(RegistrationError::InvalidPassword);
        }
        if !rules::check_cell_phone_number(cellphone) {
            tracing::warn!("Registration rejected for {}: bad cell phone number", username);
            return Err(RegistrationError::InvalidCellphone);
        }

        self.users
            .push(User::new(username, password, cellphone, first_name, last_name));
        tracing::info!("Registered user {} ({} total)", username, self.users.len());
        Ok(REGISTRATION_SUCCESSFUL)
    }

    /// Add an already-built user without validation
    pub fn insert(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn login_user(&self, username: &str, password: &str) -> bool {
        self.login_index(username, password).is_some()
    }

    /// Position of the first user matching both credentials
    pub fn login_index(&self, username: &str, password: &str) -> Option<usize> {
        let index = self.users.iter().position(|u| u.matches(username, password));
        tracing::debug!(
            "Login attempt for {}: {}",
            username,
            if index.is_some() { "ok" } else { "failed" }
        );
        index
    }

    /// Does not say which credential was wrong
    pub fn return_login_status(&self, logged_in: bool) -> &'static str {
        if logged_in {
            LOGIN_WELCOME
        } else {
            LOGIN_FAILED
        }
    }

    pub fn find(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username() == username)
    }

    pub fn find_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.username() == username)
    }

    pub fn get(&self, index: usize) -> Option<&User> {
        self.users.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut User> {
        self.users.get_mut(index)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn reset(&mut self) {
        self.users.clear();
    }
}
