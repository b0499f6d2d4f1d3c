use std::fmt;

/// Represents a registered user in the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: String,
    password: String,
    cellphone: String,
    first_name: String,
    last_name: String,
    total_messages_sent: u32,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        cellphone: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            cellphone: cellphone.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            total_messages_sent: 0,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn cellphone(&self) -> &str {
        &self.cellphone
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn total_messages_sent(&self) -> u32 {
        self.total_messages_sent
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn set_cellphone(&mut self, cellphone: impl Into<String>) {
        self.cellphone = cellphone.into();
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    /// Called once per successfully sent message
    pub fn increment_total_messages(&mut self) {
        self.total_messages_sent += 1;
    }

    /// Exact, case-sensitive credential comparison
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.username)
    }
}
