use std::fmt::Display;

/// Talk to the GitHub GraphQL API
pub mod gql;
pub mod list;
/// Print sponsors as a table
pub mod table;

use crate::error::ListSponsorsError;

/// The login of the account whose sponsors we want
#[derive(Debug, Clone, Hash, Eq, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct User(pub String);

/// The login of a sponsoring account, be it a user or an organization
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq, serde::Deserialize)]
#[serde(transparent)]
pub struct Sponsor(pub String);

impl Sponsor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for User {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for User {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Sponsor {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Anything that can find the sponsors of a user
pub trait SponsorLister {
    fn list_sponsors(&self, user: &User) -> Result<Vec<Sponsor>, ListSponsorsError>;
}

/// Anything that can show a list of sponsors to someone
pub trait SponsorListRenderer {
    fn render(&mut self, sponsors: &[Sponsor]) -> std::io::Result<()>;
}
