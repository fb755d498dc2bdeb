//! User records as they flow from the remote source into the store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque key/value bag (`address`, `company`). Passed through unchanged.
pub type Attributes = Map<String, Value>;

/// A user held by the store. Always carries an avatar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Attributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Attributes>,
    pub avatar: String,
}

impl User {
    /// The `company.name` entry, when the company bag has a string there.
    pub fn company_name(&self) -> Option<&str> {
        self.company
            .as_ref()
            .and_then(|c| c.get("name"))
            .and_then(Value::as_str)
    }
}

/// A user as delivered by the remote endpoint: no avatar yet.
///
/// Unknown fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawUser {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub address: Option<Attributes>,
    #[serde(default)]
    pub company: Option<Attributes>,
}

impl RawUser {
    /// Attach an avatar, producing a store-ready user.
    pub fn with_avatar(self, avatar: String) -> User {
        User {
            id: self.id,
            name: self.name,
            username: self.username,
            email: self.email,
            phone: self.phone,
            website: self.website,
            address: self.address,
            company: self.company,
            avatar,
        }
    }
}

/// Fields supplied when creating a user locally. `id` and `avatar` are
/// assigned by the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<Attributes>,
    pub company: Option<Attributes>,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub(crate) fn into_user(self, id: i64, avatar: String) -> User {
        User {
            id,
            name: self.name,
            username: self.username,
            email: self.email,
            phone: self.phone,
            website: self.website,
            address: self.address,
            company: self.company,
            avatar,
        }
    }
}

/// Partial update for an existing user.
///
/// `None` leaves a field untouched. Optional fields are doubly wrapped so a
/// patch can also clear them (`Some(None)`). There is no `id` field: an
/// update can never change a user's id. Nested bags are replaced whole,
/// not merged. A blank `avatar` is ignored; a user always keeps one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub address: Option<Option<Attributes>>,
    pub company: Option<Option<Attributes>>,
    pub avatar: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        *self == UserPatch::default()
    }

    /// Shallow merge onto `user`.
    pub fn apply(self, mut user: User) -> User {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(phone) = self.phone {
            user.phone = phone;
        }
        if let Some(website) = self.website {
            user.website = website;
        }
        if let Some(address) = self.address {
            user.address = address;
        }
        if let Some(company) = self.company {
            user.company = company;
        }
        if let Some(avatar) = self.avatar.filter(|a| !a.trim().is_empty()) {
            user.avatar = avatar;
        }
        user
    }
}
