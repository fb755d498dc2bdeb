//! User form: field parsing and validation before the store is called.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::users::{Attributes, NewUser, User, UserPatch};

/// Editable form fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Username,
    Email,
    Phone,
    Website,
    /// The `name` entry of the company bag.
    Company,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Username => "username",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Website => "website",
            Field::Company => "company",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "username" => Ok(Field::Username),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            "website" => Ok(Field::Website),
            "company" | "company.name" => Ok(Field::Company),
            other => Err(other.to_string()),
        }
    }
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// All validation failures for one submission, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors(pub Vec<FieldError>);

impl FormErrors {
    pub fn for_field(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

/// Raw text values as typed by the user. Empty optional fields mean absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company: String,
}

impl UserForm {
    /// Form prefilled from an existing user (edit dialog).
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            website: user.website.clone().unwrap_or_default(),
            company: user.company_name().unwrap_or_default().to_string(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Username => self.username = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Website => self.website = value,
            Field::Company => self.company = value,
        }
    }

    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = Vec::new();

        if self.name.chars().count() < 2 {
            errors.push(FieldError {
                field: Field::Name,
                message: "Name must be at least 2 characters",
            });
        }
        if self.username.chars().count() < 3 {
            errors.push(FieldError {
                field: Field::Username,
                message: "Username must be at least 3 characters",
            });
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError {
                field: Field::Email,
                message: "Please enter a valid email",
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FormErrors(errors))
        }
    }

    /// Validate and convert into fields for `add_user`.
    pub fn into_new_user(self) -> Result<NewUser, FormErrors> {
        self.validate()?;
        Ok(NewUser {
            company: company_bag(None, &self.company),
            phone: optional(&self.phone),
            website: optional(&self.website),
            name: self.name,
            username: self.username,
            email: self.email,
            address: None,
        })
    }

    /// Validate and build a patch touching only `touched` fields.
    ///
    /// The company name is written into the existing company bag so the
    /// other keys survive; the store itself replaces the bag whole.
    pub fn to_patch(&self, original: &User, touched: &[Field]) -> Result<UserPatch, FormErrors> {
        self.validate()?;

        let mut patch = UserPatch::default();
        for field in touched {
            match field {
                Field::Name => patch.name = Some(self.name.clone()),
                Field::Username => patch.username = Some(self.username.clone()),
                Field::Email => patch.email = Some(self.email.clone()),
                Field::Phone => patch.phone = Some(optional(&self.phone)),
                Field::Website => patch.website = Some(optional(&self.website)),
                Field::Company => {
                    patch.company = Some(company_bag(original.company.clone(), &self.company))
                }
            }
        }
        Ok(patch)
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn company_bag(existing: Option<Attributes>, name: &str) -> Option<Attributes> {
    let mut bag = existing.unwrap_or_default();
    match optional(name) {
        Some(name) => {
            bag.insert("name".to_string(), Value::String(name));
        }
        None => {
            bag.remove("name");
        }
    }
    (!bag.is_empty()).then_some(bag)
}

/// `local@domain.tld` with no whitespace and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|l| {
            !l.is_empty()
                && !l.starts_with('-')
                && !l.ends_with('-')
                && l.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
        && labels.last().is_some_and(|tld| tld.chars().count() >= 2)
}
