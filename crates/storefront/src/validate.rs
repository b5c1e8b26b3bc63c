//! Profile form validation.
//!
//! Validation belongs to the presentation form, not the store: a draft
//! [`ProfileForm`] is checked as a whole, failures are collected per field,
//! and only a clean form is turned into store updates. A failed validation
//! never mutates store state.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::profile::{Address, AddressUpdate, ProfileUpdate, UserProfile};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s()+-]+$").expect("valid phone pattern"));

static ZIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("valid ZIP pattern"));

/// The profile form's fields, used to key validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Street,
    City,
    State,
    ZipCode,
    Country,
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Street => "street",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zipCode",
            Self::Country => "country",
        };
        write!(f, "{label}")
    }
}

/// Per-field validation failures, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} form field(s) failed validation", errors.len())]
pub struct ValidationErrors {
    errors: Vec<(ProfileField, &'static str)>,
}

impl ValidationErrors {
    fn push(&mut self, field: ProfileField, message: &'static str) {
        self.errors.push((field, message));
    }

    /// True when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: ProfileField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| *message)
    }

    /// Iterate failures in form order.
    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &'static str)> + '_ {
        self.errors.iter().copied()
    }
}

/// A draft of the profile as the form edits it.
///
/// Seed it from the current profile, apply the user's input, then
/// [`ProfileForm::validate`] before converting it into store updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

impl ProfileForm {
    /// Seed a form from the currently stored profile.
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            address: profile.address.clone(),
        }
    }

    /// Check every field, collecting all failures.
    ///
    /// # Errors
    ///
    /// Returns the per-field failure collection when any field is invalid.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.name.trim().is_empty() {
            errors.push(ProfileField::Name, "Name is required");
        }

        if self.email.trim().is_empty() {
            errors.push(ProfileField::Email, "Email is required");
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            errors.push(ProfileField::Email, "Invalid email format");
        }

        if self.phone.trim().is_empty() {
            errors.push(ProfileField::Phone, "Phone is required");
        } else if !PHONE_PATTERN.is_match(&self.phone) {
            errors.push(ProfileField::Phone, "Invalid phone format");
        }

        if self.address.street.trim().is_empty() {
            errors.push(ProfileField::Street, "Street address is required");
        }

        if self.address.city.trim().is_empty() {
            errors.push(ProfileField::City, "City is required");
        }

        if self.address.state.trim().is_empty() {
            errors.push(ProfileField::State, "State is required");
        }

        if self.address.zip_code.trim().is_empty() {
            errors.push(ProfileField::ZipCode, "ZIP code is required");
        } else if !ZIP_PATTERN.is_match(&self.address.zip_code) {
            errors.push(ProfileField::ZipCode, "Invalid ZIP code format");
        }

        if self.address.country.trim().is_empty() {
            errors.push(ProfileField::Country, "Country is required");
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Split a (validated) form into the two store updates.
    #[must_use]
    pub fn into_updates(self) -> (ProfileUpdate, AddressUpdate) {
        (
            ProfileUpdate {
                name: Some(self.name),
                email: Some(self.email),
                phone: Some(self.phone),
            },
            AddressUpdate {
                street: Some(self.address.street),
                city: Some(self.address.city),
                state: Some(self.address.state),
                zip_code: Some(self.address.zip_code),
                country: Some(self.address.country),
            },
        )
    }
}
