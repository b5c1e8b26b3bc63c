//! The user profile store.
//!
//! Holds a single user record (contact details plus a shipping address) and
//! an editing flag. Field values are free-form strings; validation is the
//! form's concern (see [`crate::validate`]), not the store's. The full
//! profile is mirrored into the key-value store after every update; the
//! editing flag is UI state and is never persisted.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::{KeyValueStore, keys};

/// A shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// The user record.
///
/// Defaults to all-empty fields; a profile is never deleted, only reset
/// back to this default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

impl UserProfile {
    /// True iff every contact and address field is non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.phone.is_empty()
            && !self.address.street.is_empty()
            && !self.address.city.is_empty()
            && !self.address.state.is_empty()
            && !self.address.zip_code.is_empty()
            && !self.address.country.is_empty()
    }
}

/// A typed partial update for the profile's contact fields.
///
/// `None` leaves a field untouched; `Some` replaces it. Explicit named
/// fields stand in for the dynamic key-merging a looser storefront might
/// use.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A typed partial update for the address sub-record.
#[derive(Debug, Clone, Default)]
pub struct AddressUpdate {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

/// The profile store.
pub struct ProfileStore {
    profile: UserProfile,
    editing: bool,
    storage: Box<dyn KeyValueStore>,
}

impl ProfileStore {
    /// Initialize the profile from persisted storage.
    ///
    /// An absent `user` key yields the default empty profile; a malformed
    /// value is a startup-time error.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read or the persisted
    /// value does not decode as a profile.
    pub fn load(storage: Box<dyn KeyValueStore>) -> Result<Self> {
        let profile = match storage.get(keys::USER)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => UserProfile::default(),
        };
        Ok(Self {
            profile,
            editing: false,
            storage,
        })
    }

    /// The current profile.
    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Merge contact-field updates into the profile.
    ///
    /// # Errors
    ///
    /// Returns an error only when persisting the updated profile fails.
    pub fn update(&mut self, update: ProfileUpdate) -> Result<()> {
        if let Some(name) = update.name {
            self.profile.name = name;
        }
        if let Some(email) = update.email {
            self.profile.email = email;
        }
        if let Some(phone) = update.phone {
            self.profile.phone = phone;
        }
        tracing::debug!("profile updated");
        self.persist()
    }

    /// Merge address-field updates into the profile.
    ///
    /// # Errors
    ///
    /// Returns an error only when persisting the updated profile fails.
    pub fn update_address(&mut self, update: AddressUpdate) -> Result<()> {
        let address = &mut self.profile.address;
        if let Some(street) = update.street {
            address.street = street;
        }
        if let Some(city) = update.city {
            address.city = city;
        }
        if let Some(state) = update.state {
            address.state = state;
        }
        if let Some(zip_code) = update.zip_code {
            address.zip_code = zip_code;
        }
        if let Some(country) = update.country {
            address.country = country;
        }
        tracing::debug!("address updated");
        self.persist()
    }

    /// Restore the default empty profile.
    ///
    /// # Errors
    ///
    /// Returns an error only when persisting the reset profile fails.
    pub fn reset(&mut self) -> Result<()> {
        self.profile = UserProfile::default();
        tracing::debug!("profile reset");
        self.persist()
    }

    /// True iff every required profile field is populated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.profile.is_complete()
    }

    /// Whether the profile form is in edit mode. UI state only.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// Toggle edit mode. Has no business effect and is not persisted.
    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.profile)?;
        self.storage.set(keys::USER, &raw)?;
        Ok(())
    }
}
