//! User profiles and accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AccountStatus, Email, Role, StoredPassword, UserId};

/// The profile attached to the current session and copied into orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: Email,
    /// Contact phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City or regency.
    pub city: String,
    /// Postal code.
    pub postal_code: String,
    /// Role deciding which surfaces the user sees.
    pub role: Role,
    /// Avatar image reference, if any.
    pub avatar: Option<String>,
    /// Free-form label shown next to reviews, e.g. `Mahasiswa`.
    pub profile_status: String,
}

impl UserProfile {
    /// A fresh customer profile with empty contact fields.
    #[must_use]
    pub fn new(id: UserId, name: String, email: Email) -> Self {
        Self {
            id,
            name,
            email,
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            postal_code: String::new(),
            role: Role::Customer,
            avatar: None,
            profile_status: String::new(),
        }
    }
}

/// A partial profile edit; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New street address.
    pub address: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New postal code.
    pub postal_code: Option<String>,
    /// New avatar reference.
    pub avatar: Option<String>,
    /// New profile label.
    pub profile_status: Option<String>,
}

impl ProfileUpdate {
    /// Merge the set fields into `profile`.
    pub fn apply(self, profile: &mut UserProfile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(phone) = self.phone {
            profile.phone = phone;
        }
        if let Some(address) = self.address {
            profile.address = address;
        }
        if let Some(city) = self.city {
            profile.city = city;
        }
        if let Some(postal_code) = self.postal_code {
            profile.postal_code = postal_code;
        }
        if let Some(avatar) = self.avatar {
            profile.avatar = Some(avatar);
        }
        if let Some(profile_status) = self.profile_status {
            profile.profile_status = profile_status;
        }
    }
}

/// An account record as the back office sees it: profile plus credentials
/// and bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    /// The user's profile.
    pub profile: UserProfile,
    /// Argon2 hash of the password.
    pub password: StoredPassword,
    /// When the account was created.
    pub joined_at: DateTime<Utc>,
    /// Account status label.
    pub status: AccountStatus,
}
