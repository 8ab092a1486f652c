use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a registered shop member.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    /// Lowercased, unique login email.
    pub email: String,
    /// Argon2 PHC string; never rendered.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    /// Optional URL of the profile picture.
    pub profile_image: Option<String>,
    /// Grants access to the admin dashboard.
    pub is_admin: bool,
    /// Registration date.
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload required to insert a new member.
#[derive(Debug, Clone)]
pub struct NewMember {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub is_admin: bool,
}

impl NewMember {
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        let email: String = email.into();
        Self {
            email: email.to_lowercase(),
            password_hash: password_hash.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: None,
            profile_image: None,
            is_admin: false,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_profile_image(mut self, profile_image: impl Into<String>) -> Self {
        self.profile_image = Some(profile_image.into());
        self
    }

    /// Grant or withhold admin access. There is no in-app promotion path;
    /// the flag is owned by the data store.
    pub fn admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }
}
