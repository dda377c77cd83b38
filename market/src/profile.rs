//! User profile and its view/edit toggle.
//!
//! DESIGN
//! ======
//! The editor works on an independent copy of the editable fields. Saving
//! hands the edits back to the caller for the update boundary and returns to
//! the read-only view without applying them; the displayed profile only
//! changes when a new one is loaded. Cancelling resets the copy.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

/// Read-only aggregate stats shown beside the profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub sales: u32,
    pub purchases: u32,
    pub rating: f32,
    pub response_time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub joined_on: Date,
    pub bio: String,
    pub stats: ProfileStats,
}

impl UserProfile {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[must_use]
    pub fn initials(&self) -> String {
        self.first_name.chars().take(1).chain(self.last_name.chars().take(1)).collect()
    }

    /// `Member since` line, e.g. `January 2024`.
    #[must_use]
    pub fn member_since(&self) -> String {
        let format = format_description!("[month repr:long] [year]");
        self.joined_on.format(&format).unwrap_or_else(|_| self.joined_on.year().to_string())
    }
}

/// Editable profile fields addressable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Phone,
    Location,
    Bio,
}

impl ProfileField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Location => "Location",
            Self::Bio => "Bio",
        }
    }
}

/// Working copy of the editable fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
}

impl ProfileForm {
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            location: profile.location.clone(),
            bio: profile.bio.clone(),
        }
    }

    #[must_use]
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Location => &self.location,
            ProfileField::Bio => &self.bio,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Location => &mut self.location,
            ProfileField::Bio => &mut self.bio,
        };
        *slot = value.into();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    View,
    Edit,
}

/// Tabs on the profile page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Profile,
    Activity,
    Settings,
}

impl ProfileTab {
    pub const ALL: [Self; 3] = [Self::Profile, Self::Activity, Self::Settings];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Activity => "Activity",
            Self::Settings => "Settings",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileEditor {
    profile: UserProfile,
    mode: EditorMode,
    form: ProfileForm,
}

impl ProfileEditor {
    #[must_use]
    pub fn new(profile: UserProfile) -> Self {
        let form = ProfileForm::from_profile(&profile);
        Self { profile, mode: EditorMode::View, form }
    }

    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    #[must_use]
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    #[must_use]
    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.mode == EditorMode::Edit
    }

    /// Enter edit mode with a fresh copy of the profile fields.
    pub fn begin_edit(&mut self) {
        self.form = ProfileForm::from_profile(&self.profile);
        self.mode = EditorMode::Edit;
    }

    /// The header's edit button: enters edit mode or leaves it discarding edits.
    pub fn toggle_edit(&mut self) {
        match self.mode {
            EditorMode::View => self.begin_edit(),
            EditorMode::Edit => self.cancel(),
        }
    }

    /// Write one field. Ignored outside edit mode.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        if self.is_editing() {
            self.form.set(field, value);
        }
    }

    /// Leave edit mode and hand back the edits for the update boundary.
    /// The displayed profile is not changed.
    pub fn save(&mut self) -> ProfileForm {
        let edits = std::mem::replace(&mut self.form, ProfileForm::from_profile(&self.profile));
        self.mode = EditorMode::View;
        edits
    }

    /// Leave edit mode and reset the form to the profile's values.
    pub fn cancel(&mut self) {
        self.form = ProfileForm::from_profile(&self.profile);
        self.mode = EditorMode::View;
    }
}
