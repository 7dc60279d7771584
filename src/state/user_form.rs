//! User-data form state and the `users` submission log.
//!
//! DESIGN
//! ======
//! Submissions accumulate as a JSON array. Existing entries are kept as raw
//! JSON values so appending never drops records written in another shape.
//! A value that is not a JSON array is treated as an empty log.

#[cfg(test)]
#[path = "user_form_test.rs"]
mod user_form_test;

use serde::{Deserialize, Serialize};

use crate::config::USERS_KEY;
use crate::storage::{self, KeyValueStore, StorageError};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

/// One saved submission: a generated id plus the form fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    #[serde(flatten)]
    pub data: UserData,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserField {
    Name,
    Address,
    Email,
    Phone,
}

impl UserField {
    pub const ALL: [UserField; 4] = [UserField::Name, UserField::Address, UserField::Email, UserField::Phone];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            UserField::Name => "Name",
            UserField::Address => "Address",
            UserField::Email => "Email",
            UserField::Phone => "Phone",
        }
    }

    /// Form control name, matching the JSON field.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Address => "address",
            UserField::Email => "email",
            UserField::Phone => "phone",
        }
    }

    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            UserField::Email => "email",
            UserField::Phone => "tel",
            UserField::Name | UserField::Address => "text",
        }
    }
}

/// Form fields plus the unsaved-changes flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFormState {
    pub data: UserData,
    pub dirty: bool,
}

impl UserFormState {
    #[must_use]
    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::Name => &self.data.name,
            UserField::Address => &self.data.address,
            UserField::Email => &self.data.email,
            UserField::Phone => &self.data.phone,
        }
    }

    /// Update one field and mark the form dirty.
    pub fn set_field(&mut self, field: UserField, value: String) {
        let slot = match field {
            UserField::Name => &mut self.data.name,
            UserField::Address => &mut self.data.address,
            UserField::Email => &mut self.data.email,
            UserField::Phone => &mut self.data.phone,
        };
        *slot = value;
        self.dirty = true;
    }

    /// Required fields that are empty or whitespace.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<UserField> {
        UserField::ALL.into_iter().filter(|f| self.field(*f).trim().is_empty()).collect()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Raw entries of the submission log; absent means empty.
pub fn load_entries(store: &dyn KeyValueStore) -> Result<Vec<serde_json::Value>, StorageError> {
    Ok(storage::load_json::<Vec<serde_json::Value>>(store, USERS_KEY)?.unwrap_or_default())
}

/// Append `data` with a fresh id to the submission log.
pub fn append_record(store: &dyn KeyValueStore, data: &UserData) -> Result<UserRecord, StorageError> {
    let mut entries = match load_entries(store) {
        Ok(entries) => entries,
        Err(StorageError::Malformed { key, source }) => {
            log::warn!("discarding malformed `{key}` log: {source}");
            Vec::new()
        }
        Err(e) => return Err(e),
    };
    let record = UserRecord { id: uuid::Uuid::new_v4().to_string(), data: data.clone() };
    let value =
        serde_json::to_value(&record).map_err(|source| StorageError::Serialize { key: USERS_KEY.to_owned(), source })?;
    entries.push(value);
    storage::save_json(store, USERS_KEY, &entries)?;
    Ok(record)
}
