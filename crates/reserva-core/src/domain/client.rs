//! Client entity.

use crate::{ClientId, SortKey};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A client who books rooms.
///
/// `document` is the business key: the DAO layer enforces its uniqueness
/// with an existence check before insert/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Client {
    /// Primary key (`evp_client.clientId`).
    pub id: ClientId,

    /// Identity document number; unique across clients.
    #[validate(length(min = 1, max = 32))]
    pub document: String,

    /// Kind of identity document (ID card, passport, ...).
    #[validate(length(min = 1, max = 16))]
    pub document_type: String,

    /// Client's first name.
    #[validate(length(min = 1, max = 64))]
    pub first_name: String,

    /// Client's surname.
    #[validate(length(min = 1, max = 64))]
    pub sur_name: String,

    /// Landline phone number.
    #[validate(length(max = 20))]
    pub phone_number: String,

    /// Mobile phone number.
    #[validate(length(max = 20))]
    pub mobile_number: String,

    /// Contact email address.
    #[validate(email)]
    pub email: String,
}

impl Client {
    /// Creates a not-yet-persisted client (id 0).
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        document: String,
        document_type: String,
        first_name: String,
        sur_name: String,
        phone_number: String,
        mobile_number: String,
        email: String,
    ) -> Self {
        Self {
            id: ClientId::default(),
            document,
            document_type,
            first_name,
            sur_name,
            phone_number,
            mobile_number,
            email,
        }
    }

    /// Returns a copy with the given primary key.
    #[must_use]
    pub fn with_id(mut self, id: ClientId) -> Self {
        self.id = id;
        self
    }

    /// Returns the client's full name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.sur_name)
    }
}

/// Allow-listed sortable columns of `evp_client`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientSortKey {
    /// Sort by identity document.
    Document,
    /// Sort by first name.
    FirstName,
    /// Sort by surname.
    SurName,
    /// Sort by email address.
    Email,
}

impl SortKey for ClientSortKey {
    fn column(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::FirstName => "firstName",
            Self::SurName => "surName",
            Self::Email => "email",
        }
    }
}
