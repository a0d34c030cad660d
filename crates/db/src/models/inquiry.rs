//! Inquiry entity model and DTOs.

use intake_core::coerce::{optional_f64, optional_i32, optional_text};
use intake_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `inquiries` table.
///
/// `id` and `submission_date` are assigned by the store and never change.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: DbId,
    pub submission_date: Timestamp,
    pub status: String,
    pub client_name: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub project_name: Option<String>,
    pub project_description: Option<String>,
    pub due_date: Option<String>,
    pub budget: Option<f64>,
    pub duration: Option<i32>,
}

impl Inquiry {
    /// The client-editable part of the record.
    pub fn fields(&self) -> InquiryFields {
        InquiryFields {
            client_name: self.client_name.clone(),
            contact_person: self.contact_person.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            project_name: self.project_name.clone(),
            project_description: self.project_description.clone(),
            due_date: self.due_date.clone(),
            budget: self.budget,
            duration: self.duration,
        }
    }
}

/// Mutable inquiry fields, as submitted by the public form or the admin UI.
///
/// Every field is optional; absent values are stored as NULL. `id`, `status`
/// and `submissionDate` in an incoming body are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryFields {
    #[serde(default, deserialize_with = "optional_text")]
    pub client_name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub contact_person: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub project_name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub project_description: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub due_date: Option<String>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub budget: Option<f64>,
    #[serde(default, deserialize_with = "optional_i32")]
    pub duration: Option<i32>,
}

/// DTO for the public submission endpoint.
pub type CreateInquiry = InquiryFields;

/// DTO for a full-field overwrite. Does not touch `status`.
pub type UpdateInquiry = InquiryFields;

/// DTO for `PATCH /projects/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatus {
    pub status: String,
}
