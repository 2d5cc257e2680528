//! Citizen complaint flows: submit a new report, attach cleanup proof.
//!
//! ERROR HANDLING
//! ==============
//! Local validation runs first and short-circuits with zero backend calls.
//! Backend failures come back as `FormError::Api` and render the same way as
//! validation problems: one inline message, form left as it was.

#[cfg(test)]
#[path = "complaint_test.rs"]
mod complaint_test;

use crate::net::api::{self, ApiError, ComplaintSubmission};
use crate::net::backend::{Attachment, Backend};
use crate::net::types::{Complaint, GeoPoint};
use crate::util::validate::{ValidationError, validate_complaint, validate_proof};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FormError {
    /// Inline text for the form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Api(e) => e.user_message(),
        }
    }
}

/// Everything the submit form has collected so far.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComplaintDraft {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub location: Option<GeoPoint>,
    pub image: Option<Attachment>,
}

impl ComplaintDraft {
    /// Validate and freeze the draft into an upload.
    ///
    /// # Errors
    ///
    /// The first failing field check.
    pub fn to_submission(&self) -> Result<ComplaintSubmission, ValidationError> {
        let location = validate_complaint(&self.name, &self.phone, self.location, self.image.as_ref())?;
        let image = self.image.clone().ok_or(ValidationError::MissingImage)?;
        Ok(ComplaintSubmission {
            name: self.name.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            address: self.address.trim().to_owned(),
            location,
            image,
        })
    }
}

/// Validate then upload a complaint in one multipart request.
///
/// # Errors
///
/// `Validation` before any request, `Api` when the backend refuses.
pub async fn submit_complaint_draft<B: Backend>(backend: &B, draft: &ComplaintDraft) -> Result<(), FormError> {
    let submission = draft.to_submission()?;
    api::submit_complaint(backend, &submission).await?;
    Ok(())
}

/// Validate then upload a proof video for `complaint_id`.
///
/// # Errors
///
/// `Validation` for a missing id or video, `Api` when the backend refuses.
pub async fn upload_proof_draft<B: Backend>(
    backend: &B,
    complaint_id: Option<&str>,
    video: Option<&Attachment>,
) -> Result<(), FormError> {
    let (id, video) = validate_proof(complaint_id, video)?;
    api::upload_proof(backend, id, video).await?;
    Ok(())
}

/// Closed complaints for the past history view.
pub fn past_complaints(all: &[Complaint]) -> Vec<Complaint> {
    all.iter().filter(|c| c.status.is_terminal()).cloned().collect()
}
