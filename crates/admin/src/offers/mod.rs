//! Promotional offer construction engine.
//!
//! The one decision-dense corner of the console. Three mutually
//! exclusive offer shapes (single product, package, storewide delivery
//! discount), two editable discount representations (percentage or fixed
//! amount) canonicalized to a single server-side percentage, and a
//! product-price-dependent clamp so a fixed discount can never invalidate
//! a price.
//!
//! # Modules
//!
//! - [`validators`] - advisory per-keystroke field validators
//! - [`normalize`] - discount parsing, clamping and canonicalization
//! - [`draft`] - the in-progress offer as a tagged union
//! - [`resolver`] - variant-specific required fields and payload assembly
//! - [`submit`] - the submission orchestrator and its collaborator seams

pub mod draft;
pub mod normalize;
pub mod resolver;
pub mod submit;
pub mod validators;

pub use draft::{ImageSource, KindFields, OfferDraft, ProductSelection, SelectedProducts};
pub use normalize::DiscountType;
pub use submit::{ImageStore, OfferGateway, OfferSubmitter, SubmitOutcome};

use thiserror::Error;

/// Errors that halt an offer submission.
///
/// Every variant renders as the user-facing message of an error
/// notification; none of them clear the draft, so the admin can correct
/// and retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OfferFormError {
    /// A populated field failed its format validator.
    #[error("{0}")]
    Field(&'static str),

    /// A field required by the selected offer kind is empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A package offer needs at least one product.
    #[error("at least one product required")]
    EmptyPackage,

    /// A fixed discount cannot be canonicalized without a reference price.
    #[error("select a product with a known price before using a fixed discount")]
    MissingReferencePrice,

    /// End date precedes start date.
    #[error("end date must not be before start date")]
    InvalidDateRange,

    /// A submission for the same offer is already outstanding.
    #[error("this offer is already being saved")]
    SubmissionInFlight,

    /// The image-storage collaborator rejected the upload.
    #[error("image upload failed: {0}")]
    Upload(String),

    /// The platform rejected the submission.
    #[error("{0}")]
    Remote(String),
}
