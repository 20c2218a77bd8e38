//! The offer submission orchestrator.
//!
//! Runs the save-time control flow in one fixed order: field validators,
//! variant-specific required checks, the image upload when a local file
//! is attached, payload assembly with the canonical discount, then the
//! kind-resolved create endpoint or the shared update endpoint. The
//! first failure halts everything - no partial submission ever reaches
//! the platform, and the caller's draft is left intact for a retry.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use tracing::{info, instrument};

use super::OfferFormError;
use super::draft::{ImageSource, KindFields, OfferDraft};
use super::normalize::DiscountType;
use super::resolver;
use super::validators;
use crate::platform::{
    DeliveryOfferPayload, LocalImage, Offer, OfferPayload, PackageOfferPayload, PlatformClient,
    PlatformError, SingleOfferPayload, UploadedImage,
};

/// Fallback message when the platform gives no structured error body.
const GENERIC_FAILURE: &str = "could not save the offer, please try again";

/// The offer endpoints the orchestrator drives (spec'd by the platform
/// API: creation is kind-split, updates share one endpoint).
#[allow(async_fn_in_trait)]
pub trait OfferGateway {
    async fn create_single_offer(&self, payload: &SingleOfferPayload)
    -> Result<Offer, PlatformError>;
    async fn create_package_offer(
        &self,
        payload: &PackageOfferPayload,
    ) -> Result<Offer, PlatformError>;
    async fn create_delivery_offer(
        &self,
        payload: &DeliveryOfferPayload,
    ) -> Result<Offer, PlatformError>;
    async fn update_offer(
        &self,
        id: &souq_core::OfferId,
        payload: &OfferPayload,
    ) -> Result<Offer, PlatformError>;
}

/// The image-storage collaborator.
#[allow(async_fn_in_trait)]
pub trait ImageStore {
    async fn upload_image(&self, image: &LocalImage) -> Result<UploadedImage, PlatformError>;
}

impl OfferGateway for PlatformClient {
    async fn create_single_offer(
        &self,
        payload: &SingleOfferPayload,
    ) -> Result<Offer, PlatformError> {
        Self::create_single_offer(self, payload).await
    }

    async fn create_package_offer(
        &self,
        payload: &PackageOfferPayload,
    ) -> Result<Offer, PlatformError> {
        Self::create_package_offer(self, payload).await
    }

    async fn create_delivery_offer(
        &self,
        payload: &DeliveryOfferPayload,
    ) -> Result<Offer, PlatformError> {
        Self::create_delivery_offer(self, payload).await
    }

    async fn update_offer(
        &self,
        id: &souq_core::OfferId,
        payload: &OfferPayload,
    ) -> Result<Offer, PlatformError> {
        Self::update_offer(self, id, payload).await
    }
}

impl ImageStore for PlatformClient {
    async fn upload_image(&self, image: &LocalImage) -> Result<UploadedImage, PlatformError> {
        Self::upload_image(self, image).await
    }
}

/// The saved offer plus what was done with it.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// The record the platform returned.
    pub offer: Offer,
    /// True for updates, false for creations.
    pub updated: bool,
}

/// Orchestrates offer submissions against the gateway and image store.
///
/// Holds the in-flight set: a second save of the same offer (or a second
/// create for the same vendor's dialog) is rejected while the first is
/// outstanding. The slot is released when the submission completes,
/// whether it succeeded or failed.
pub struct OfferSubmitter<G, S> {
    gateway: G,
    images: S,
    in_flight: Mutex<HashSet<String>>,
}

impl<G: OfferGateway, S: ImageStore> OfferSubmitter<G, S> {
    /// Create a submitter over the given collaborators.
    pub fn new(gateway: G, images: S) -> Self {
        Self {
            gateway,
            images,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Run one submission, strictly ordered, first failure halts.
    ///
    /// # Errors
    ///
    /// Returns an [`OfferFormError`] naming the first thing that blocked
    /// the save. The draft is never consumed - the dialog keeps it for
    /// correction and retry.
    #[instrument(skip(self, draft), fields(kind = %draft.kind(), editing = draft.offer_id.is_some()))]
    pub async fn submit(&self, draft: &OfferDraft) -> Result<SubmitOutcome, OfferFormError> {
        let _slot = InFlightSlot::acquire(&self.in_flight, submission_key(draft))?;

        // 1. Format validators over the fields the current kind owns.
        //    Stale errors from a previous kind's fields are irrelevant by
        //    construction - the union dropped those fields.
        run_field_validators(draft)?;

        // 2. Variant-specific required fields.
        resolver::check_required(draft)?;

        // 3. Upload a pending local image before touching the payload.
        let image_url = match &draft.image {
            ImageSource::Pending(local) => Some(self.upload(local).await?),
            ImageSource::Remote(url) => Some(url.clone()),
            ImageSource::None => None,
        };

        // 4. Canonical payload (includes the fixed-to-percentage
        //    conversion; an unconvertible discount halts here).
        let payload = resolver::build_payload(draft, image_url)?;

        // 5. One endpoint per resolved variant for creation; updates
        //    share an endpoint but keep the variant payload.
        let (offer, updated) = match &draft.offer_id {
            Some(id) => {
                let offer = self
                    .gateway
                    .update_offer(id, &payload)
                    .await
                    .map_err(remote_error)?;
                (offer, true)
            }
            None => {
                let offer = match &payload {
                    OfferPayload::Single(p) => self.gateway.create_single_offer(p).await,
                    OfferPayload::Package(p) => self.gateway.create_package_offer(p).await,
                    OfferPayload::Delivery(p) => self.gateway.create_delivery_offer(p).await,
                }
                .map_err(remote_error)?;
                (offer, false)
            }
        };

        info!(offer_id = %offer.id, kind = %payload.kind(), updated, "Offer saved");
        Ok(SubmitOutcome { offer, updated })
    }

    async fn upload(&self, local: &LocalImage) -> Result<String, OfferFormError> {
        self.images
            .upload_image(local)
            .await
            .map(|stored| stored.url)
            .map_err(|e| {
                OfferFormError::Upload(
                    e.server_message()
                        .unwrap_or("the file was not accepted")
                        .to_string(),
                )
            })
    }
}

/// Map a platform rejection to the user-facing message: the server's
/// structured message when present, else the generic fallback.
fn remote_error(e: PlatformError) -> OfferFormError {
    OfferFormError::Remote(
        e.server_message()
            .map_or_else(|| GENERIC_FAILURE.to_string(), str::to_string),
    )
}

/// Key identifying one dialog's submission: the offer for edits, the
/// vendor's add-dialog for creates.
fn submission_key(draft: &OfferDraft) -> String {
    match (&draft.offer_id, draft.vendor_id()) {
        (Some(id), _) => format!("offer:{id}"),
        (None, Some(vendor)) => format!("new:{vendor}"),
        (None, None) => "new".to_string(),
    }
}

/// Validators applicable to the fields the current kind owns. Empty
/// fields pass here (required-ness is step 2's concern).
fn run_field_validators(draft: &OfferDraft) -> Result<(), OfferFormError> {
    let check = |result: Option<&'static str>| result.map_or(Ok(()), |msg| Err(OfferFormError::Field(msg)));

    match draft.fields() {
        KindFields::Single {
            discount_type,
            discount_input,
            ..
        } => {
            check(validators::validate_name_ar(&draft.name_ar))?;
            check(validators::validate_name_en(&draft.name_en))?;
            check(discount_validator(*discount_type)(discount_input))?;
        }
        KindFields::Package {
            bundle_price_input, ..
        } => {
            check(validators::validate_name_ar(&draft.name_ar))?;
            check(validators::validate_name_en(&draft.name_en))?;
            check(validators::validate_price(bundle_price_input))?;
        }
        KindFields::Delivery {
            discount_type,
            discount_input,
        } => {
            // Delivery offers are unnamed; name errors never apply
            check(discount_validator(*discount_type)(discount_input))?;
        }
    }
    Ok(())
}

const fn discount_validator(ty: DiscountType) -> fn(&str) -> Option<&'static str> {
    match ty {
        DiscountType::Percentage => validators::validate_percentage,
        DiscountType::Fixed => validators::validate_price,
    }
}

/// RAII slot in the in-flight set. Acquire inserts the key; drop removes
/// it, so the slot is released on success and failure alike. The lock is
/// only held for the insert/remove, never across an await.
struct InFlightSlot<'a> {
    keys: &'a Mutex<HashSet<String>>,
    key: String,
}

impl<'a> InFlightSlot<'a> {
    fn acquire(keys: &'a Mutex<HashSet<String>>, key: String) -> Result<Self, OfferFormError> {
        let mut guard = keys.lock().unwrap_or_else(PoisonError::into_inner);
        if !guard.insert(key.clone()) {
            return Err(OfferFormError::SubmissionInFlight);
        }
        drop(guard);
        Ok(Self { keys, key })
    }
}

impl Drop for InFlightSlot<'_> {
    fn drop(&mut self) {
        self.keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::offers::draft::ProductSelection;
    use crate::platform::OfferKind;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use souq_core::{OfferId, ProductId, VendorId};
    use std::sync::Mutex as StdMutex;

    /// Gateway fake that records which endpoint got which payload.
    #[derive(Default)]
    struct FakeGateway {
        calls: StdMutex<Vec<String>>,
        payloads: StdMutex<Vec<serde_json::Value>>,
        fail_with_message: Option<String>,
    }

    impl FakeGateway {
        fn failing(message: &str) -> Self {
            Self {
                fail_with_message: Some(message.to_string()),
                ..Self::default()
            }
        }

        fn record(&self, endpoint: &str, payload: serde_json::Value) -> Result<Offer, PlatformError> {
            self.calls.lock().unwrap().push(endpoint.to_string());
            self.payloads.lock().unwrap().push(payload);
            match &self.fail_with_message {
                Some(message) => Err(PlatformError::Api {
                    status: 422,
                    message: message.clone(),
                }),
                None => Ok(sample_offer()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl OfferGateway for &FakeGateway {
        async fn create_single_offer(
            &self,
            payload: &SingleOfferPayload,
        ) -> Result<Offer, PlatformError> {
            self.record("create_single", serde_json::to_value(payload).unwrap())
        }

        async fn create_package_offer(
            &self,
            payload: &PackageOfferPayload,
        ) -> Result<Offer, PlatformError> {
            self.record("create_package", serde_json::to_value(payload).unwrap())
        }

        async fn create_delivery_offer(
            &self,
            payload: &DeliveryOfferPayload,
        ) -> Result<Offer, PlatformError> {
            self.record("create_delivery", serde_json::to_value(payload).unwrap())
        }

        async fn update_offer(
            &self,
            _id: &OfferId,
            payload: &OfferPayload,
        ) -> Result<Offer, PlatformError> {
            self.record("update", serde_json::to_value(payload).unwrap())
        }
    }

    #[derive(Default)]
    struct FakeImages {
        uploads: StdMutex<usize>,
        reject: bool,
    }

    impl ImageStore for &FakeImages {
        async fn upload_image(&self, _image: &LocalImage) -> Result<UploadedImage, PlatformError> {
            *self.uploads.lock().unwrap() += 1;
            if self.reject {
                return Err(PlatformError::Api {
                    status: 413,
                    message: "file too large".to_string(),
                });
            }
            Ok(UploadedImage {
                url: "https://cdn.example/stored.png".to_string(),
            })
        }
    }

    fn sample_offer() -> Offer {
        serde_json::from_str(r#"{"id":"o-1","shopId":"v-1"}"#).unwrap()
    }

    fn dated(mut draft: OfferDraft) -> OfferDraft {
        draft.set_dates(
            NaiveDate::from_ymd_opt(2024, 1, 10),
            NaiveDate::from_ymd_opt(2024, 1, 20),
        );
        draft
    }

    fn delivery_draft() -> OfferDraft {
        let mut draft = OfferDraft::new(OfferKind::Delivery);
        draft.set_vendor(Some(VendorId::new("v-1")));
        draft.set_discount(DiscountType::Percentage, "15");
        dated(draft)
    }

    fn single_draft() -> OfferDraft {
        let mut draft = OfferDraft::new(OfferKind::Single);
        draft.name_ar = "عرض الشاورما".to_string();
        draft.set_vendor(Some(VendorId::new("v-1")));
        draft.select_product(ProductSelection {
            id: ProductId::new("p-1"),
            price: Some(Decimal::new(200, 0)),
        });
        draft.set_discount(DiscountType::Percentage, "25");
        draft.image = ImageSource::Remote("https://cdn.example/x.png".to_string());
        dated(draft)
    }

    fn pending_image() -> ImageSource {
        ImageSource::Pending(LocalImage {
            file_name: "offer.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        })
    }

    #[tokio::test]
    async fn test_empty_package_makes_no_network_call() {
        let gateway = FakeGateway::default();
        let images = FakeImages::default();
        let submitter = OfferSubmitter::new(&gateway, &images);

        let mut draft = OfferDraft::new(OfferKind::Package);
        draft.set_vendor(Some(VendorId::new("v-1")));
        draft.set_bundle_price("50");
        draft.image = pending_image();
        let draft = dated(draft);

        let err = submitter.submit(&draft).await.unwrap_err();
        assert_eq!(err, OfferFormError::EmptyPackage);
        assert!(gateway.calls().is_empty());
        assert_eq!(*images.uploads.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delivery_without_name_submits() {
        let gateway = FakeGateway::default();
        let images = FakeImages::default();
        let submitter = OfferSubmitter::new(&gateway, &images);

        let outcome = submitter.submit(&delivery_draft()).await.unwrap();
        assert!(!outcome.updated);
        assert_eq!(gateway.calls(), ["create_delivery"]);
        // Delivery offers never touch the image store
        assert_eq!(*images.uploads.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_single_without_product_blocks() {
        let gateway = FakeGateway::default();
        let images = FakeImages::default();
        let submitter = OfferSubmitter::new(&gateway, &images);

        let mut draft = single_draft();
        draft.set_vendor(Some(VendorId::new("v-2"))); // resets product
        let err = submitter.submit(&draft).await.unwrap_err();
        assert_eq!(err, OfferFormError::MissingField("product"));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_pending_image_uploaded_and_substituted() {
        let gateway = FakeGateway::default();
        let images = FakeImages::default();
        let submitter = OfferSubmitter::new(&gateway, &images);

        let mut draft = single_draft();
        draft.image = pending_image();

        submitter.submit(&draft).await.unwrap();
        assert_eq!(*images.uploads.lock().unwrap(), 1);
        let payloads = gateway.payloads.lock().unwrap();
        assert_eq!(payloads[0]["image"], "https://cdn.example/stored.png");
    }

    #[tokio::test]
    async fn test_upload_failure_halts_before_gateway() {
        let gateway = FakeGateway::default();
        let images = FakeImages {
            reject: true,
            ..FakeImages::default()
        };
        let submitter = OfferSubmitter::new(&gateway, &images);

        let mut draft = single_draft();
        draft.image = pending_image();

        let err = submitter.submit(&draft).await.unwrap_err();
        assert_eq!(err, OfferFormError::Upload("file too large".to_string()));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_remote_failure_surfaces_server_message() {
        let gateway = FakeGateway::failing("vendor is suspended");
        let images = FakeImages::default();
        let submitter = OfferSubmitter::new(&gateway, &images);

        let err = submitter.submit(&delivery_draft()).await.unwrap_err();
        assert_eq!(err, OfferFormError::Remote("vendor is suspended".to_string()));
    }

    #[tokio::test]
    async fn test_edit_goes_through_shared_update_endpoint() {
        let gateway = FakeGateway::default();
        let images = FakeImages::default();
        let submitter = OfferSubmitter::new(&gateway, &images);

        let mut draft = delivery_draft();
        draft.offer_id = Some(OfferId::new("o-7"));

        let outcome = submitter.submit(&draft).await.unwrap();
        assert!(outcome.updated);
        assert_eq!(gateway.calls(), ["update"]);
    }

    #[tokio::test]
    async fn test_duplicate_submission_rejected_while_in_flight() {
        let gateway = FakeGateway::default();
        let images = FakeImages::default();
        let submitter = OfferSubmitter::new(&gateway, &images);

        let draft = delivery_draft();
        // Simulate an outstanding submission holding the slot
        let _slot = InFlightSlot::acquire(&submitter.in_flight, submission_key(&draft)).unwrap();

        let err = submitter.submit(&draft).await.unwrap_err();
        assert_eq!(err, OfferFormError::SubmissionInFlight);
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_slot_released_after_failure() {
        let gateway = FakeGateway::failing("nope");
        let images = FakeImages::default();
        let submitter = OfferSubmitter::new(&gateway, &images);

        let draft = delivery_draft();
        let _ = submitter.submit(&draft).await.unwrap_err();
        // The failed attempt released its slot, so a retry proceeds
        let err = submitter.submit(&draft).await.unwrap_err();
        assert_eq!(err, OfferFormError::Remote("nope".to_string()));
        assert_eq!(gateway.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_field_validator_blocks_bad_discount() {
        let gateway = FakeGateway::default();
        let images = FakeImages::default();
        let submitter = OfferSubmitter::new(&gateway, &images);

        let mut draft = delivery_draft();
        draft.set_discount(DiscountType::Percentage, "abc");

        let err = submitter.submit(&draft).await.unwrap_err();
        assert!(matches!(err, OfferFormError::Field(_)));
        assert!(gateway.calls().is_empty());
    }
}
