//! Create Orphanage page (MVVM)
//!
//! Structure:
//! - state.rs: form state machine, no browser dependencies
//! - payload.rs: multipart payload description
//! - model.rs: selected images, FormData conversion and API call
//! - view_model.rs: CreateOrphanageVm with commands
//! - view.rs: CreateOrphanage page component

mod model;
mod payload;
mod state;
mod view;
mod view_model;

pub use payload::{MultipartPayload, Part, PartValue};
pub use state::{OrphanageForm, SubmitOutcome, SubmitPhase, LISTING_ROUTE};
pub use view::CreateOrphanage;
pub use view_model::CreateOrphanageVm;
