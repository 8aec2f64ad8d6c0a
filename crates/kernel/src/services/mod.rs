//! Catalog services.
//!
//! One service per entity type, each wrapping the generic cached
//! [`entity::EntityService`] with its type-specific filters. Services
//! are constructed once in [`crate::state::AppState`] and injected into
//! handlers; none of them hold global state.

pub mod admin;
pub mod approval;
pub mod banquet;
pub mod blog;
pub mod enquiry;
pub mod entity;
pub mod vendor;

pub use admin::AdminService;
pub use approval::ApprovalService;
pub use banquet::BanquetService;
pub use blog::BlogService;
pub use enquiry::EnquiryService;
pub use entity::{Entity, EntityService};
pub use vendor::VendorService;
