// Wed Jan 14 2026 - Alex

pub mod eligibility;
pub mod flags;
pub mod layout;
pub mod record;

pub use eligibility::EligibilityPolicy;
pub use flags::ClassFlags;
pub use layout::{ClassMetadataLayout, SLOT_SIZE};
pub use record::ClassMetadata;
