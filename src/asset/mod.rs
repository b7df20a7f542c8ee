//! Release asset classification
//!
//! This module turns raw release asset filenames into structured records
//! describing the target platform, CPU architecture and packaging format,
//! plus the aggregation of one API release into the [`ReleaseInfo`] the
//! renderers consume.

mod classifier;
mod release_info;

pub use classifier::{
    AssetKind, Classification, PLATFORM_ORDER, Platform, classify, display_name, is_signature,
};
pub use release_info::{
    CLI_ASB_PREFIX, CLI_SWAP_PREFIX, ClassifiedAsset, GUI_PREFIX, ReleaseInfo,
};
