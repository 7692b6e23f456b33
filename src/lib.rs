#![doc(test(attr(deny(warnings))))]

//! Receipt Pivot turns receipts with line items into grouped, filtered and
//! aggregated summary tables for spending reports.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod pivot;
pub mod utils;

pub use crate::core::services::{PivotService, ServiceError, ServiceResult};
pub use domain::{PivotResult, PivotRow, PivotSpec};
pub use errors::PivotError;
pub use pivot::{compute_pivot, PeopleIndex};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and logs the build this library came from.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        let build = utils::build_info::current();
        tracing::info!(
            version = build.version,
            git = build.git_hash,
            status = build.git_status,
            "Receipt Pivot tracing initialized."
        );
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
