//! Asset-catalog pagination facade.
//!
//! ## Crate layout
//! - `core`: hierarchical asset keys, opaque page cursors, the
//!   flat/namespace paginator, addressable view-state persistence, and
//!   observability counters.
//!
//! The `prelude` module mirrors the vocabulary used inside dashboard view
//! code; view-state helpers and error types stay one module level down.

pub use catalog_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use catalog_core::{
    PAGE_SIZE,
    cursor::{CursorDecodeError, PageCursor},
    key::{AssetKey, CatalogEntry},
    page::{Page, ViewMode, paginate},
};

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, view-state helpers, or counters are re-exported here.
///

pub mod prelude {
    pub use catalog_core::{
        cursor::PageCursor,
        key::{AssetKey, CatalogEntry},
        page::{Page, ViewMode, paginate},
    };
}

///
/// TESTS
///
