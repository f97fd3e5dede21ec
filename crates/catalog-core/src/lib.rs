//! Core runtime for the asset-catalog dashboard: hierarchical asset keys,
//! opaque page cursors, the flat/namespace paginator, addressable view-state
//! persistence, and observability counters.

// public exports are one module level down
pub mod cursor;
pub mod key;
pub mod obs;
pub mod page;
pub mod view;

///
/// CONSTANTS
///

/// Number of rows (flat mode) or namespace groups (grouped mode) per page.
///
/// Window arithmetic saturates, so the constant can grow without touching the
/// paginator.
pub const PAGE_SIZE: usize = 50;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, view-state helpers, or counters are re-exported here.
///

pub mod prelude {
    pub use crate::{
        cursor::PageCursor,
        key::{AssetKey, CatalogEntry},
        page::{Page, ViewMode, paginate},
    };
}
