//! Module: page
//! Responsibility: windowing one sorted asset collection into display pages.
//! Does not own: cursor wire tokens, view-state persistence, or rendering.
//! Boundary: pure functions invoked fresh on every render pass.

mod window;

use crate::{
    cursor::PageCursor,
    key::CatalogEntry,
    obs::metrics,
    page::window::{page_window, window_start},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// ViewMode
///
/// Display mode for the catalog table: one row per asset, or one logical
/// group per namespace segment under the current navigation prefix.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Flat,
    Namespace,
}

impl ViewMode {
    /// Stable name used by view-state persistence.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Namespace => "namespace",
        }
    }

    /// Parse a persisted mode name.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "flat" => Some(Self::Flat),
            "namespace" => Some(Self::Namespace),
            _ => None,
        }
    }
}

///
/// Page
///
/// One windowed catalog page: the displayed entries in collection order, the
/// label-path rule for the active mode, and the boundary cursors consumed by
/// the pagination controls.
///

#[derive(Debug)]
pub struct Page<'a, A> {
    displayed: Vec<&'a A>,
    prev_cursor: Option<PageCursor>,
    next_cursor: Option<PageCursor>,
    mode: ViewMode,
    prefix_len: usize,
}

impl<'a, A: CatalogEntry> Page<'a, A> {
    /// Entries in this page, preserving collection order.
    #[must_use]
    pub fn displayed(&self) -> &[&'a A] {
        &self.displayed
    }

    /// Cursor for the previous page, when one exists.
    #[must_use]
    pub const fn prev_cursor(&self) -> Option<&PageCursor> {
        self.prev_cursor.as_ref()
    }

    /// Cursor for the next page, when one exists.
    #[must_use]
    pub const fn next_cursor(&self) -> Option<&PageCursor> {
        self.next_cursor.as_ref()
    }

    /// Display mode this page was windowed under.
    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Path segments labelling one displayed entry: the full key in flat
    /// mode, the namespace slice in grouped mode.
    #[must_use]
    pub fn display_path(&self, entry: &'a A) -> &'a [String] {
        match self.mode {
            ViewMode::Flat => entry.key().segments(),
            ViewMode::Namespace => entry.key().namespace(self.prefix_len),
        }
    }

    // Empty page produced by the cursor-past-the-end stop condition.
    const fn stop(mode: ViewMode, prefix_len: usize) -> Self {
        Self {
            displayed: Vec::new(),
            prev_cursor: None,
            next_cursor: None,
            mode,
            prefix_len,
        }
    }
}

/// Window one sorted asset collection into a display page.
///
/// Preconditions owned by the caller: `assets` is the complete collection for
/// the current navigation level and is already sorted by the `prefix ++ key`
/// boundary ordering; the empty-collection case renders an empty-state view
/// upstream and never reaches this function.
///
/// Pure: identical inputs give identical pages, and the returned cursors feed
/// straight back in as the `cursor` argument of the following call.
#[must_use]
pub fn paginate<'a, A: CatalogEntry>(
    assets: &'a [A],
    prefix: &[String],
    cursor: Option<&PageCursor>,
    mode: ViewMode,
) -> Page<'a, A> {
    let page = match mode {
        ViewMode::Flat => paginate_flat(assets, prefix, cursor),
        ViewMode::Namespace => paginate_grouped(assets, prefix, cursor),
    };

    metrics::record_page(mode, page.displayed.is_empty());

    page
}

// One row per asset; boundaries are full `prefix ++ key` paths.
fn paginate_flat<'a, A: CatalogEntry>(
    assets: &'a [A],
    prefix: &[String],
    cursor: Option<&PageCursor>,
) -> Page<'a, A> {
    let Some(start) = window_start(assets, prefix, cursor, |asset| asset.key().segments()) else {
        return Page::stop(ViewMode::Flat, prefix.len());
    };

    let window = page_window(assets.len(), start);
    let boundary = |idx: usize| PageCursor::from_parts(prefix, assets[idx].key().segments());

    Page {
        displayed: assets[window.start..window.end].iter().collect(),
        prev_cursor: window.prev.map(boundary),
        next_cursor: window.next.map(boundary),
        mode: ViewMode::Flat,
        prefix_len: prefix.len(),
    }
}

// One logical group per namespace; the cursor window runs over the distinct
// namespace list and every asset under a windowed namespace is displayed.
fn paginate_grouped<'a, A: CatalogEntry>(
    assets: &'a [A],
    prefix: &[String],
    cursor: Option<&PageCursor>,
) -> Page<'a, A> {
    let prefix_len = prefix.len();

    // Distinct namespaces, deduplicated structurally and sorted by the same
    // boundary ordering the window search uses.
    let namespaces: Vec<&[String]> = assets
        .iter()
        .map(|asset| asset.key().namespace(prefix_len))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let Some(start) = window_start(&namespaces, prefix, cursor, |namespace| *namespace) else {
        return Page::stop(ViewMode::Namespace, prefix_len);
    };

    let window = page_window(namespaces.len(), start);
    let windowed = &namespaces[window.start..window.end];
    let boundary = |idx: usize| PageCursor::from_parts(prefix, namespaces[idx]);

    Page {
        displayed: assets
            .iter()
            .filter(|asset| {
                windowed
                    .iter()
                    .any(|namespace| asset.key().starts_with_parts(prefix, namespace))
            })
            .collect(),
        prev_cursor: window.prev.map(boundary),
        next_cursor: window.next.map(boundary),
        mode: ViewMode::Namespace,
        prefix_len,
    }
}
