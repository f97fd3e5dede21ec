//! Module: view
//! Responsibility: cursor and display-mode persistence in addressable
//! location state, so navigation is bookmarkable and survives reloads.
//! Does not own: the state map itself — that belongs to the routing shell.

use crate::{
    cursor::{CursorDecodeError, PageCursor},
    obs::metrics,
    page::ViewMode,
};
use std::collections::BTreeMap;

/// Fixed location-state key holding the page cursor token.
pub const CURSOR_QUERY_KEY: &str = "cursor";

/// Fixed location-state key holding the display-mode toggle.
pub const VIEW_QUERY_KEY: &str = "view";

/// Read the persisted page cursor from location state.
///
/// An absent entry means the first page. Tokens come from user-editable URLs,
/// so a decode failure surfaces as an error rather than silently resetting to
/// the first page.
pub fn read_cursor(
    params: &BTreeMap<String, String>,
) -> Result<Option<PageCursor>, CursorDecodeError> {
    let Some(token) = params.get(CURSOR_QUERY_KEY) else {
        return Ok(None);
    };

    match PageCursor::decode(token) {
        Ok(cursor) => Ok(Some(cursor)),
        Err(err) => {
            metrics::record_cursor_decode_failure();
            Err(err)
        }
    }
}

/// Persist `cursor` under the fixed key; `None` clears it (navigation reset).
pub fn write_cursor(params: &mut BTreeMap<String, String>, cursor: Option<&PageCursor>) {
    match cursor {
        Some(cursor) => {
            params.insert(CURSOR_QUERY_KEY.to_string(), cursor.encode());
        }
        None => {
            params.remove(CURSOR_QUERY_KEY);
        }
    }
}

/// Read the persisted display mode.
///
/// Absent or unrecognized values fall back to the flat view.
#[must_use]
pub fn read_mode(params: &BTreeMap<String, String>) -> ViewMode {
    params
        .get(VIEW_QUERY_KEY)
        .and_then(|raw| ViewMode::parse(raw))
        .unwrap_or_default()
}

/// Persist the display mode under the fixed key.
pub fn write_mode(params: &mut BTreeMap<String, String>, mode: ViewMode) {
    params.insert(VIEW_QUERY_KEY.to_string(), mode.as_str().to_string());
}

///
/// TESTS
///
