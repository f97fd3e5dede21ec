use crate::{PAGE_SIZE, cursor::PageCursor};
use std::cmp::Ordering;

///
/// PageWindow
///
/// Canonical page window bounds over one sorted candidate list.
/// `prev`/`next` are the candidate indices whose boundary values become the
/// navigation cursors, present only when the respective page exists.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct PageWindow {
    pub(super) start: usize,
    pub(super) end: usize,
    pub(super) prev: Option<usize>,
    pub(super) next: Option<usize>,
}

/// Locate the first candidate whose boundary value is at or past the cursor.
///
/// `None` is the deliberate past-the-end stop condition: a supplied cursor
/// greater than every candidate boundary yields an empty page, not an error.
/// Candidates must already be sorted by their boundary values.
pub(super) fn window_start<T, F>(
    candidates: &[T],
    prefix: &[String],
    cursor: Option<&PageCursor>,
    tail: F,
) -> Option<usize>
where
    F: Fn(&T) -> &[String],
{
    let Some(cursor) = cursor else {
        return Some(0);
    };

    let start = candidates
        .partition_point(|candidate| cursor.boundary_cmp(prefix, tail(candidate)) == Ordering::Less);

    (start < candidates.len()).then_some(start)
}

/// Compute canonical page window bounds from a located start index.
pub(super) fn page_window(len: usize, start: usize) -> PageWindow {
    let next = start.saturating_add(PAGE_SIZE);

    PageWindow {
        start,
        end: next.min(len),
        prev: (start > 0).then(|| start.saturating_sub(PAGE_SIZE)),
        next: (next < len).then_some(next),
    }
}

///
/// TESTS
///
