//! Result window arithmetic for the "showing X to Y of Z" label.

/// Inclusive (start, end) ordinals of the results visible on a page.
///
/// A zero total pins the start at 0; otherwise page 1 starts at 1,
/// page 2 at `page_size + 1`, and so on. The end clamps to the total,
/// so a page number past the last page yields an empty-looking window
/// rather than an out-of-range one.
pub fn compute_window(total: u64, page_number: u64, page_size: u64) -> (u64, u64) {
    let start = if total == 0 {
        0
    } else {
        1 + page_number.saturating_sub(1).saturating_mul(page_size)
    };
    let end = page_number.saturating_mul(page_size).min(total);
    (start, end)
}
