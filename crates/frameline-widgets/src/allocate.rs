//! Width allocation between the three decoration slots of an edge.

use tracing::trace;

/// Shrink the requested widths of the left, center, and right slots until
/// they fit in `total` cells.
///
/// Each request is first capped at `total`. Shrinking removes one cell at a
/// time from whichever slot is larger, so the shorter slot keeps as much as
/// it can. With no center slot, left and right only need to sum to less than
/// `total`. With a center slot, the left slot must end before the center
/// begins and the right slot must start after it ends, where the center sits
/// at `(total - center) / 2`.
///
/// When both left and right are zero the center alone is returned (capped),
/// since nothing competes with it.
///
/// ```
/// use frameline_widgets::allocate;
///
/// assert_eq!(allocate(10, 10, 10, 10), (3, 2, 3));
/// assert_eq!(allocate(10, 0, 10, 10), (5, 0, 4));
/// assert_eq!(allocate(4, 0, 3, 10), (4, 0, 3));
/// ```
#[must_use]
pub fn allocate(left: usize, center: usize, right: usize, total: usize) -> (usize, usize, usize) {
    let fitted = fit(left.min(total), center.min(total), right.min(total), total);
    if fitted != (left, center, right) {
        let (l, c, r) = fitted;
        trace!(left, center, right, total, l, c, r, "decoration widths shrunk");
    }
    fitted
}

fn fit(mut l: usize, mut c: usize, mut r: usize, total: usize) -> (usize, usize, usize) {
    if l == 0 && r == 0 {
        return (l, c, r);
    }

    if c == 0 {
        if l == 0 || r == 0 || l + r < total {
            return (l, c, r);
        }
        while l + r >= total && (l > 0 || r > 0) {
            if l > r {
                l -= 1;
            } else {
                r -= 1;
            }
        }
    } else {
        while l >= (total / 2).saturating_sub(c.div_ceil(2)) && (l > 0 || c > 0) {
            if l > c {
                l -= 1;
            } else {
                c -= 1;
            }
        }
        while r >= total.div_ceil(2).saturating_sub(c / 2) && (r > 0 || c > 0) {
            if r > c {
                r -= 1;
            } else {
                c -= 1;
            }
        }
    }
    (l, c, r)
}
