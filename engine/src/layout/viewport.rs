//! Viewport width breakpoints.

use shared::models::ViewportClass;

/// Widths below this are laid out for phones.
pub const MOBILE_BREAKPOINT: f64 = 813.0;
/// Widths below this (and at least `MOBILE_BREAKPOINT`) are laid out for tablets.
pub const TABLET_BREAKPOINT: f64 = 991.0;

/// Classify a viewport width in logical pixels.
///
/// Negative and NaN widths classify as `Mobile`.
#[must_use]
pub fn classify(width: f64) -> ViewportClass {
    // Written so NaN fails the comparison and lands on Mobile.
    if !(width >= MOBILE_BREAKPOINT) {
        ViewportClass::Mobile
    } else if width < TABLET_BREAKPOINT {
        ViewportClass::Tablet
    } else {
        ViewportClass::Desktop
    }
}
