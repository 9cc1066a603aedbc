/// Normalised progress of an element through a viewport-relative window.
///
/// Always in `[0, 1]`; every constructor clamps, and NaN collapses to `0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ScrollFraction(f64);

impl ScrollFraction {
    pub const START: ScrollFraction = ScrollFraction(0.0);
    pub const END: ScrollFraction = ScrollFraction(1.0);

    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            return Self(0.0);
        }
        Self(raw.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }
}

/// A point on the element paired with a line on the viewport.
///
/// `element` and `viewport` are fractions of the element height and the
/// viewport height respectively, so `Edge { element: 0.0, viewport: 1.0 }`
/// reads "element top meets viewport bottom".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub element: f64,
    pub viewport: f64,
}

impl Edge {
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }
}

/// The window over which a fraction runs from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffset {
    pub start: Edge,
    pub end: Edge,
}

impl ScrollOffset {
    /// Element top enters at the bottom until element bottom leaves at the top.
    pub const THROUGH: ScrollOffset = ScrollOffset {
        start: Edge::new(0.0, 1.0),
        end: Edge::new(1.0, 0.0),
    };
    /// Element top enters at the bottom until it reaches the top.
    pub const ENTER: ScrollOffset = ScrollOffset {
        start: Edge::new(0.0, 1.0),
        end: Edge::new(0.0, 0.0),
    };

    pub const fn new(start: Edge, end: Edge) -> Self {
        Self { start, end }
    }
}

/// Computes the fraction from the element's bounding rect.
///
/// `rect_top` is the element top relative to the viewport (what
/// `getBoundingClientRect().top` reports), so scrolling down decreases it.
pub fn scroll_fraction(
    rect_top: f64,
    element_height: f64,
    viewport_height: f64,
    offset: ScrollOffset,
) -> ScrollFraction {
    // Scroll distance already travelled past the start edge.
    let travelled =
        offset.start.viewport * viewport_height - (rect_top + offset.start.element * element_height);
    let span = (offset.end.element - offset.start.element) * element_height
        - (offset.end.viewport - offset.start.viewport) * viewport_height;

    if !span.is_finite() || span <= 0.0 {
        return if travelled >= 0.0 {
            ScrollFraction::END
        } else {
            ScrollFraction::START
        };
    }
    ScrollFraction::new(travelled / span)
}
