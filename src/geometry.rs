//! Viewport / bounding-box arithmetic behind the escaping button.
//!
//! Everything here is plain `f64` math so it can be exercised natively; the DOM
//! layer only feeds in `getBoundingClientRect()` and `innerWidth/innerHeight`.

use crate::rng::UniformSource;

/// Visible window area in CSS pixels. Read fresh on every computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// On-screen box of an element, including any translation already applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Box after applying `delta` (what the next frame will render).
    pub fn shifted(&self, delta: Delta) -> Self {
        Self {
            left: self.left + delta.dx,
            top: self.top + delta.dy,
            ..*self
        }
    }

    /// True when any edge pokes outside the viewport.
    pub fn is_outside(&self, viewport: Viewport) -> bool {
        self.left < 0.0
            || self.top < 0.0
            || self.right() > viewport.width
            || self.bottom() > viewport.height
    }
}

/// One move, relative to where the element currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Running translation applied to the element relative to its layout position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Displacement {
    pub x: f64,
    pub y: f64,
}

impl Displacement {
    pub fn accumulate(&mut self, delta: Delta) {
        self.x += delta.dx;
        self.y += delta.dy;
    }
}

/// Closed interval `[lo, hi]` of legal positions along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub lo: f64,
    pub hi: f64,
}

impl AxisRange {
    /// Legal left (or top) coordinates for an element of `extent` inside
    /// `available`, keeping `padding` clear on both sides. Collapses to the
    /// padding edge when the element does not fit.
    pub fn for_axis(available: f64, extent: f64, padding: f64) -> Self {
        let lo = sanitize(padding);
        let hi = sanitize(available) - sanitize(extent) - lo;
        Self {
            lo,
            hi: if hi < lo { lo } else { hi },
        }
    }

    /// Like `for_axis`, but when the padded range collapses while the element
    /// still fits, the padding shrinks to whatever is left on each side so the
    /// element lands fully inside `available`.
    pub fn shrink_to_fit(available: f64, extent: f64, padding: f64) -> Self {
        let slack = sanitize(available) - sanitize(extent);
        let padding = if slack >= 0.0 {
            sanitize(padding).min(slack / 2.0)
        } else {
            padding
        };
        Self::for_axis(available, extent, padding)
    }

    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }

    /// Map a unit sample `u` in `[0, 1)` into the range.
    pub fn sample(&self, u: f64) -> f64 {
        // clamp guards against float error pushing lo + span*u past hi
        (self.lo + self.span() * u).clamp(self.lo, self.hi)
    }
}

/// Negative / NaN / infinite sizes collapse to zero.
fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// Both axis ranges for `current` inside `viewport`.
pub fn placement_ranges(
    current: ElementBox,
    viewport: Viewport,
    padding: f64,
) -> (AxisRange, AxisRange) {
    (
        AxisRange::for_axis(viewport.width, current.width, padding),
        AxisRange::for_axis(viewport.height, current.height, padding),
    )
}

/// Pick a uniformly random on-screen target for the element and return the
/// move needed to get there from where it is now.
pub fn compute_evade_delta<R: UniformSource>(
    current: ElementBox,
    viewport: Viewport,
    padding: f64,
    rng: &mut R,
) -> Delta {
    let (xr, yr) = placement_ranges(current, viewport, padding);
    delta_into(current, xr, yr, rng)
}

/// Resize variant of `compute_evade_delta`: a padding the shrunken viewport
/// can no longer afford is reduced per axis instead of pinning the element to
/// the padding edge, where it would stay clipped.
pub fn compute_refit_delta<R: UniformSource>(
    current: ElementBox,
    viewport: Viewport,
    padding: f64,
    rng: &mut R,
) -> Delta {
    let xr = AxisRange::shrink_to_fit(viewport.width, current.width, padding);
    let yr = AxisRange::shrink_to_fit(viewport.height, current.height, padding);
    delta_into(current, xr, yr, rng)
}

fn delta_into<R: UniformSource>(
    current: ElementBox,
    xr: AxisRange,
    yr: AxisRange,
    rng: &mut R,
) -> Delta {
    let target_left = xr.sample(rng.next_unit());
    let target_top = yr.sample(rng.next_unit());
    let left = if current.left.is_finite() { current.left } else { 0.0 };
    let top = if current.top.is_finite() { current.top } else { 0.0 };
    Delta {
        dx: target_left - left,
        dy: target_top - top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Xorshift64;

    /// Source that replays fixed samples.
    struct Fixed(Vec<f64>, usize);
    impl UniformSource for Fixed {
        fn next_unit(&mut self) -> f64 {
            let v = self.0[self.1 % self.0.len()];
            self.1 += 1;
            v
        }
    }

    #[test]
    fn test_axis_range_basic() {
        let r = AxisRange::for_axis(800.0, 100.0, 0.0);
        assert_eq!(r, AxisRange { lo: 0.0, hi: 700.0 });
        let r = AxisRange::for_axis(800.0, 100.0, 50.0);
        assert_eq!(r, AxisRange { lo: 50.0, hi: 650.0 });
    }

    #[test]
    fn test_axis_range_collapses_when_too_small() {
        let r = AxisRange::for_axis(120.0, 100.0, 50.0);
        assert_eq!(r.lo, 50.0);
        assert_eq!(r.hi, 50.0);
        assert_eq!(r.sample(0.99), 50.0);
    }

    #[test]
    fn test_shrink_to_fit_keeps_element_inside() {
        // 100px in 120px with 50px padding: padded range collapses at 50 (right = 150)
        let r = AxisRange::shrink_to_fit(120.0, 100.0, 50.0);
        assert_eq!(r, AxisRange { lo: 10.0, hi: 10.0 });
        // enough room: same as the padded range
        let r = AxisRange::shrink_to_fit(800.0, 100.0, 50.0);
        assert_eq!(r, AxisRange::for_axis(800.0, 100.0, 50.0));
        // too big even unpadded: still pinned to the padding edge
        let r = AxisRange::shrink_to_fit(80.0, 100.0, 50.0);
        assert_eq!(r, AxisRange { lo: 50.0, hi: 50.0 });
    }

    #[test]
    fn test_refit_delta_clears_narrow_viewport() {
        let cur = ElementBox::new(60.0, 200.0, 100.0, 40.0);
        let vp = Viewport::new(120.0, 600.0);
        let mut rng = Xorshift64::new(17);
        let moved = cur.shifted(compute_refit_delta(cur, vp, 50.0, &mut rng));
        assert!(!moved.is_outside(vp), "{:?}", moved);
        assert_eq!(moved.left, 10.0);
        assert!(moved.top >= 50.0 && moved.bottom() <= 550.0);
    }

    #[test]
    fn test_negative_padding_treated_as_zero() {
        let r = AxisRange::for_axis(800.0, 100.0, -10.0);
        assert_eq!(r, AxisRange { lo: 0.0, hi: 700.0 });
    }

    #[test]
    fn test_fixed_samples_map_to_range_ends() {
        let cur = ElementBox::new(700.0, 500.0, 100.0, 50.0);
        let vp = Viewport::new(800.0, 600.0);
        let mut src = Fixed(vec![0.0, 0.0], 0);
        let d = compute_evade_delta(cur, vp, 0.0, &mut src);
        assert_eq!(d, Delta { dx: -700.0, dy: -500.0 });

        let mut src = Fixed(vec![0.5, 0.5], 0);
        let d = compute_evade_delta(cur, vp, 0.0, &mut src);
        assert_eq!(cur.shifted(d).left, 350.0);
        assert_eq!(cur.shifted(d).top, 275.0);
    }

    #[test]
    fn test_non_finite_inputs_do_not_panic() {
        let cur = ElementBox::new(f64::NAN, 10.0, f64::INFINITY, 20.0);
        let vp = Viewport::new(f64::NAN, 300.0);
        let mut rng = Xorshift64::new(7);
        let d = compute_evade_delta(cur, vp, 0.0, &mut rng);
        assert!(d.dx.is_finite() && d.dy.is_finite());
    }

    #[test]
    fn test_is_outside_edges() {
        let vp = Viewport::new(800.0, 600.0);
        assert!(!ElementBox::new(0.0, 0.0, 800.0, 600.0).is_outside(vp));
        assert!(ElementBox::new(750.0, 10.0, 100.0, 40.0).is_outside(vp));
        assert!(ElementBox::new(-1.0, 10.0, 100.0, 40.0).is_outside(vp));
        assert!(ElementBox::new(10.0, 580.0, 100.0, 40.0).is_outside(vp));
    }

    #[test]
    fn test_displacement_accumulates() {
        let mut d = Displacement::default();
        d.accumulate(Delta { dx: 10.0, dy: -5.0 });
        d.accumulate(Delta { dx: 2.5, dy: 5.0 });
        assert_eq!(d, Displacement { x: 12.5, y: 0.0 });
    }
}
