//! Pure element transforms.
//!
//! Each function takes an element by reference and returns an edited copy; the
//! input is never touched. They work on anything [`Transformable`], so the same
//! call handles a bare [`ElementBase`], a concrete variant, or a [`DesignElement`].

use tracing::{trace, warn};

use crate::element::{DesignElement, ElementBase, ImageElement, ShapeElement, TextElement};

/// Access to the geometric fields shared by all elements.
pub trait Transformable: Clone {
    fn base(&self) -> &ElementBase;

    fn base_mut(&mut self) -> &mut ElementBase;
}

impl Transformable for ElementBase {
    fn base(&self) -> &ElementBase {
        self
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        self
    }
}

impl Transformable for TextElement {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }
}

impl Transformable for ShapeElement {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }
}

impl Transformable for ImageElement {
    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }
}

impl Transformable for DesignElement {
    fn base(&self) -> &ElementBase {
        self.base_fields()
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        self.base_fields_mut()
    }
}

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Multiply width and height by `factor`.
///
/// The factor is not validated: zero or negative factors produce degenerate or
/// negative sizes, which callers are expected to avoid.
pub fn scale_element<T: Transformable>(element: &T, factor: f64) -> T {
    if !(factor.is_finite() && factor > 0.0) {
        warn!(
            id = %element.base().id,
            factor,
            "scaling element by a non-positive or non-finite factor"
        );
    }

    let mut scaled = element.clone();
    let base = scaled.base_mut();
    base.width *= factor;
    base.height *= factor;
    trace!(id = %base.id, width = base.width, height = base.height, "element scaled");
    scaled
}

/// Add `degrees` to the rotation, wrapping into [0, 360).
pub fn rotate_element<T: Transformable>(element: &T, degrees: f64) -> T {
    let mut rotated = element.clone();
    let base = rotated.base_mut();
    base.rotation = normalize_degrees(base.rotation + degrees);
    trace!(id = %base.id, rotation = base.rotation, "element rotated");
    rotated
}

/// Place the element at an absolute position.
pub fn move_element<T: Transformable>(element: &T, x: f64, y: f64) -> T {
    let mut moved = element.clone();
    let base = moved.base_mut();
    base.x = x;
    base.y = y;
    trace!(id = %base.id, x, y, "element moved");
    moved
}

/// Set opacity, clamped to [0, 1]. NaN maps to 0 (fully transparent).
pub fn change_opacity<T: Transformable>(element: &T, opacity: f64) -> T {
    let clamped = if opacity.is_nan() {
        0.0
    } else {
        opacity.clamp(0.0, 1.0)
    };

    let mut changed = element.clone();
    let base = changed.base_mut();
    base.opacity = clamped;
    trace!(id = %base.id, opacity = clamped, "element opacity changed");
    changed
}

/// Approximate a horizontal flip by reflecting the rotation: `180 - rotation`.
///
/// This is not a true mirror (that needs a scale-x of -1 in the element's
/// transform matrix); it only keeps the element's orientation consistent with
/// what the editor has always produced.
pub fn flip_element_horizontally<T: Transformable>(element: &T) -> T {
    let mut flipped = element.clone();
    let base = flipped.base_mut();
    base.rotation = normalize_degrees(180.0 - base.rotation);
    trace!(id = %base.id, rotation = base.rotation, "element flipped horizontally");
    flipped
}
