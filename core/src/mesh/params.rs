//! Shape parameter limits and clamping.
//!
//! Generators never reject their inputs. Out-of-range values (including NaN)
//! are replaced by the nearest valid value and the substitution is logged at
//! `debug`.

/// Smallest radius (and cube/cuboid extent) a generator will use.
pub const MIN_RADIUS: f32 = 0.01;

/// Smallest height a generator will use.
pub const MIN_HEIGHT: f32 = 0.01;

/// Smallest inner radius for tubes and tori.
pub const MIN_INNER_RADIUS: f32 = 0.005;

/// Fewest angular steps in a ring.
pub const MIN_SUBDIVISIONS: u32 = 3;

/// Most angular steps in a ring.
pub const MAX_SUBDIVISIONS: u32 = 360;

/// Most latitude/longitude steps in a sphere.
pub const MAX_SPHERE_SUBDIVISIONS: u32 = 6;

/// Floor `value` at `min`. NaN becomes `min`.
pub fn clamp_min(name: &str, value: f32, min: f32) -> f32 {
    if !(value >= min) {
        log::debug!("Clamping {} from {} to {}", name, value, min);
        return min;
    }
    value
}

/// Floor a radius at [`MIN_RADIUS`].
pub fn clamp_radius(value: f32) -> f32 {
    clamp_min("radius", value, MIN_RADIUS)
}

/// Floor a height at [`MIN_HEIGHT`].
pub fn clamp_height(value: f32) -> f32 {
    clamp_min("height", value, MIN_HEIGHT)
}

/// Clamp a ring subdivision count into `[MIN_SUBDIVISIONS, MAX_SUBDIVISIONS]`.
pub fn clamp_subdivisions(value: u32) -> u32 {
    let clamped = value.clamp(MIN_SUBDIVISIONS, MAX_SUBDIVISIONS);
    if clamped != value {
        log::debug!("Clamping subdivisions from {} to {}", value, clamped);
    }
    clamped
}

/// Cap a sphere subdivision count at [`MAX_SPHERE_SUBDIVISIONS`].
///
/// There is no lower bound here; a sphere below one subdivision degrades to a
/// cube.
pub fn clamp_sphere_subdivisions(value: u32) -> u32 {
    if value > MAX_SPHERE_SUBDIVISIONS {
        log::debug!(
            "Clamping sphere subdivisions from {} to {}",
            value,
            MAX_SPHERE_SUBDIVISIONS
        );
        return MAX_SPHERE_SUBDIVISIONS;
    }
    value
}

/// Clamp an outer/inner radius pair and return it as `(outer, inner)` with
/// `inner <= outer`.
pub fn ordered_radii(outer: f32, inner: f32) -> (f32, f32) {
    let outer = clamp_min("outer radius", outer, MIN_RADIUS);
    let inner = clamp_min("inner radius", inner, MIN_INNER_RADIUS);
    if inner > outer {
        log::debug!("Swapping inner radius {} and outer radius {}", inner, outer);
        return (inner, outer);
    }
    (outer, inner)
}
