//! Mesh generators for the parametric primitives.
//!
//! Every generator returns a [`VertexAccumulator`] holding a flat,
//! non-indexed triangle list whose colors are already completed with the
//! requested base color. Triangles are wound counter-clockwise when viewed
//! from outside the solid; y is up.
//!
//! Ring-based shapes share one seam rule: the panel that closes a ring takes
//! its neighbor as `(i + n - 1) % n`, so the last panel reuses ring point 0
//! instead of needing a separate branch.

use std::f32::consts::TAU;

use crate::math::Vec3;

use super::data::VertexAccumulator;
use super::params::{
    self, MIN_RADIUS, clamp_height, clamp_radius, clamp_sphere_subdivisions, clamp_subdivisions,
};

/// `n` points at equal angular steps around the y axis, starting on +x.
fn ring(radius: f32, y: f32, n: u32) -> Vec<Vec3> {
    (0..n)
        .map(|i| {
            let theta = i as f32 * TAU / n as f32;
            Vec3::new(radius * theta.cos(), y, radius * theta.sin())
        })
        .collect()
}

/// Generate a cube centered at the origin.
///
/// `size` is the full edge length, floored at [`MIN_RADIUS`].
pub fn generate_cube(size: f32, color: Vec3) -> VertexAccumulator {
    let size = params::clamp_min("cube size", size, MIN_RADIUS);
    generate_cuboid(Vec3::new(size, size, size), color)
}

/// Generate an axis-aligned box centered at the origin.
///
/// `dimensions` are full extents along x, y and z; each is floored at
/// [`MIN_RADIUS`]. Emits 36 vertices.
pub fn generate_cuboid(dimensions: Vec3, color: Vec3) -> VertexAccumulator {
    let x = params::clamp_min("cuboid width", dimensions.x, MIN_RADIUS) * 0.5;
    let y = params::clamp_min("cuboid height", dimensions.y, MIN_RADIUS) * 0.5;
    let z = params::clamp_min("cuboid depth", dimensions.z, MIN_RADIUS) * 0.5;

    // front face corners (z+), then back face corners (z-)
    let p0 = Vec3::new(-x, -y, z);
    let p1 = Vec3::new(x, -y, z);
    let p2 = Vec3::new(x, y, z);
    let p3 = Vec3::new(-x, y, z);
    let p4 = Vec3::new(-x, -y, -z);
    let p5 = Vec3::new(x, -y, -z);
    let p6 = Vec3::new(x, y, -z);
    let p7 = Vec3::new(-x, y, -z);

    let mut acc = VertexAccumulator::new();
    acc.add_quad(p0, p1, p3, p2); // front
    acc.add_quad(p5, p4, p6, p7); // back
    acc.add_quad(p4, p0, p7, p3); // left
    acc.add_quad(p1, p5, p2, p6); // right
    acc.add_quad(p3, p2, p7, p6); // up
    acc.add_quad(p4, p5, p0, p1); // down
    acc.complete_colors(color);
    acc
}

/// Generate a cone with its base at `-height / 2` and apex at `+height / 2`.
///
/// Emits `6 * subdivisions` vertices: one base cap triangle and one side
/// triangle per angular step.
pub fn generate_cone(
    radius: f32,
    height: f32,
    subdivisions: u32,
    color: Vec3,
) -> VertexAccumulator {
    let radius = clamp_radius(radius);
    let half = clamp_height(height) * 0.5;
    let n = clamp_subdivisions(subdivisions);

    let base = ring(radius, -half, n);
    let base_center = Vec3::new(0.0, -half, 0.0);
    let apex = Vec3::new(0.0, half, 0.0);

    let n = n as usize;
    let mut acc = VertexAccumulator::new();
    for i in (0..n).rev() {
        let prev = (i + n - 1) % n;
        acc.add_triangle(base[prev], base[i], base_center);
        acc.add_triangle(base[i], base[prev], apex);
    }
    acc.complete_colors(color);
    acc
}

/// Generate a capped cylinder centered at the origin.
///
/// Emits `12 * subdivisions` vertices.
pub fn generate_cylinder(
    radius: f32,
    height: f32,
    subdivisions: u32,
    color: Vec3,
) -> VertexAccumulator {
    let radius = clamp_radius(radius);
    let half = clamp_height(height) * 0.5;
    let n = clamp_subdivisions(subdivisions);

    let top = ring(radius, half, n);
    let bottom = ring(radius, -half, n);
    let top_center = Vec3::new(0.0, half, 0.0);
    let bottom_center = Vec3::new(0.0, -half, 0.0);

    let n = n as usize;
    let mut acc = VertexAccumulator::new();
    for i in (0..n).rev() {
        let prev = (i + n - 1) % n;
        acc.add_quad(bottom[i], bottom[prev], top[i], top[prev]);
        acc.add_triangle(top[i], top[prev], top_center);
        acc.add_triangle(bottom[prev], bottom[i], bottom_center);
    }
    acc.complete_colors(color);
    acc
}

/// Generate a tube: a cylinder with a coaxial hole.
///
/// The radii are clamped and swapped if `inner_radius > outer_radius`. The
/// inner wall faces the axis; both caps are annuli. Emits
/// `24 * subdivisions` vertices.
pub fn generate_tube(
    outer_radius: f32,
    inner_radius: f32,
    height: f32,
    subdivisions: u32,
    color: Vec3,
) -> VertexAccumulator {
    let (outer_radius, inner_radius) = params::ordered_radii(outer_radius, inner_radius);
    let half = clamp_height(height) * 0.5;
    let n = clamp_subdivisions(subdivisions);

    let outer_top = ring(outer_radius, half, n);
    let outer_bottom = ring(outer_radius, -half, n);
    let inner_top = ring(inner_radius, half, n);
    let inner_bottom = ring(inner_radius, -half, n);

    let n = n as usize;
    let mut acc = VertexAccumulator::new();
    for i in (0..n).rev() {
        let prev = (i + n - 1) % n;
        acc.add_quad(outer_bottom[i], outer_bottom[prev], outer_top[i], outer_top[prev]);
        acc.add_quad(inner_top[i], inner_top[prev], inner_bottom[i], inner_bottom[prev]);
        acc.add_quad(inner_bottom[i], inner_bottom[prev], outer_bottom[i], outer_bottom[prev]);
        acc.add_quad(outer_top[i], outer_top[prev], inner_top[i], inner_top[prev]);
    }
    acc.complete_colors(color);
    acc
}

/// Generate a torus.
///
/// Not yet a real torus: the parameters are clamped and ordered, then the
/// result is `generate_cube(2 * outer_radius)`.
// TODO: revolve a ring of `subdivisions_b` points around a major ring of `subdivisions_a` steps.
pub fn generate_torus(
    outer_radius: f32,
    inner_radius: f32,
    subdivisions_a: u32,
    subdivisions_b: u32,
    color: Vec3,
) -> VertexAccumulator {
    let (outer_radius, inner_radius) = params::ordered_radii(outer_radius, inner_radius);
    let subdivisions_a = clamp_subdivisions(subdivisions_a);
    let subdivisions_b = clamp_subdivisions(subdivisions_b);
    log::debug!(
        "Torus ({}, {}, {}x{}) generated as a cube",
        outer_radius,
        inner_radius,
        subdivisions_a,
        subdivisions_b
    );

    generate_cube(outer_radius * 2.0, color)
}

/// Generate a latitude/longitude sphere centered at the origin.
///
/// `subdivisions` is capped at 6. Rows run pole to pole over
/// `subdivisions + 1` latitudes; each row has `subdivisions` longitudes that
/// wrap around. Latitude does not wrap: the first and last rows are the
/// poles, so the surface closes there. The poles lie on the z axis. Emits `6 * subdivisions²`
/// vertices. Below one subdivision the result is `generate_cube(2 * radius)`.
pub fn generate_sphere(radius: f32, subdivisions: u32, color: Vec3) -> VertexAccumulator {
    let radius = clamp_radius(radius);
    let steps = clamp_sphere_subdivisions(subdivisions);
    if steps < 1 {
        return generate_cube(radius * 2.0, color);
    }

    let rows: Vec<Vec<Vec3>> = (0..=steps)
        .map(|k| {
            let lat = (-90.0 + k as f32 * 180.0 / steps as f32).to_radians();
            (0..steps)
                .map(|j| {
                    let lon = (j as f32 * 360.0 / steps as f32).to_radians();
                    Vec3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()) * radius
                })
                .collect()
        })
        .collect();

    let n = steps as usize;
    let mut acc = VertexAccumulator::new();
    for i in (1..=n).rev() {
        let (upper, lower) = (&rows[i], &rows[i - 1]);
        for j in (0..n).rev() {
            let pj = (j + n - 1) % n;
            acc.add_quad(upper[j], upper[pj], lower[j], lower[pj]);
        }
    }
    acc.complete_colors(color);
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white() -> Vec3 {
        Vec3::new(1.0, 1.0, 1.0)
    }

    fn triangles(acc: &VertexAccumulator) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        acc.positions().chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Every non-degenerate triangle faces away from `inside`.
    fn assert_outward(acc: &VertexAccumulator, inside: Vec3) {
        for [a, b, c] in triangles(acc) {
            let normal = (b - a).cross(&(c - a));
            if normal.norm() < 1e-6 {
                continue;
            }
            let centroid = (a + b + c) / 3.0;
            assert!(
                normal.dot(&(centroid - inside)) > 0.0,
                "triangle {:?} {:?} {:?} faces inward",
                a,
                b,
                c
            );
        }
    }

    fn has_triangle_with(acc: &VertexAccumulator, p: Vec3, q: Vec3) -> bool {
        triangles(acc).any(|t| t.contains(&p) && t.contains(&q))
    }

    fn assert_whole_and_colored(acc: &VertexAccumulator) {
        assert!(!acc.is_empty());
        assert_eq!(acc.vertex_count() % 3, 0);
        assert_eq!(acc.colors().len(), acc.vertex_count());
    }

    #[test]
    fn test_ring_has_exact_point_count() {
        let points = ring(2.0, 0.5, 7);
        assert_eq!(points.len(), 7);
        assert_eq!(points[0], Vec3::new(2.0, 0.5, 0.0));
        for p in &points {
            assert!((p.xz().norm() - 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_generate_cube() {
        let acc = generate_cube(2.0, white());
        assert_eq!(acc.vertex_count(), 36);
        assert_whole_and_colored(&acc);
        for p in acc.positions() {
            assert_eq!(p.abs(), Vec3::new(1.0, 1.0, 1.0));
        }
        assert_outward(&acc, Vec3::zeros());
    }

    #[test]
    fn test_cuboid_matches_cube() {
        let color = Vec3::new(0.1, 0.2, 0.3);
        assert_eq!(generate_cuboid(Vec3::new(2.0, 2.0, 2.0), color), generate_cube(2.0, color));
    }

    #[test]
    fn test_cuboid_extents_and_winding() {
        let acc = generate_cuboid(Vec3::new(4.0, 2.0, 1.0), white());
        assert_eq!(acc.vertex_count(), 36);
        for p in acc.positions() {
            assert_eq!(p.abs(), Vec3::new(2.0, 1.0, 0.5));
        }
        assert_outward(&acc, Vec3::zeros());
    }

    #[test]
    fn test_cuboid_clamps_each_dimension() {
        let acc = generate_cuboid(Vec3::new(0.0, -1.0, 3.0), white());
        for p in acc.positions() {
            assert_eq!(p.abs(), Vec3::new(0.005, 0.005, 1.5));
        }
    }

    #[test]
    fn test_generate_cone() {
        let color = Vec3::new(1.0, 0.0, 0.0);
        let acc = generate_cone(1.0, 2.0, 12, color);
        assert_eq!(acc.vertex_count(), 6 * 12);
        assert_whole_and_colored(&acc);
        assert!(acc.colors().iter().all(|c| *c == color));
        assert_outward(&acc, Vec3::zeros());

        let base = ring(1.0, -1.0, 12);
        assert!(has_triangle_with(&acc, base[0], base[11]));
        assert!(acc.positions().contains(&Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_generate_cylinder() {
        let acc = generate_cylinder(1.0, 2.0, 8, white());
        assert_eq!(acc.vertex_count(), 12 * 8);
        assert_whole_and_colored(&acc);
        assert_outward(&acc, Vec3::zeros());

        let top = ring(1.0, 1.0, 8);
        let bottom = ring(1.0, -1.0, 8);
        assert!(has_triangle_with(&acc, top[0], top[7]));
        assert!(has_triangle_with(&acc, bottom[0], bottom[7]));
    }

    #[test]
    fn test_cylinder_clamps_degenerate_parameters() {
        let acc = generate_cylinder(0.0, 0.0, 1, white());
        assert_eq!(acc.vertex_count(), 36);
        assert_eq!(acc, generate_cylinder(0.01, 0.01, 3, white()));
    }

    #[test]
    fn test_generate_tube() {
        let acc = generate_tube(2.0, 1.0, 1.0, 16, white());
        assert_eq!(acc.vertex_count(), 24 * 16);
        assert_whole_and_colored(&acc);

        let outer = ring(2.0, 0.5, 16);
        let inner = ring(1.0, -0.5, 16);
        assert!(has_triangle_with(&acc, outer[0], outer[15]));
        assert!(has_triangle_with(&acc, inner[0], inner[15]));

        // outer wall and caps face away from the axis or along it, inner wall toward it
        for [a, b, c] in triangles(&acc) {
            let normal = (b - a).cross(&(c - a));
            let centroid = (a + b + c) / 3.0;
            let radial = Vec3::new(centroid.x, 0.0, centroid.z);
            let on_cap = a.y == b.y && b.y == c.y;
            if on_cap {
                assert!(normal.y * centroid.y > 0.0);
            } else if radial.norm() > 1.5 {
                assert!(normal.dot(&radial) > 0.0);
            } else {
                assert!(normal.dot(&radial) < 0.0);
            }
        }
    }

    #[test]
    fn test_tube_swaps_radii() {
        assert_eq!(
            generate_tube(1.0, 2.0, 1.0, 6, white()),
            generate_tube(2.0, 1.0, 1.0, 6, white())
        );
    }

    #[test]
    fn test_generate_sphere() {
        for steps in 1..=6 {
            let acc = generate_sphere(1.0, steps, white());
            assert_eq!(acc.vertex_count(), 6 * (steps * steps) as usize);
            assert_whole_and_colored(&acc);
            for p in acc.positions() {
                assert!((p.norm() - 1.0).abs() < 1e-5);
            }
        }
        for steps in 3..=6 {
            assert_outward(&generate_sphere(1.0, steps, white()), Vec3::zeros());
        }
    }

    #[test]
    fn test_sphere_longitude_seam() {
        let acc = generate_sphere(1.0, 4, white());
        let equator_start = Vec3::new(1.0, 0.0, 0.0);
        let lat = 0.0f32.to_radians();
        let lon = 270.0f32.to_radians();
        let equator_end = Vec3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin());
        assert!(has_triangle_with(&acc, equator_start, equator_end));
    }

    #[test]
    fn test_sphere_latitude_stops_at_poles() {
        let acc = generate_sphere(1.0, 5, white());
        for [a, b, c] in triangles(&acc) {
            let zs = [a.z, b.z, c.z];
            let south = zs.iter().any(|z| *z < -1.0 + 1e-5);
            let north = zs.iter().any(|z| *z > 1.0 - 1e-5);
            assert!(!(south && north));
        }
    }

    #[test]
    fn test_sphere_subdivisions_capped() {
        assert_eq!(generate_sphere(1.0, 50, white()), generate_sphere(1.0, 6, white()));
    }

    #[test]
    fn test_sphere_without_subdivisions_is_cube() {
        assert_eq!(generate_sphere(3.0, 0, white()), generate_cube(6.0, white()));
        assert_eq!(generate_sphere(0.0, 0, white()), generate_cube(0.02, white()));
    }

    #[test]
    fn test_torus_is_cube_stub() {
        let color = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(generate_torus(1.5, 0.5, 12, 8, color), generate_cube(3.0, color));
        // radii are ordered before the outer radius is used
        assert_eq!(generate_torus(0.5, 1.5, 12, 8, color), generate_cube(3.0, color));
    }
}
