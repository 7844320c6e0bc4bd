//! Vertex accumulation.
//!
//! [`VertexAccumulator`] holds the two parallel sequences every mesh is built
//! from: one position per emitted triangle corner, and one color per position.
//! Colors may lag behind positions while geometry is being emitted;
//! [`complete_colors`](VertexAccumulator::complete_colors) pads them before the
//! sequences are interleaved.

use crate::math::Vec3;

use super::error::MeshError;
use super::vertex::ColorVertex;

/// Append-only position and color sequences for a non-indexed triangle list.
///
/// Winding is never recomputed: [`add_triangle`](Self::add_triangle) appends
/// its corners in the literal order given. The generators emit triangles
/// counter-clockwise when viewed from outside the solid.
#[derive(Clone, Default, PartialEq)]
pub struct VertexAccumulator {
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
}

impl VertexAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a position. The vertex count becomes the new sequence length.
    pub fn add_position(&mut self, position: Vec3) {
        self.positions.push(position);
    }

    /// Append a color. Independent of [`add_position`](Self::add_position),
    /// so colors can be supplied ahead of the geometry.
    pub fn add_color(&mut self, color: Vec3) {
        self.colors.push(color);
    }

    /// Make the color sequence exactly as long as the position sequence.
    ///
    /// Colors beyond the position count are dropped; missing ones are filled
    /// with `color`. No-op once both sequences have equal length.
    pub fn complete_colors(&mut self, color: Vec3) {
        if self.colors.len() > self.positions.len() {
            log::debug!(
                "Dropping {} colors beyond {} positions",
                self.colors.len() - self.positions.len(),
                self.positions.len()
            );
            self.colors.truncate(self.positions.len());
        }
        let missing = self.positions.len().saturating_sub(self.colors.len());
        self.colors.extend(std::iter::repeat_n(color, missing));
    }

    /// Append one triangle as `a`, `b`, `c`.
    pub fn add_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        self.add_position(a);
        self.add_position(b);
        self.add_position(c);
    }

    /// Append a quad as two triangles.
    ///
    /// ```text
    /// tl--tr
    /// |  / |
    /// | /  |
    /// bl--br
    /// ```
    ///
    /// Emits `(bl, br, tl)` then `(tl, br, tr)`.
    pub fn add_quad(&mut self, bl: Vec3, br: Vec3, tl: Vec3, tr: Vec3) {
        self.add_triangle(bl, br, tl);
        self.add_triangle(tl, br, tr);
    }

    /// Number of emitted vertices (length of the position sequence).
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of whole triangles emitted so far.
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Check if no positions have been emitted.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Check if every position has a color.
    pub fn is_complete(&self) -> bool {
        self.colors.len() == self.positions.len()
    }

    /// Get the position sequence.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Get the color sequence.
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Drop every position and color.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.colors.clear();
    }

    /// Interleave positions and colors into one vertex per position.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::ColorCountMismatch`] unless both sequences have
    /// equal length; call [`complete_colors`](Self::complete_colors) first.
    pub fn interleave(&self) -> Result<Vec<ColorVertex>, MeshError> {
        if !self.is_complete() {
            return Err(MeshError::ColorCountMismatch {
                positions: self.positions.len(),
                colors: self.colors.len(),
            });
        }

        Ok(self
            .positions
            .iter()
            .zip(&self.colors)
            .map(|(position, color)| ColorVertex::new(position, color))
            .collect())
    }
}

impl std::fmt::Debug for VertexAccumulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexAccumulator")
            .field("positions", &self.positions.len())
            .field("colors", &self.colors.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3::new(x, y, z)
    }

    #[test]
    fn test_add_position_updates_count() {
        let mut acc = VertexAccumulator::new();
        assert!(acc.is_empty());
        acc.add_position(v(1.0, 2.0, 3.0));
        acc.add_position(v(1.0, 2.0, 3.0));
        assert_eq!(acc.vertex_count(), 2);
        assert_eq!(acc.positions()[1], v(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_add_triangle_keeps_literal_order() {
        let (a, b, c) = (v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0));
        let mut acc = VertexAccumulator::new();
        acc.add_triangle(c, a, b);
        assert_eq!(acc.positions(), &[c, a, b]);
        assert_eq!(acc.triangle_count(), 1);
    }

    #[test]
    fn test_add_quad_decomposition() {
        let bl = v(0.0, 0.0, 0.0);
        let br = v(1.0, 0.0, 0.0);
        let tl = v(0.0, 1.0, 0.0);
        let tr = v(1.0, 1.0, 0.0);

        let mut acc = VertexAccumulator::new();
        acc.add_quad(bl, br, tl, tr);

        assert_eq!(acc.positions(), &[bl, br, tl, tl, br, tr]);
    }

    #[test]
    fn test_complete_colors_pads_to_position_count() {
        let red = v(1.0, 0.0, 0.0);
        let grey = v(0.5, 0.5, 0.5);

        let mut acc = VertexAccumulator::new();
        acc.add_color(red);
        acc.add_triangle(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0));
        assert!(!acc.is_complete());

        acc.complete_colors(grey);
        assert!(acc.is_complete());
        assert_eq!(acc.colors(), &[red, grey, grey]);

        // second call changes nothing
        acc.complete_colors(red);
        assert_eq!(acc.colors(), &[red, grey, grey]);
    }

    #[test]
    fn test_complete_colors_trims_extra_colors() {
        let red = v(1.0, 0.0, 0.0);
        let green = v(0.0, 1.0, 0.0);
        let mut acc = VertexAccumulator::new();
        for _ in 0..2 {
            acc.add_color(red);
            acc.add_color(green);
        }
        acc.add_triangle(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0));
        assert!(!acc.is_complete());

        acc.complete_colors(v(0.0, 0.0, 1.0));
        assert!(acc.is_complete());
        assert_eq!(acc.colors(), &[red, green, red]);

        let vertices = acc.interleave().unwrap();
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[1].color, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_interleave_requires_complete_colors() {
        let mut acc = VertexAccumulator::new();
        acc.add_triangle(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0));

        assert_eq!(
            acc.interleave(),
            Err(MeshError::ColorCountMismatch {
                positions: 3,
                colors: 0
            })
        );

        acc.complete_colors(v(0.2, 0.4, 0.6));
        let vertices = acc.interleave().unwrap();
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(vertices[1].color, [0.2, 0.4, 0.6]);
    }

    #[test]
    fn test_clear() {
        let mut acc = VertexAccumulator::new();
        acc.add_quad(
            v(0.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(0.0, 1.0, 0.0),
            v(1.0, 1.0, 0.0),
        );
        acc.complete_colors(v(1.0, 1.0, 1.0));
        acc.clear();
        assert!(acc.is_empty());
        assert!(acc.colors().is_empty());
    }
}
