use crate::math::Vec3;

use super::data::VertexAccumulator;
use super::generators;

/// Shape descriptor for one of the parametric primitives.
///
/// Holds the caller's parameters as given; clamping happens when the
/// primitive is generated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Cube {
        size: f32,
    },
    Cuboid {
        dimensions: Vec3,
    },
    Cone {
        radius: f32,
        height: f32,
        subdivisions: u32,
    },
    Cylinder {
        radius: f32,
        height: f32,
        subdivisions: u32,
    },
    Tube {
        outer_radius: f32,
        inner_radius: f32,
        height: f32,
        subdivisions: u32,
    },
    Torus {
        outer_radius: f32,
        inner_radius: f32,
        subdivisions_a: u32,
        subdivisions_b: u32,
    },
    Sphere {
        radius: f32,
        subdivisions: u32,
    },
}

impl Primitive {
    /// Run the matching generator.
    pub fn generate(&self, color: Vec3) -> VertexAccumulator {
        match *self {
            Self::Cube { size } => generators::generate_cube(size, color),
            Self::Cuboid { dimensions } => generators::generate_cuboid(dimensions, color),
            Self::Cone {
                radius,
                height,
                subdivisions,
            } => generators::generate_cone(radius, height, subdivisions, color),
            Self::Cylinder {
                radius,
                height,
                subdivisions,
            } => generators::generate_cylinder(radius, height, subdivisions, color),
            Self::Tube {
                outer_radius,
                inner_radius,
                height,
                subdivisions,
            } => generators::generate_tube(outer_radius, inner_radius, height, subdivisions, color),
            Self::Torus {
                outer_radius,
                inner_radius,
                subdivisions_a,
                subdivisions_b,
            } => generators::generate_torus(
                outer_radius,
                inner_radius,
                subdivisions_a,
                subdivisions_b,
                color,
            ),
            Self::Sphere {
                radius,
                subdivisions,
            } => generators::generate_sphere(radius, subdivisions, color),
        }
    }

    /// Short lowercase name, used for logging and labels.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cube { .. } => "cube",
            Self::Cuboid { .. } => "cuboid",
            Self::Cone { .. } => "cone",
            Self::Cylinder { .. } => "cylinder",
            Self::Tube { .. } => "tube",
            Self::Torus { .. } => "torus",
            Self::Sphere { .. } => "sphere",
        }
    }
}
