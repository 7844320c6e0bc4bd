//! # Primitives Demo
//!
//! Generates one primitive, renders it for a few frames against the
//! recording backend, and logs what reached the device.
//!
//! ```bash
//! RUST_LOG=debug cargo run --bin primitives_demo -- --shape tube --subdivisions 32
//! ```

use std::sync::Arc;

use clap::Parser;
use meshforge_core::math::{self, Vec3};
use meshforge_core::mesh::Primitive;
use meshforge_graphics::{
    BASIC_SHADER, DummyBackend, GraphicsError, Mesh, ShaderHandle, ShaderLibrary,
};

/// Shape selection for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
enum Shape {
    #[default]
    Cube,
    /// Box of width and depth `2 * radius` and the given height.
    Cuboid,
    Cone,
    Cylinder,
    Tube,
    /// Currently rendered as a cube.
    Torus,
    Sphere,
}

#[derive(Parser, Debug)]
#[command(
    name = "primitives_demo",
    about = "Generate and render a MeshForge primitive",
    version
)]
struct Args {
    /// Primitive to generate.
    #[arg(long, default_value = "cube", value_enum)]
    shape: Shape,

    /// Radius (outer radius for tube and torus, half edge for cube).
    #[arg(long, default_value = "1.0")]
    radius: f32,

    /// Inner radius for tube and torus.
    #[arg(long, default_value = "0.5")]
    inner_radius: f32,

    /// Height for cuboid, cone, cylinder and tube.
    #[arg(long, default_value = "2.0")]
    height: f32,

    /// Angular steps (clamped to 3..=360; spheres cap at 6).
    #[arg(long, default_value = "16")]
    subdivisions: u32,

    /// Base color as `r,g,b`.
    #[arg(long, value_delimiter = ',', num_args = 3, default_values_t = [0.9, 0.4, 0.1])]
    color: Vec<f32>,

    /// Number of frames to render.
    #[arg(long, default_value = "1")]
    frames: u32,
}

impl Args {
    fn primitive(&self) -> Primitive {
        match self.shape {
            Shape::Cube => Primitive::Cube {
                size: self.radius * 2.0,
            },
            Shape::Cuboid => Primitive::Cuboid {
                dimensions: Vec3::new(self.radius * 2.0, self.height, self.radius * 2.0),
            },
            Shape::Cone => Primitive::Cone {
                radius: self.radius,
                height: self.height,
                subdivisions: self.subdivisions,
            },
            Shape::Cylinder => Primitive::Cylinder {
                radius: self.radius,
                height: self.height,
                subdivisions: self.subdivisions,
            },
            Shape::Tube => Primitive::Tube {
                outer_radius: self.radius,
                inner_radius: self.inner_radius,
                height: self.height,
                subdivisions: self.subdivisions,
            },
            Shape::Torus => Primitive::Torus {
                outer_radius: self.radius,
                inner_radius: self.inner_radius,
                subdivisions_a: self.subdivisions,
                subdivisions_b: self.subdivisions,
            },
            Shape::Sphere => Primitive::Sphere {
                radius: self.radius,
                subdivisions: self.subdivisions,
            },
        }
    }

    fn color(&self) -> Vec3 {
        match self.color.as_slice() {
            [r, g, b] => Vec3::new(*r, *g, *b),
            _ => Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

fn main() -> Result<(), GraphicsError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    meshforge_core::init();
    meshforge_graphics::init();

    let args = Args::parse();
    let primitive = args.primitive();
    log::info!("Generating {:?}", primitive);

    let backend = Arc::new(DummyBackend::new());
    let basic = ShaderHandle::new(1)
        .ok_or_else(|| GraphicsError::InvalidParameter("zero shader handle".to_string()))?;
    let shaders = Arc::new(ShaderLibrary::new().with_shader(BASIC_SHADER, basic));

    let mut mesh = Mesh::new(backend.clone(), shaders);
    mesh.generate(primitive, args.color())?;

    let projection = math::perspective_rh(45f32.to_radians(), 16.0 / 9.0, 0.1, 100.0);
    let view = math::look_at_rh(
        &Vec3::new(0.0, 2.0, 6.0),
        &Vec3::zeros(),
        &Vec3::new(0.0, 1.0, 0.0),
    );

    for frame in 0..args.frames {
        let angle = frame as f32 * 0.05;
        let model = math::mat4_from_rotation_y(angle);
        mesh.render(&projection, &view, &model)?;
    }

    let uploaded = mesh
        .gpu_handles()
        .and_then(|(_, buffer)| backend.buffer_data(buffer))
        .map_or(0, |bytes| bytes.len());

    log::info!(
        "{}: {} vertices, {} triangles, {} bytes uploaded, {} draw calls over {} frames",
        primitive.label(),
        mesh.vertex_count(),
        mesh.geometry().triangle_count(),
        uploaded,
        backend.draw_calls().len(),
        args.frames
    );
    Ok(())
}
