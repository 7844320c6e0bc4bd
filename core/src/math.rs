//! Math type aliases and helper functions.
//!
//! Positions, colors and transforms are single-precision nalgebra types.

pub use nalgebra;

/// 3D vector (f32). Used for both positions and RGB colors.
pub type Vec3 = nalgebra::Vector3<f32>;

/// 4x4 matrix (f32).
pub type Mat4 = nalgebra::Matrix4<f32>;

/// Combine caller-supplied transforms as `projection * view * model`.
pub fn model_view_projection(projection: &Mat4, view: &Mat4, model: &Mat4) -> Mat4 {
    projection * view * model
}

/// Build a right-handed perspective projection with depth range [0, 1].
pub fn perspective_rh(yfov: f32, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
    let f = 1.0 / (yfov / 2.0).tan();
    let nf = 1.0 / (znear - zfar);
    #[rustfmt::skip]
    let result = Mat4::new(
        f / aspect, 0.0,  0.0,              0.0,
        0.0,        f,    0.0,              0.0,
        0.0,        0.0,  zfar * nf,        znear * zfar * nf,
        0.0,        0.0,  -1.0,             0.0,
    );
    result
}

/// Right-handed look-at view matrix.
pub fn look_at_rh(eye: &Vec3, target: &Vec3, up: &Vec3) -> Mat4 {
    let eye_point = nalgebra::Point3::from(*eye);
    let target_point = nalgebra::Point3::from(*target);
    nalgebra::Isometry3::look_at_rh(&eye_point, &target_point, up).to_homogeneous()
}

/// Build a translation-only 4x4 matrix.
pub fn mat4_from_translation(t: Vec3) -> Mat4 {
    Mat4::new_translation(&t)
}

/// Build a rotation around the Y axis (radians).
pub fn mat4_from_rotation_y(angle: f32) -> Mat4 {
    Mat4::new_rotation(Vec3::new(0.0, angle, 0.0))
}
