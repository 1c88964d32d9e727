use glam::{EulerRot, Mat4, Quat, Vec3};

/// Full pose of the showpiece for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowpieceTransform {
    /// Rotation about the horizontal (X) axis, radians.
    pub pitch: f32,
    /// Rotation about the vertical (Y) axis, radians.
    pub yaw: f32,
    /// Rotation about the view (Z) axis, radians.
    pub roll: f32,
    /// Uniform scale.
    pub scale: f32,
    /// Vertical position.
    pub offset_y: f32,
}

impl Default for ShowpieceTransform {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            scale: 1.0,
            offset_y: 0.0,
        }
    }
}

impl ShowpieceTransform {
    /// Rotation as a quaternion, applying X, then Y, then Z intrinsically
    /// (the default Euler order of common WebGL scene graphs).
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, self.roll)
    }

    /// Model matrix: scale, then rotate, then lift by `offset_y`.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.rotation(),
            Vec3::new(0.0, self.offset_y, 0.0),
        )
    }
}

/// The rendered object the stage drives.
///
/// Implemented by whatever the host's scene graph uses for the showpiece
/// node. The stage calls [`apply_transform`](Self::apply_transform) once per
/// updated frame; the host renders afterwards.
pub trait DisplayObject {
    /// Copy the frame's pose onto the object.
    fn apply_transform(&mut self, transform: &ShowpieceTransform);
}

impl DisplayObject for ShowpieceTransform {
    fn apply_transform(&mut self, transform: &ShowpieceTransform) {
        *self = *transform;
    }
}

impl DisplayObject for Mat4 {
    fn apply_transform(&mut self, transform: &ShowpieceTransform) {
        *self = transform.to_matrix();
    }
}
