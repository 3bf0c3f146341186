use glam::{Mat4, Vec2, Vec3};

use crate::options::CameraOptions;

/// Orthographic 2D camera described by a center position and a visible
/// height in world units.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2d {
    /// Center of the view in world space. Navigation only moves X and Y.
    pub position: Vec3,
    /// Visible vertical extent in world units (smaller = zoomed in).
    height: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Viewport height in screen pixels.
    pub resolution: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera2d {
    /// Camera centred on the origin showing `height` world units over
    /// `resolution` screen pixels.
    #[must_use]
    pub fn new(height: f32, resolution: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            height,
            aspect: 1.0,
            resolution,
            znear: -1.0,
            zfar: 1.0,
        }
    }

    /// Camera initialised from configured defaults.
    #[must_use]
    pub fn from_options(options: &CameraOptions, resolution: f32) -> Self {
        Self {
            position: Vec3::from_array(options.position),
            znear: options.znear,
            zfar: options.zfar,
            ..Self::new(options.height, resolution)
        }
    }

    /// Visible vertical extent in world units.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Set the visible vertical extent in world units.
    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    /// World units covered by one screen pixel.
    #[must_use]
    pub fn pixel_size(&self) -> f32 {
        self.height / self.resolution
    }

    /// Visible width in world units.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.height * self.aspect
    }

    /// Translate the view center in the XY plane.
    pub fn translate_xy(&mut self, delta: Vec2) {
        self.position.x += delta.x;
        self.position.y += delta.y;
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let half_w = self.width() * 0.5;
        let half_h = self.height * 0.5;
        let proj = Mat4::orthographic_rh(
            -half_w, half_w, -half_h, half_h, self.znear, self.zfar,
        );
        let view = Mat4::from_translation(Vec3::new(
            -self.position.x,
            -self.position.y,
            0.0,
        ));
        proj * view
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Inverse of `view_proj`, for reconstructing world positions.
    pub inv_view_proj: [[f32; 4]; 4],
    /// Camera center in world space.
    pub position: [f32; 2],
    /// World units per screen pixel.
    pub pixel_size: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity transforms.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            inv_view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 2],
            pixel_size: 1.0,
            _pad: 0.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera2d) {
        let view_proj = camera.build_matrix();
        self.view_proj = view_proj.to_cols_array_2d();
        self.inv_view_proj = view_proj.inverse().to_cols_array_2d();
        self.position = [camera.position.x, camera.position.y];
        self.pixel_size = camera.pixel_size();
    }
}
