use glam::{Mat4, Vec3};
use uuid::Uuid;

/// Radius of the camera orbit around the origin, in world units.
pub const ORBIT_RADIUS: f32 = 8.0;
/// Fixed camera height during the orbit.
pub const ORBIT_HEIGHT: f32 = 2.0;
/// Angular speed of the orbit in radians per second.
pub const ORBIT_SPEED: f32 = 0.2;

/// Perspective camera orbiting the figure.
///
/// Position and orientation are derived entirely from the animation clock
/// (see [`set_orbit`](Self::set_orbit)); no other component mutates them.
/// The aspect ratio is the one piece of externally-driven state, updated by
/// the viewport resize adapter.
#[derive(Debug, Clone)]
pub struct Camera {
    pub uuid: Uuid,

    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    pub position: Vec3,
    pub target: Vec3,

    projection_matrix: Mat4,
    view_matrix: Mat4,
}

impl Camera {
    /// Creates a perspective camera. `fov` is in degrees, matching the
    /// usual scene-setup convention.
    #[must_use]
    pub fn new_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            uuid: Uuid::new_v4(),
            fov: fov.to_radians(),
            aspect,
            near,
            far,
            position: Vec3::new(0.0, ORBIT_HEIGHT, ORBIT_RADIUS),
            target: Vec3::ZERO,
            projection_matrix: Mat4::IDENTITY,
            view_matrix: Mat4::IDENTITY,
        };
        cam.update_projection_matrix();
        cam.update_view_matrix();
        cam
    }

    /// Recomputes the projection matrix from the current fov/aspect/planes.
    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
    }

    /// Sets a new aspect ratio and refreshes the projection.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection_matrix();
    }

    /// Recomputes the view matrix from position and target.
    pub fn update_view_matrix(&mut self) {
        self.view_matrix = Mat4::look_at_rh(self.position, self.target, Vec3::Y);
    }

    /// Places the camera on its orbit for elapsed time `t` and aims it at
    /// the origin. The orbit is periodic with period `2π /` [`ORBIT_SPEED`].
    pub fn set_orbit(&mut self, t: f32) {
        let angle = t * ORBIT_SPEED;
        self.position = Vec3::new(
            angle.cos() * ORBIT_RADIUS,
            ORBIT_HEIGHT,
            angle.sin() * ORBIT_RADIUS,
        );
        self.target = Vec3::ZERO;
        self.update_view_matrix();
    }

    #[inline]
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    #[inline]
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }
}
