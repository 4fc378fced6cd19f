//! Fixed front-view camera for the pendulum scene.
//!
//! The camera looks straight down the -z axis at the pendulum plane, so
//! picking rays and projected label positions are well conditioned. Rays
//! are recovered by unprojecting NDC points through the inverse
//! view-projection; the reverse direction projects world points back to
//! NDC for the on-screen angle scale.

use glam::{Mat4, Vec3};

/// Vertical field of view in radians.
const FOV_Y: f32 = std::f32::consts::FRAC_PI_4;

/// Near/far planes for the perspective projection.
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

/// Perspective camera at a fixed offset in front of the pendulum plane.
pub struct Camera {
    /// Distance from the target point along +z.
    pub distance: f32,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
}

impl Camera {
    /// Front view centered between the pivot and the bob's rest position.
    pub fn new() -> Self {
        Self {
            distance: 6.0,
            target: Vec3::new(0.0, -1.0, 0.0),
            fov_y: FOV_Y,
        }
    }

    /// The camera's world position.
    pub fn position(&self) -> Vec3 {
        self.target + Vec3::new(0.0, 0.0, self.distance)
    }

    /// View matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Perspective projection for the given aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, Z_NEAR, Z_FAR)
    }

    /// Combined view-projection matrix.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// World-space ray through the given NDC point (x, y in [-1, 1],
    /// y up). Unprojects the near and far planes and spans them.
    pub fn ndc_ray(&self, ndc: glam::Vec2, aspect: f32) -> crate::picking::PointerRay {
        let inverse = self.view_proj(aspect).inverse();
        // glam's perspective_rh uses 0..1 depth; z = 0 is the near plane.
        let near = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        crate::picking::PointerRay {
            origin: near,
            direction: (far - near).normalize(),
        }
    }

    /// Project a world point to NDC, or `None` when it sits behind the
    /// camera (non-positive clip w).
    pub fn world_to_ndc(&self, world: Vec3, aspect: f32) -> Option<glam::Vec2> {
        let clip = self.view_proj(aspect) * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(glam::Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::bob_position;
    use glam::Vec2;

    const ASPECT: f32 = 16.0 / 9.0;

    #[test]
    fn test_center_ray_hits_target_column() {
        let camera = Camera::new();
        let ray = camera.ndc_ray(Vec2::ZERO, ASPECT);
        let hit = ray.intersect_pendulum_plane().unwrap();
        assert!((hit - camera.target).length() < 1e-3);
    }

    #[test]
    fn test_ndc_ray_points_into_the_scene() {
        let camera = Camera::new();
        for ndc in [Vec2::new(-0.8, 0.5), Vec2::new(0.3, -0.9), Vec2::ZERO] {
            let ray = camera.ndc_ray(ndc, ASPECT);
            assert!(ray.direction.z < 0.0);
            assert!((ray.direction.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_project_unproject_round_trip() {
        let camera = Camera::new();
        for angle in [-1.2_f32, -0.4, 0.0, 0.7, 1.4] {
            let world = bob_position(angle);
            let ndc = camera.world_to_ndc(world, ASPECT).unwrap();
            let ray = camera.ndc_ray(ndc, ASPECT);
            let hit = ray.intersect_pendulum_plane().unwrap();
            assert!(
                (hit - world).length() < 1e-2,
                "round trip failed at angle {angle}"
            );
        }
    }

    #[test]
    fn test_point_behind_camera_is_none() {
        let camera = Camera::new();
        let behind = camera.position() + Vec3::new(0.0, 0.0, 5.0);
        assert!(camera.world_to_ndc(behind, ASPECT).is_none());
    }
}
