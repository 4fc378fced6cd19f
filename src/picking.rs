//! CPU ray picking against the pendulum plane.
//!
//! The pendulum lives entirely in the z = 0 plane, so picking reduces to a
//! single ray-plane intersection followed by an `atan2` around the pivot.
//! Degenerate geometry (ray parallel to the plane, intersection at the
//! pivot, non-finite results) yields `None`, which callers treat as a
//! no-op so that NaN never reaches the simulation state or the render
//! transform.

use glam::Vec3;

/// Rays steeper than this against the plane normal are treated as parallel.
const PARALLEL_EPS: f32 = 1e-6;

/// Ephemeral pointer ray, derived per pointer event from NDC. Never stored.
#[derive(Debug, Clone, Copy)]
pub struct PointerRay {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl PointerRay {
    /// Intersection with the z = 0 plane containing the pendulum.
    ///
    /// `None` when the ray is parallel to the plane or the intersection
    /// lies behind the ray origin.
    pub fn intersect_pendulum_plane(&self) -> Option<Vec3> {
        if self.direction.z.abs() < PARALLEL_EPS {
            return None;
        }
        let t = -self.origin.z / self.direction.z;
        if !t.is_finite() || t < 0.0 {
            return None;
        }
        Some(self.origin + self.direction * t)
    }
}

/// Angle of the vector from the pivot (origin) to the ray's intersection
/// with the pendulum plane, as `atan2(y, x)`.
///
/// Note this is the raw mathematical angle; the drag handler applies the
/// rendering convention's pi/2 phase offset on pointer-move.
pub fn pointer_to_angle(ray: &PointerRay) -> Option<f32> {
    let hit = ray.intersect_pendulum_plane()?;
    if hit.x == 0.0 && hit.y == 0.0 {
        // Pointer exactly on the pivot: the angle is indeterminate.
        return None;
    }
    let angle = hit.y.atan2(hit.x);
    angle.is_finite().then_some(angle)
}

/// Pure hit test: does `point` fall strictly within `radius` of the bob
/// center? A press exactly on the boundary does not grab.
pub fn hits_bob(point: Vec3, bob_center: Vec3, radius: f32) -> bool {
    point.distance_squared(bob_center) < radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{bob_position, GRAB_RADIUS};
    use rand::Rng;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    /// Ray shooting straight at (x, y) on the pendulum plane.
    fn ray_at(x: f32, y: f32) -> PointerRay {
        PointerRay {
            origin: Vec3::new(x, y, 5.0),
            direction: Vec3::NEG_Z,
        }
    }

    fn angle_diff(a: f32, b: f32) -> f32 {
        ((a - b + PI).rem_euclid(TAU) - PI).abs()
    }

    #[test]
    fn test_plane_intersection() {
        let hit = ray_at(1.5, -0.5).intersect_pendulum_plane().unwrap();
        assert!((hit - Vec3::new(1.5, -0.5, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_parallel_ray_is_none() {
        let ray = PointerRay {
            origin: Vec3::new(0.0, 0.0, 5.0),
            direction: Vec3::X,
        };
        assert!(ray.intersect_pendulum_plane().is_none());
        assert!(pointer_to_angle(&ray).is_none());
    }

    #[test]
    fn test_behind_origin_is_none() {
        let ray = PointerRay {
            origin: Vec3::new(0.0, 0.0, 5.0),
            direction: Vec3::Z,
        };
        assert!(ray.intersect_pendulum_plane().is_none());
    }

    #[test]
    fn test_pivot_hit_is_indeterminate() {
        assert!(pointer_to_angle(&ray_at(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_angle_round_trips_through_bob_position() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let angle: f32 = rng.gen_range(-PI..=PI);
            let bob = bob_position(angle);
            let raw = pointer_to_angle(&ray_at(bob.x, bob.y)).unwrap();
            // Interaction convention: pointer-move adds pi/2.
            assert!(
                angle_diff(raw + FRAC_PI_2, angle) < 1e-4,
                "round trip failed for angle {angle}"
            );
        }
    }

    #[test]
    fn test_hit_test_radius() {
        let bob = bob_position(0.0);
        assert!(hits_bob(bob + Vec3::new(0.3, 0.0, 0.0), bob, GRAB_RADIUS));
        assert!(!hits_bob(bob + Vec3::new(0.6, 0.0, 0.0), bob, GRAB_RADIUS));
    }

    #[test]
    fn test_hit_test_boundary_is_a_miss() {
        let bob = bob_position(0.0);
        assert!(!hits_bob(
            bob + Vec3::new(GRAB_RADIUS, 0.0, 0.0),
            bob,
            GRAB_RADIUS
        ));
    }
}
