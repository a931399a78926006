use crate::math::{Point3, UnitQuaternion, Vector3, TOLERANCE};

/// The capabilities the scheduler needs from the patrolling object.
///
/// Whatever the asset loader produces only has to be placeable and
/// orientable; the scheduler never looks at anything else.
pub trait MovingObject {
    /// Moves the object to `position`.
    fn set_position(&mut self, position: Point3);

    /// Turns the object so its local +Z axis points at `target`.
    fn look_at(&mut self, target: &Point3);

    /// Applies `rotation` in the object's local frame, after any `look_at`.
    fn rotate_local(&mut self, rotation: &UnitQuaternion);
}

/// A plain scene-graph transform node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Point3,
    pub rotation: UnitQuaternion,
}

impl Transform {
    /// Creates an identity transform at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
        }
    }

    /// The local +Z axis in world space.
    #[must_use]
    pub fn forward(&self) -> Vector3 {
        self.rotation * Vector3::z()
    }

    /// The local +Y axis in world space.
    #[must_use]
    pub fn up(&self) -> Vector3 {
        self.rotation * Vector3::y()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl MovingObject for Transform {
    fn set_position(&mut self, position: Point3) {
        self.position = position;
    }

    fn look_at(&mut self, target: &Point3) {
        let Some(dir) = (target - self.position).try_normalize(TOLERANCE) else {
            return;
        };
        // world up, unless the heading is (anti)parallel to it
        let up = if dir.cross(&Vector3::y()).norm() < 1e-6 {
            Vector3::z()
        } else {
            Vector3::y()
        };
        self.rotation = UnitQuaternion::face_towards(&dir, &up);
    }

    fn rotate_local(&mut self, rotation: &UnitQuaternion) {
        self.rotation *= rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn look_at_points_forward_axis_at_target() {
        let mut t = Transform::new();
        t.set_position(Point3::new(1.0, 2.0, 3.0));
        t.look_at(&Point3::new(4.0, 2.0, 7.0));
        assert_abs_diff_eq!(t.forward(), Vector3::new(0.6, 0.0, 0.8), epsilon = 1e-9);
        assert!(t.up().y > 0.0);
    }

    #[test]
    fn look_at_straight_up_is_finite() {
        let mut t = Transform::new();
        t.look_at(&Point3::new(0.0, 5.0, 0.0));
        assert_abs_diff_eq!(t.forward(), Vector3::y(), epsilon = 1e-9);
    }

    #[test]
    fn look_at_own_position_keeps_rotation() {
        let mut t = Transform::new();
        t.look_at(&Point3::new(1.0, 0.0, 0.0));
        let before = t.rotation;
        let here = t.position;
        t.look_at(&here);
        assert_eq!(t.rotation, before);
    }

    #[test]
    fn local_rotation_applies_after_look_at() {
        let mut t = Transform::new();
        t.look_at(&Point3::new(0.0, 0.0, -1.0));
        t.rotate_local(&UnitQuaternion::from_euler_angles(0.0, FRAC_PI_2, 0.0));
        // local +Z turned to local +X, which faces world -X after looking down -Z
        assert_abs_diff_eq!(t.forward(), Vector3::new(-1.0, 0.0, 0.0), epsilon = 1e-9);
    }
}
