use crate::vec3::Vec3;

pub const CAMERA_HEIGHT: f32 = 40.0;
pub const CAMERA_FOV_DEGREES: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    /// Straight down onto the centre spot.
    pub const TOP_DOWN: CameraPose = CameraPose {
        position: Vec3::new(0.0, CAMERA_HEIGHT, 0.0),
        target: Vec3::ZERO,
    };
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::TOP_DOWN
    }
}

/// Size of the drawing surface in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Record a new size. Returns false when nothing changed.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if self.width == width && self.height == height {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    /// None while either side is zero (minimized windows report 0x0).
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(self.width / self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_down_pose_looks_at_origin() {
        let pose = CameraPose::default();
        assert_eq!(pose.position, Vec3::new(0.0, 40.0, 0.0));
        assert_eq!(pose.target, Vec3::ZERO);
    }

    #[test]
    fn resize_reports_changes_only() {
        let mut vp = Viewport::new(1280.0, 720.0);
        assert!(!vp.resize(1280.0, 720.0));
        assert!(vp.resize(800.0, 600.0));
        assert!((vp.aspect_ratio().unwrap() - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn zero_sized_viewport_has_no_aspect() {
        let mut vp = Viewport::new(1280.0, 720.0);
        vp.resize(0.0, 0.0);
        assert_eq!(vp.aspect_ratio(), None);
        assert_eq!(Viewport::new(640.0, 0.0).aspect_ratio(), None);
    }
}
