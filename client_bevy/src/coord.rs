use bevy::prelude::{Transform, Vec3};
use soccer_shared::camera::CameraPose;
use soccer_shared::vec3::Vec3 as PitchPos;

/// Pitch coordinates and bevy world coordinates share axes: x to the right,
/// y up, z toward the bottom of the screen.
pub fn to_world(p: PitchPos) -> Vec3 {
    Vec3::from_array(p.to_array())
}

/// Camera transform for a pose. Looking straight down makes the usual +y up
/// vector degenerate, so -z is used: +x then reads left to right on screen.
pub fn camera_transform(pose: CameraPose) -> Transform {
    Transform::from_translation(to_world(pose.position))
        .looking_at(to_world(pose.target), Vec3::NEG_Z)
}
