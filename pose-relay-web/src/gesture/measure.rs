//! Body measurements derived from a pose
//!
//! Shoulder width is a scale reference for distance-to-camera normalization.
//! The raise decision does not use it.

use crate::config::ClassifierConfig;
use crate::pose::{Landmark, Pose, LEFT_SHOULDER, RIGHT_SHOULDER};
use super::classifier::primary_pose;

/// Distance between the shoulders of the first pose, 0 if unavailable
pub fn shoulder_width(poses: &[Pose]) -> f32 {
    shoulder_width_with(poses, &ClassifierConfig::default())
}

/// Same pose acceptance rule as `analyze_pose_with` for the given config
pub fn shoulder_width_with(poses: &[Pose], config: &ClassifierConfig) -> f32 {
    let pose = match primary_pose(poses, config) {
        Some(p) => p,
        None => return 0.0,
    };

    match (pose.get(LEFT_SHOULDER), pose.get(RIGHT_SHOULDER)) {
        (Some(left), Some(right)) => planar_distance(left, right),
        _ => 0.0,
    }
}

/// Euclidean distance in the image plane (z ignored)
pub fn planar_distance(a: &Landmark, b: &Landmark) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::POSE_LANDMARK_COUNT;

    fn pose_with_shoulders(left: (f32, f32), right: (f32, f32)) -> Pose {
        let mut lms = vec![Landmark::default(); POSE_LANDMARK_COUNT];
        lms[LEFT_SHOULDER] = Landmark::new(left.0, left.1, 0.0, 1.0);
        lms[RIGHT_SHOULDER] = Landmark::new(right.0, right.1, 0.0, 1.0);
        Pose::new(lms)
    }

    #[test]
    fn test_width_3_4_5() {
        let pose = pose_with_shoulders((0.3, 0.4), (0.0, 0.0));
        assert!((shoulder_width(&[pose]) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_symmetric_under_swap() {
        let a = pose_with_shoulders((0.62, 0.41), (0.38, 0.44));
        let b = pose_with_shoulders((0.38, 0.44), (0.62, 0.41));
        assert_eq!(shoulder_width(&[a]), shoulder_width(&[b]));
    }

    #[test]
    fn test_missing_data_is_zero() {
        assert_eq!(shoulder_width(&[]), 0.0);

        // Too short to hold the right shoulder
        let short = Pose::new(vec![Landmark::new(1.0, 1.0, 0.0, 1.0); 12]);
        assert_eq!(shoulder_width(&[short]), 0.0);
    }

    #[test]
    fn test_depth_ignored() {
        let mut lms = vec![Landmark::default(); POSE_LANDMARK_COUNT];
        lms[LEFT_SHOULDER] = Landmark::new(0.6, 0.5, -0.3, 1.0);
        lms[RIGHT_SHOULDER] = Landmark::new(0.4, 0.5, 0.3, 1.0);
        assert!((shoulder_width(&[Pose::new(lms)]) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_width_follows_configured_min_landmarks() {
        use crate::gesture::analyze_pose_with;
        use crate::pose::{LEFT_ELBOW, LEFT_WRIST};

        // 20 landmarks: shoulders present, right arm indices partly missing
        let mut lms = vec![Landmark::new(0.5, 0.5, 0.0, 1.0); 20];
        lms[LEFT_SHOULDER] = Landmark::new(0.6, 0.4, 0.0, 1.0);
        lms[RIGHT_SHOULDER] = Landmark::new(0.4, 0.4, 0.0, 1.0);
        lms[LEFT_ELBOW].y = 0.3;
        lms[LEFT_WRIST].y = 0.2;
        let poses = [Pose::new(lms)];
        let config = ClassifierConfig { min_landmarks: 17, ..Default::default() };

        assert!(analyze_pose_with(&poses, &config).left_arm_raised);
        assert!((shoulder_width_with(&poses, &config) - 0.2).abs() < 1e-6);
        assert_eq!(shoulder_width(&poses), 0.0);
    }

    #[test]
    fn test_missing_shoulder_with_relaxed_length() {
        // Accepted by length, but index 12 is absent
        let short = Pose::new(vec![Landmark::new(1.0, 1.0, 0.0, 1.0); 12]);
        let config = ClassifierConfig { min_landmarks: 1, ..Default::default() };
        assert_eq!(shoulder_width_with(&[short], &config), 0.0);
    }
}
