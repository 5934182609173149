//! Arm-raise classifier
//!
//! Maps the first detected pose to a raised/lowered flag per arm. Every frame
//! is classified independently: no smoothing, no hysteresis.

use crate::config::ClassifierConfig;
use crate::pose::{
    Landmark, Pose,
    LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST,
    RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST,
};

/// Which arm (from the subject's point of view, as labelled by the model)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArmSide {
    Left,
    Right,
}

impl ArmSide {
    /// (shoulder, elbow, wrist) landmark indices
    pub fn joints(&self) -> (usize, usize, usize) {
        match self {
            ArmSide::Left => (LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST),
            ArmSide::Right => (RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ArmSide::Left => "left",
            ArmSide::Right => "right",
        }
    }
}

/// Per-arm raised flags for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureState {
    pub left_arm_raised: bool,
    pub right_arm_raised: bool,
}

impl GestureState {
    pub fn new(left_arm_raised: bool, right_arm_raised: bool) -> Self {
        Self { left_arm_raised, right_arm_raised }
    }

    pub fn is_raised(&self, side: ArmSide) -> bool {
        match side {
            ArmSide::Left => self.left_arm_raised,
            ArmSide::Right => self.right_arm_raised,
        }
    }
}

/// Classify with the fixed default thresholds
pub fn analyze_pose(poses: &[Pose]) -> GestureState {
    analyze_pose_with(poses, &ClassifierConfig::default())
}

/// Classify the first pose in `poses`; extra bodies are ignored
pub fn analyze_pose_with(poses: &[Pose], config: &ClassifierConfig) -> GestureState {
    let pose = match primary_pose(poses, config) {
        Some(p) => p,
        None => return GestureState::default(),
    };

    GestureState {
        left_arm_raised: arm_raised(pose, ArmSide::Left, config),
        right_arm_raised: arm_raised(pose, ArmSide::Right, config),
    }
}

/// First pose, if it is long enough to hold every arm landmark
pub(crate) fn primary_pose<'a>(poses: &'a [Pose], config: &ClassifierConfig) -> Option<&'a Pose> {
    poses.first().filter(|p| p.len() >= config.min_landmarks)
}

/// Raised = wrist strictly above shoulder AND elbow no lower than
/// shoulder + tolerance. Image y grows downward.
pub fn arm_raised(pose: &Pose, side: ArmSide, config: &ClassifierConfig) -> bool {
    let (shoulder_idx, elbow_idx, wrist_idx) = side.joints();

    let (shoulder, elbow, wrist) = match (
        pose.get(shoulder_idx),
        pose.get(elbow_idx),
        pose.get(wrist_idx),
    ) {
        (Some(s), Some(e), Some(w)) => (s, e, w),
        _ => return false,
    };

    if !arm_visible([shoulder, elbow, wrist], config.visibility_threshold) {
        return false;
    }

    let wrist_above_shoulder = wrist.y < shoulder.y;
    let elbow_raised = elbow.y <= shoulder.y + config.elbow_tolerance;

    wrist_above_shoulder && elbow_raised
}

/// Every joint must be strictly above the threshold.
/// NaN visibility fails the comparison and counts as not visible.
fn arm_visible(joints: [&Landmark; 3], threshold: f32) -> bool {
    joints.iter().all(|lm| lm.visibility > threshold)
}
