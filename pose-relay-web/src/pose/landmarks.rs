//! Pose landmark types and unpacking of JS landmark buffers
//!
//! MediaPipe delivers `results.landmarks` as an array of poses, each an array
//! of `{x, y, z, visibility}` objects. JS flattens that into a Float32Array
//! with 4 values per landmark before handing it to Rust.

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const NOSE: usize = 0;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;

/// Landmarks emitted per body by the full MediaPipe Pose model
pub const POSE_LANDMARK_COUNT: usize = 33;

/// Floats per landmark in the flat buffer: x, y, z, visibility
pub const LANDMARK_STRIDE: usize = 4;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single tracked body point (normalized image coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,          // 0-1 normalized
    pub y: f32,          // 0-1 normalized, grows downward
    pub z: f32,          // Relative depth
    pub visibility: f32, // 0-1 confidence
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self { x, y, z, visibility }
    }
}

/// All landmarks for one detected body in one frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pose {
    landmarks: Vec<Landmark>,
}

impl Pose {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Landmark at an anatomical index, if the model produced it
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }
}

impl From<Vec<Landmark>> for Pose {
    fn from(landmarks: Vec<Landmark>) -> Self {
        Self::new(landmarks)
    }
}

// ============================================================================
// FLAT BUFFER UNPACKING
// ============================================================================

/// Split a flat `[x, y, z, visibility] * N` buffer into poses of
/// `landmarks_per_pose` landmarks each.
///
/// A trailing short pose is kept as-is (the classifier rejects it by length);
/// a trailing partial landmark is dropped.
pub fn poses_from_flat(data: &[f32], landmarks_per_pose: usize) -> Vec<Pose> {
    if data.is_empty() || landmarks_per_pose == 0 {
        return Vec::new();
    }

    if data.len() % LANDMARK_STRIDE != 0 {
        log::warn!(
            "Landmark buffer length {} is not a multiple of {}",
            data.len(),
            LANDMARK_STRIDE
        );
    }

    let landmarks: Vec<Landmark> = data
        .chunks_exact(LANDMARK_STRIDE)
        .map(|c| Landmark::new(c[0], c[1], c[2], c[3]))
        .collect();

    landmarks
        .chunks(landmarks_per_pose)
        .map(|chunk| Pose::new(chunk.to_vec()))
        .collect()
}
