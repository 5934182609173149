//! Camera presets for scene views
//!
//! Each consumer tab is opened with `?angle=<name>` and looks at the same ball
//! field from a different side.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CameraAngle {
    Front,
    Back,
    Left,
    Right,
    Top,
    #[default]
    Default,
}

/// The named views, in the order the control tab opens them
pub const ALL_VIEWS: [CameraAngle; 5] = [
    CameraAngle::Front,
    CameraAngle::Back,
    CameraAngle::Left,
    CameraAngle::Right,
    CameraAngle::Top,
];

/// Vertical field of view for every preset (degrees)
pub const CAMERA_FOV: f32 = 60.0;

impl CameraAngle {
    /// Parse the `angle` query parameter. Unknown or missing values fall back
    /// to the default view.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("front") => CameraAngle::Front,
            Some("back") => CameraAngle::Back,
            Some("left") => CameraAngle::Left,
            Some("right") => CameraAngle::Right,
            Some("top") => CameraAngle::Top,
            _ => CameraAngle::Default,
        }
    }

    /// Query value for this view (`default` for the fallback)
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraAngle::Front => "front",
            CameraAngle::Back => "back",
            CameraAngle::Left => "left",
            CameraAngle::Right => "right",
            CameraAngle::Top => "top",
            CameraAngle::Default => "default",
        }
    }

    /// Camera eye position in world units
    pub fn position(&self) -> [f32; 3] {
        match self {
            CameraAngle::Front | CameraAngle::Default => [0.0, 3.0, 8.0],
            CameraAngle::Back => [0.0, 3.0, -8.0],
            CameraAngle::Left => [-8.0, 3.0, 0.0],
            CameraAngle::Right => [8.0, 3.0, 0.0],
            CameraAngle::Top => [0.0, 10.0, 0.0],
        }
    }

    pub fn view_name(&self) -> &'static str {
        match self {
            CameraAngle::Front => "Front View",
            CameraAngle::Back => "Back View",
            CameraAngle::Left => "Left View",
            CameraAngle::Right => "Right View",
            CameraAngle::Top => "Top View",
            CameraAngle::Default => "Default View",
        }
    }
}
