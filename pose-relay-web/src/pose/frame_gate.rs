//! Frame gate - skip detection when the video has not advanced
//!
//! requestAnimationFrame fires at display rate, which is usually faster than
//! the camera. Running the pose model twice on the same video frame wastes a
//! detection and produces a duplicate relay write.

/// Remembers the last processed `HTMLVideoElement.currentTime`
#[derive(Debug, Default)]
pub struct FrameGate {
    last_media_time: Option<f64>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true (and records the time) if this is a new video frame
    pub fn accept(&mut self, media_time: f64) -> bool {
        if self.last_media_time == Some(media_time) {
            return false;
        }
        self.last_media_time = Some(media_time);
        true
    }

    /// Forget the last frame (call when the stream restarts)
    pub fn reset(&mut self) {
        self.last_media_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_time_rejected() {
        let mut gate = FrameGate::new();
        assert!(gate.accept(0.033));
        assert!(!gate.accept(0.033));
        assert!(gate.accept(0.066));
    }

    #[test]
    fn test_reset_accepts_again() {
        let mut gate = FrameGate::new();
        assert!(gate.accept(1.0));
        gate.reset();
        assert!(gate.accept(1.0));
    }
}
