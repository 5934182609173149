//! Ball field driven by the gesture signal
//!
//! Five balls per side. A raised arm lifts that side's balls and turns them
//! green; they ease back down when the arm drops.

use crate::gesture::{ArmSide, GestureState};

/// Resting height of every ball
pub const BASE_Y: f32 = 0.2;

/// Extra height when the controlling arm is raised
pub const RAISE_HEIGHT: f32 = 2.0;

/// Fraction of the remaining distance covered per tick
pub const EASING: f32 = 0.1;

pub const BALL_RADIUS: f32 = 0.2;

pub const COLOR_RAISED: u32 = 0x00ff00;
pub const COLOR_RESTING: u32 = 0xff6b6b;

/// Floats per ball in the flat buffer: x, y, z, color
pub const BALL_STRIDE: usize = 4;

/// Fixed (x, z) layout so every tab shows the same scene
const LEFT_BALLS: [(f32, f32); 5] = [(-4.0, -2.0), (-3.5, 0.0), (-4.2, 2.0), (-3.8, -1.0), (-3.3, 1.0)];
const RIGHT_BALLS: [(f32, f32); 5] = [(4.0, -2.0), (3.5, 0.0), (4.2, 2.0), (3.8, -1.0), (3.3, 1.0)];

#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    pub side: ArmSide,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub color: u32,
}

impl Ball {
    fn new(side: ArmSide, (x, z): (f32, f32)) -> Self {
        Self { side, x, y: BASE_Y, z, color: COLOR_RESTING }
    }

    fn tick(&mut self, raised: bool) {
        let target = if raised { BASE_Y + RAISE_HEIGHT } else { BASE_Y };
        self.y += (target - self.y) * EASING;
        self.color = if raised { COLOR_RAISED } else { COLOR_RESTING };
    }
}

pub struct BallField {
    balls: Vec<Ball>,
}

impl BallField {
    pub fn new() -> Self {
        let left = LEFT_BALLS.iter().map(|&p| Ball::new(ArmSide::Left, p));
        let right = RIGHT_BALLS.iter().map(|&p| Ball::new(ArmSide::Right, p));
        Self { balls: left.chain(right).collect() }
    }

    /// Advance one render frame toward the targets implied by `state`
    pub fn tick(&mut self, state: GestureState) {
        for ball in &mut self.balls {
            ball.tick(state.is_raised(ball.side));
        }
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// `[x, y, z, color]` per ball, left side first
    pub fn as_flat(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.balls.len() * BALL_STRIDE);
        for ball in &self.balls {
            result.extend_from_slice(&[ball.x, ball.y, ball.z, ball.color as f32]);
        }
        result
    }

    /// Snap every ball back to rest
    pub fn reset(&mut self) {
        for ball in &mut self.balls {
            ball.y = BASE_Y;
            ball.color = COLOR_RESTING;
        }
    }
}

impl Default for BallField {
    fn default() -> Self {
        Self::new()
    }
}
