// Particle struct for a single dot: a handle to its rendered element, a fixed
// velocity, and the visual styling it was created with

use crate::config;
use rand::Rng;
use std::ops::Range;
use vecmath::Vector2;

// Styling picked once per dot and never changed afterwards
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DotStyle {
    pub opacity: f64,
    pub scale: f64,
    // Seconds
    pub animation_duration: f64,
    pub animation_delay: f64,
}

impl DotStyle {
    pub fn random<R: Rng>(rng: &mut R) -> DotStyle {
        DotStyle {
            opacity: sample(rng, config::OPACITY),
            scale: sample(rng, config::SCALE),
            animation_duration: sample(rng, config::ANIMATION_DURATION),
            animation_delay: sample(rng, config::ANIMATION_DELAY),
        }
    }

    pub fn transform(&self) -> String {
        format!("scale({})", self.scale)
    }

    pub fn duration_css(&self) -> String {
        format!("{}s", self.animation_duration)
    }

    pub fn delay_css(&self) -> String {
        format!("{}s", self.animation_delay)
    }
}

pub struct Particle<D> {
    dot: D,
    vel: Vector2<f64>,
    style: DotStyle,
}

impl<D> Particle<D> {
    pub fn new(dot: D, vel: Vector2<f64>, style: DotStyle) -> Particle<D> {
        Particle { dot, vel, style }
    }

    pub fn dot(&self) -> &D {
        &self.dot
    }

    pub fn velocity(&self) -> Vector2<f64> {
        self.vel
    }

    pub fn style(&self) -> &DotStyle {
        &self.style
    }
}

pub fn random_velocity<R: Rng>(rng: &mut R) -> Vector2<f64> {
    [
        sample(rng, config::VELOCITY_X),
        sample(rng, config::VELOCITY_Y),
    ]
}

fn sample<R: Rng>(rng: &mut R, range: Range<f64>) -> f64 {
    rng.gen_range(range.start, range.end)
}
