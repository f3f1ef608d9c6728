// Fixed constants for the dot field. None of these are exposed to the page.

use std::ops::Range;

pub const DOT_COUNT: usize = 25;

// Distance past the viewport edge a dot may drift before wrapping
pub const WRAP_MARGIN: f64 = 10.0;

pub const VELOCITY_X: Range<f64> = -0.125..0.125;
pub const VELOCITY_Y: Range<f64> = -0.25..0.25;

pub const OPACITY: Range<f64> = 0.2..0.8;
pub const SCALE: Range<f64> = 0.4..1.2;

// Seconds
pub const ANIMATION_DURATION: Range<f64> = 2.0..5.0;
pub const ANIMATION_DELAY: Range<f64> = 0.0..2.0;

pub const CONTAINER_ID: &str = "dots";
pub const DOT_CLASS: &str = "dot";
