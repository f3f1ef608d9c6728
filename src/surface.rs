// The rendering surface dots are drawn on. The field treats it as a
// read/write store of per-dot visual state: it never keeps its own copy
// of a dot's position.

use crate::error::DotsError;
use crate::particle::DotStyle;
use vecmath::Vector2;

pub trait Surface {
    // Handle to one rendered dot
    type Dot;

    fn create_dot(&mut self, pos: Vector2<f64>, style: &DotStyle) -> Result<Self::Dot, DotsError>;

    // Current rendered position, including any changes made outside the field
    fn position(&self, dot: &Self::Dot) -> Vector2<f64>;

    fn set_position(&mut self, dot: &Self::Dot, pos: Vector2<f64>);

    // Detaches a dot created by this surface
    fn remove_dot(&mut self, dot: &Self::Dot);
}
