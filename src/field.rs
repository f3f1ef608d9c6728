// The particle field: a fixed set of dots drifting at constant velocity and
// wrapping around the viewport edges.
//
// Positions are owned by the surface. Every step reads the rendered position
// back, so anything that moves a dot between frames is picked up on the next
// one.

use crate::config;
use crate::error::DotsError;
use crate::particle::{random_velocity, DotStyle, Particle};
use crate::surface::Surface;
use crate::viewport::Viewport;
use rand::Rng;
use vecmath::Vector2;

pub struct ParticleField<S: Surface> {
    surface: S,
    particles: Vec<Particle<S::Dot>>,
}

impl<S: Surface> ParticleField<S> {
    // Creates `count` dots scattered over the viewport and attaches each one
    // to the surface
    pub fn create<R: Rng>(
        surface: S,
        count: usize,
        viewport: Viewport,
        rng: &mut R,
    ) -> Result<ParticleField<S>, DotsError> {
        let mut field = ParticleField {
            surface,
            particles: Vec::with_capacity(count),
        };
        for _ in 0..count {
            let pos = random_position(viewport, rng);
            let vel = random_velocity(rng);
            let style = DotStyle::random(rng);
            match field.surface.create_dot(pos, &style) {
                Ok(dot) => field.particles.push(Particle::new(dot, vel, style)),
                Err(e) => {
                    field.detach_all();
                    return Err(e);
                }
            }
        }
        Ok(field)
    }

    // A failed create leaves nothing on the surface
    fn detach_all(&mut self) {
        for particle in self.particles.drain(..) {
            self.surface.remove_dot(particle.dot());
        }
    }

    // One frame: move every dot by its velocity, wrapping at the margins
    pub fn advance(&mut self, viewport: Viewport) {
        for particle in &self.particles {
            let pos = self.surface.position(particle.dot());
            let [x, y] = vecmath::vec2_add(pos, particle.velocity());
            let next = [wrap(x, viewport.width), wrap(y, viewport.height)];
            self.surface.set_position(particle.dot(), next);
        }
    }

    // Scatters every dot again over the new viewport. Velocity and styling
    // are left alone.
    pub fn on_resize<R: Rng>(&mut self, viewport: Viewport, rng: &mut R) {
        for particle in &self.particles {
            let pos = random_position(viewport, rng);
            self.surface.set_position(particle.dot(), pos);
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle<S::Dot>] {
        &self.particles
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn position(&self, index: usize) -> Option<Vector2<f64>> {
        self.particles
            .get(index)
            .map(|p| self.surface.position(p.dot()))
    }
}

// Teleports a coordinate to the far side once it is more than WRAP_MARGIN
// past either edge of `extent`
pub fn wrap(value: f64, extent: f64) -> f64 {
    if value < -config::WRAP_MARGIN {
        extent + config::WRAP_MARGIN
    } else if value > extent + config::WRAP_MARGIN {
        -config::WRAP_MARGIN
    } else {
        value
    }
}

// Uniform in [0, width) x [0, height). Scaling rather than gen_range keeps a
// zero-sized viewport from panicking.
fn random_position<R: Rng>(viewport: Viewport, rng: &mut R) -> Vector2<f64> {
    [
        rng.gen::<f64>() * viewport.width,
        rng.gen::<f64>() * viewport.height,
    ]
}
