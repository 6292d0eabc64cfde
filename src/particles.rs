//! Particle field behind the landing page.
//!
//! Pure simulation: positions, bouncing at the edges, and the link list.
//! Rendering lives in `views::particles`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Reference area the particle count is specified against.
const DENSITY_AREA: f64 = 800.0 * 800.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub speed: f64,
    pub link_distance: f64,
    pub radius: f64,
    pub opacity: f64,
    pub link_opacity: f64,
    pub hover: Option<HoverBubble>,
}

/// Pointer highlight: particles near the pointer grow and brighten.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverBubble {
    pub distance: f64,
    pub radius: f64,
    pub opacity: f64,
}

impl ParticleConfig {
    /// Full-screen background.
    pub fn interactive() -> Self {
        Self {
            count: 50,
            speed: 0.5,
            link_distance: 150.0,
            radius: 1.5,
            opacity: 0.2,
            link_opacity: 0.15,
            hover: Some(HoverBubble {
                distance: 250.0,
                radius: 3.0,
                opacity: 1.0,
            }),
        }
    }

    /// Quieter variant for panels.
    pub fn ambient() -> Self {
        Self {
            count: 40,
            speed: 0.1,
            link_distance: 120.0,
            radius: 1.0,
            opacity: 0.1,
            link_opacity: 0.05,
            hover: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub opacity: f64,
}

pub struct ParticleField {
    config: ParticleConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(config: ParticleConfig, width: f64, height: f64, seed: u64) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        let mut rng = SmallRng::seed_from_u64(seed);
        let count = scaled_count(config.count, width, height);
        let particles = (0..count)
            .map(|_| {
                let angle = rng.gen_range(0.0..std::f64::consts::TAU);
                let speed = config.speed * rng.gen_range(0.2..=1.0);
                Particle {
                    x: rng.gen_range(0.0..width),
                    y: rng.gen_range(0.0..height),
                    vx: angle.cos() * speed,
                    vy: angle.sin() * speed,
                }
            })
            .collect();

        Self {
            config,
            width,
            height,
            particles,
        }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Advance by `dt` frames (1.0 = one 60 fps frame).
    pub fn step(&mut self, dt: f64) {
        let (width, height) = (self.width, self.height);
        for p in &mut self.particles {
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            bounce(&mut p.x, &mut p.vx, width);
            bounce(&mut p.y, &mut p.vy, height);
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        for p in &mut self.particles {
            p.x = p.x.clamp(0.0, self.width);
            p.y = p.y.clamp(0.0, self.height);
        }
    }

    /// Radius and opacity of particle `index` with the pointer at `pointer`.
    ///
    /// Inside the hover distance both values move linearly from the resting
    /// ones (at the edge) to the bubble ones (under the pointer).
    pub fn appearance(&self, index: usize, pointer: Option<(f64, f64)>) -> (f64, f64) {
        let rest = (self.config.radius, self.config.opacity);
        let (Some(hover), Some((px, py)), Some(p)) =
            (self.config.hover, pointer, self.particles.get(index))
        else {
            return rest;
        };

        let distance = (p.x - px).hypot(p.y - py);
        if distance >= hover.distance {
            return rest;
        }
        let closeness = 1.0 - distance / hover.distance;
        (
            rest.0 + (hover.radius - rest.0) * closeness,
            rest.1 + (hover.opacity - rest.1) * closeness,
        )
    }

    pub fn links(&self) -> Vec<Link> {
        let max = self.config.link_distance;
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if distance < max {
                    links.push(Link {
                        from: i,
                        to: j,
                        opacity: self.config.link_opacity * (1.0 - distance / max),
                    });
                }
            }
        }
        links
    }
}

fn scaled_count(base: usize, width: f64, height: f64) -> usize {
    let factor = (width * height) / DENSITY_AREA;
    ((base as f64 * factor).round() as usize).max(1)
}

fn bounce(pos: &mut f64, velocity: &mut f64, limit: f64) {
    if *pos < 0.0 {
        *pos = -*pos;
        *velocity = velocity.abs();
    } else if *pos > limit {
        *pos = 2.0 * limit - *pos;
        *velocity = -velocity.abs();
    }
    *pos = pos.clamp(0.0, limit);
}
