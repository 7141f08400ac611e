use glam::Vec2;
use rand::prelude::*;

/// Virtual pointer position used while the pointer is outside the canvas.
/// Far enough out that no star can fall inside the influence radius.
pub const OFFSCREEN: Vec2 = Vec2::new(-1000.0, -1000.0);

/// Tuning for a star field instance.
#[derive(Clone, Copy, Debug)]
pub struct FieldParams {
    /// Grid pitch between neighbouring stars, in canvas pixels.
    pub spacing: f32,
    /// Coordinate of the first grid row/column (slightly off-canvas).
    pub grid_start: f32,
    /// Pointer distance below which a star is pushed off its origin.
    pub influence_radius: f32,
    /// Maximum displacement a fully-influenced star receives.
    pub max_offset: f32,
    /// Fraction of the remaining distance recovered per frame once free.
    pub return_ease: f32,
    /// Shimmer speed range: `alpha_speed_min + rand * alpha_speed_span`.
    pub alpha_speed_min: f32,
    pub alpha_speed_span: f32,
    /// Render radius of a single star.
    pub star_radius: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            spacing: 18.0,
            grid_start: -5.0,
            influence_radius: 80.0,
            max_offset: 20.0,
            return_ease: 0.05,
            alpha_speed_min: 0.002,
            alpha_speed_span: 0.005,
            star_radius: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub pos: Vec2,
    pub origin: Vec2,
    /// Oscillates through [0, 1] with single-step overshoot before reversal.
    pub alpha: f32,
    /// Signed per-frame alpha increment; negated at either alpha bound.
    pub speed: f32,
}

/// Mouse-repulsion particle grid backing one canvas.
///
/// Platform-free: the web layer feeds it pointer positions and canvas
/// extents, and reads star positions back out each frame.
pub struct FieldSim {
    pub params: FieldParams,
    width: f32,
    height: f32,
    stars: Vec<Star>,
    rng: StdRng,
}

impl FieldSim {
    pub fn new(width: f32, height: f32, params: FieldParams, seed: u64) -> Self {
        let mut sim = Self {
            params,
            width,
            height,
            stars: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        sim.rebuild();
        sim
    }

    #[inline]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Adopt a new canvas extent and relay the grid from scratch.
    /// No interpolation from the old layout; stale stars are discarded.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.stars.clear();
        let mut x = self.params.grid_start;
        while x < self.width {
            let mut y = self.params.grid_start;
            while y < self.height {
                let alpha = self.rng.gen::<f32>();
                let speed =
                    self.params.alpha_speed_min + self.rng.gen::<f32>() * self.params.alpha_speed_span;
                self.stars.push(Star {
                    pos: Vec2::new(x, y),
                    origin: Vec2::new(x, y),
                    alpha,
                    speed,
                });
                y += self.params.spacing;
            }
            x += self.params.spacing;
        }
    }

    /// Advance every star by one animation frame.
    ///
    /// Inside the influence radius a star sits at
    /// `origin - dir(pointer -> star, reversed) * force * max_offset` with
    /// `force = (radius - distance) / radius`; outside it eases back toward
    /// its origin. Alpha shimmers by `speed` per frame, reversing sign
    /// whenever it leaves [0, 1] rather than clamping.
    pub fn step(&mut self, pointer: Vec2) {
        let radius = self.params.influence_radius;
        for star in &mut self.stars {
            let delta = pointer - star.pos;
            let distance = delta.length();
            if distance < radius {
                let angle = delta.y.atan2(delta.x);
                let force = (radius - distance) / radius;
                star.pos = star.origin
                    - Vec2::new(angle.cos(), angle.sin()) * force * self.params.max_offset;
            } else {
                star.pos += (star.origin - star.pos) * self.params.return_ease;
            }

            star.alpha += star.speed;
            if star.alpha > 1.0 || star.alpha < 0.0 {
                star.speed = -star.speed;
            }
        }
    }
}
