use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const DEFAULT_PALETTE: [&str; 5] = ["#FFFFFF", "#E0F7FA", "#B3E5FC", "#81D4FA", "#4FC3F7"];

/// Tuning values for the snowfall. Ranges are half-open `[min, max)`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SnowfallConfig {
    pub count: usize,
    pub palette: Vec<String>,
    pub size_min: f64,
    pub size_max: f64,
    pub speed_x_min: f64,
    pub speed_x_max: f64,
    pub speed_y_min: f64,
    pub speed_y_max: f64,
    pub line_width: f64,
}

impl Default for SnowfallConfig {
    fn default() -> Self {
        Self {
            count: 40,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            size_min: 4.0,
            size_max: 10.0,
            speed_x_min: -0.25,
            speed_x_max: 0.25,
            speed_y_min: 0.5,
            speed_y_max: 1.0,
            line_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub opacity: f64,
}

fn between(rng: &mut fastrand::Rng, min: f64, max: f64) -> f64 {
    if max <= min {
        return min;
    }
    min + rng.f64() * (max - min)
}

/// The whole falling field: particles plus the viewport they wrap within.
pub struct Snowfield {
    config: SnowfallConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl Snowfield {
    pub fn new(config: SnowfallConfig, width: f64, height: f64, rng: &mut fastrand::Rng) -> Self {
        let mut field = Self { config, width, height, particles: Vec::new() };
        let particles: Vec<Particle> = (0..field.config.count).map(|_| field.spawn(rng)).collect();
        field.particles = particles;
        field
    }

    fn spawn(&self, rng: &mut fastrand::Rng) -> Particle {
        let c = &self.config;
        let color = if c.palette.is_empty() {
            DEFAULT_PALETTE[0].to_string()
        } else {
            c.palette[rng.usize(..c.palette.len())].clone()
        };
        Particle {
            x: between(rng, 0.0, self.width),
            y: between(rng, 0.0, self.height),
            color,
            size: between(rng, c.size_min, c.size_max),
            speed_x: between(rng, c.speed_x_min, c.speed_x_max),
            speed_y: between(rng, c.speed_y_min, c.speed_y_max),
            opacity: 1.0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &SnowfallConfig {
        &self.config
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advances every particle by one frame, recycling the ones that fell
    /// past the bottom edge.
    pub fn step(&mut self, rng: &mut fastrand::Rng) {
        let (width, height) = (self.width, self.height);
        let (speed_min, speed_max) = (self.config.speed_y_min, self.config.speed_y_max);
        for p in &mut self.particles {
            p.x += p.speed_x;
            p.y += p.speed_y;
            if p.y > height + p.size {
                p.y = -p.size;
                p.x = between(rng, 0.0, width);
                p.speed_y = between(rng, speed_min, speed_max);
                p.opacity = 1.0;
            }
        }
    }
}

/// End points of the six spokes of a flake centred on `(x, y)`.
pub fn spokes(x: f64, y: f64, size: f64) -> [(f64, f64); 6] {
    let step = PI / 3.0;
    let mut ends = [(0.0, 0.0); 6];
    for (i, end) in ends.iter_mut().enumerate() {
        let angle = i as f64 * step;
        *end = (x + angle.cos() * size, y + angle.sin() * size);
    }
    ends
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(count: usize, width: f64, height: f64) -> Snowfield {
        let config = SnowfallConfig { count, ..SnowfallConfig::default() };
        Snowfield::new(config, width, height, &mut fastrand::Rng::with_seed(42))
    }

    #[test]
    fn spawns_configured_count_within_ranges() {
        let f = field(80, 800.0, 600.0);
        assert_eq!(f.particles().len(), 80);
        for p in f.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!((4.0..10.0).contains(&p.size));
            assert!((-0.25..0.25).contains(&p.speed_x));
            assert!((0.5..1.0).contains(&p.speed_y));
            assert_eq!(p.opacity, 1.0);
            assert!(DEFAULT_PALETTE.contains(&p.color.as_str()));
        }
    }

    #[test]
    fn step_moves_by_speed() {
        let mut f = field(10, 800.0, 600.0);
        let before = f.particles().to_vec();
        f.step(&mut fastrand::Rng::with_seed(1));
        for (old, new) in before.iter().zip(f.particles()) {
            // Nothing starts close enough to the bottom edge to wrap in one frame.
            assert!((new.x - (old.x + old.speed_x)).abs() < 1e-9);
            assert!((new.y - (old.y + old.speed_y)).abs() < 1e-9);
        }
    }

    #[test]
    fn particle_past_bottom_is_recycled() {
        let mut f = field(1, 320.0, 200.0);
        {
            let p = &mut f.particles[0];
            p.y = 200.0 + p.size;
            p.speed_y = 0.75;
            p.opacity = 0.2;
        }
        let size = f.particles()[0].size;
        f.step(&mut fastrand::Rng::with_seed(3));

        let p = &f.particles()[0];
        assert_eq!(p.y, -size);
        assert!((0.0..320.0).contains(&p.x));
        assert!((0.5..1.0).contains(&p.speed_y));
        assert_eq!(p.opacity, 1.0);
        assert_eq!(p.size, size);
    }

    #[test]
    fn particle_at_the_edge_is_not_recycled_yet() {
        let mut f = field(1, 320.0, 200.0);
        {
            let p = &mut f.particles[0];
            p.size = 4.0;
            p.speed_y = 0.5;
            p.y = 203.5;
        }
        f.step(&mut fastrand::Rng::with_seed(3));
        assert_eq!(f.particles()[0].y, 204.0);
    }

    #[test]
    fn recycled_particles_follow_a_resize() {
        let mut f = field(1, 1000.0, 800.0);
        f.resize(100.0, 50.0);
        let size = f.particles()[0].size;
        f.particles[0].y = 50.0 + size + 1.0;
        f.step(&mut fastrand::Rng::with_seed(9));
        assert!(f.particles()[0].x < 100.0);
    }

    #[test]
    fn empty_palette_falls_back_to_white() {
        let config = SnowfallConfig { palette: Vec::new(), count: 3, ..SnowfallConfig::default() };
        let f = Snowfield::new(config, 10.0, 10.0, &mut fastrand::Rng::with_seed(5));
        assert!(f.particles().iter().all(|p| p.color == "#FFFFFF"));
    }

    #[test]
    fn zero_sized_viewport_does_not_panic() {
        let mut f = field(5, 0.0, 0.0);
        for _ in 0..100 {
            f.step(&mut fastrand::Rng::with_seed(11));
        }
        assert!(f.particles().iter().all(|p| p.x.abs() < 30.0));
    }

    #[test]
    fn spokes_are_evenly_spaced() {
        let ends = spokes(10.0, 20.0, 5.0);
        assert!((ends[0].0 - 15.0).abs() < 1e-9);
        assert!((ends[0].1 - 20.0).abs() < 1e-9);
        assert!((ends[3].0 - 5.0).abs() < 1e-9);
        for (x, y) in ends {
            let len = ((x - 10.0).powi(2) + (y - 20.0).powi(2)).sqrt();
            assert!((len - 5.0).abs() < 1e-9);
        }
    }
}
