use rand::Rng;

/// A drifting dot in the background of the overlay and intro.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position as a percentage of the viewport.
    pub left: f64,
    pub top: f64,
    pub alpha: f64,
    /// Drift in pixels over one loop.
    pub drift_x: f64,
    pub drift_y: f64,
    pub speed_seed: f64,
}

pub fn scatter<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            left: rng.random::<f64>() * 100.0,
            top: rng.random::<f64>() * 100.0,
            alpha: rng.random::<f64>() * 0.3 + 0.5,
            drift_x: rng.random::<f64>() * 100.0 - 50.0,
            drift_y: rng.random::<f64>() * 100.0 - 50.0,
            speed_seed: rng.random::<f64>(),
        })
        .collect()
}

impl Particle {
    /// Loop duration in seconds: quick while loading is young, lazy near the end.
    pub fn duration(&self, progress: f64) -> f64 {
        if progress < 80.0 {
            1.0 + self.speed_seed
        } else {
            5.0 + self.speed_seed * 4.0
        }
    }

    pub fn easing(progress: f64) -> &'static str {
        if progress < 80.0 {
            "ease-out"
        } else {
            "ease-in-out"
        }
    }

    pub fn style(&self, progress: f64) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; background: rgba(80, 80, 80, {:.2}); --drift-x: {:.1}px; --drift-y: {:.1}px; animation-duration: {:.2}s; animation-timing-function: {}",
            self.left,
            self.top,
            self.alpha,
            self.drift_x,
            self.drift_y,
            self.duration(progress),
            Self::easing(progress),
        )
    }
}

impl Particle {
    /// Loop duration in seconds for the slow gold motes behind the home page.
    pub fn ambient_duration(&self) -> f64 {
        3.0 + self.speed_seed * 5.0
    }

    pub fn ambient_style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; --drift-x: {:.1}px; --drift-y: {:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s; animation-timing-function: ease-in-out",
            self.left,
            self.top,
            self.drift_x,
            self.drift_y,
            self.ambient_duration(),
            // staggered so the field never pulses in unison
            self.alpha * 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    #[test]
    fn scatter_stays_on_screen() {
        let particles = scatter(200, &mut SmallRng::seed_from_u64(9));
        assert_eq!(particles.len(), 200);
        for p in particles {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((0.5..0.8).contains(&p.alpha));
            assert!((-50.0..50.0).contains(&p.drift_x));
        }
    }

    #[test]
    fn particles_slow_down_late_in_loading() {
        let p = scatter(1, &mut SmallRng::seed_from_u64(2))[0];
        assert!((1.0..2.0).contains(&p.duration(10.0)));
        assert!((5.0..9.0).contains(&p.duration(80.0)));
        assert!(p.style(95.0).contains("ease-in-out"));
    }

    #[test]
    fn ambient_motes_drift_slowly() {
        for p in scatter(30, &mut SmallRng::seed_from_u64(4)) {
            assert!((3.0..8.0).contains(&p.ambient_duration()));
            assert!(p.ambient_style().contains("animation-delay"));
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = scatter(15, &mut SmallRng::seed_from_u64(5));
        let b = scatter(15, &mut SmallRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
