//! Darkened screen edges that lean toward the pointer.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vignette {
    /// Shadow alpha at rest; the pulse peaks 20% above it.
    pub intensity: f64,
}

impl Vignette {
    pub const BASE: f64 = 0.2;

    pub fn intro() -> Self {
        Self {
            intensity: Self::BASE,
        }
    }

    /// Regular pages get half the intro's strength.
    pub fn page() -> Self {
        Self {
            intensity: Self::BASE * 0.5,
        }
    }

    fn shadow(&self, scale: f64) -> String {
        format!(
            "inset 0 0 {:.0}px rgba(0, 0, 0, {:.3})",
            100.0 + self.intensity * 100.0 * scale,
            self.intensity * scale,
        )
    }

    /// Inline style for the layer. `focus` is the pointer position as
    /// fractions of the viewport; without one the gradient stays centred.
    pub fn style(&self, focus: Option<(f64, f64)>) -> String {
        let (x, y) = focus
            .map(|(x, y)| (x.clamp(0.0, 1.0), y.clamp(0.0, 1.0)))
            .unwrap_or((0.5, 0.5));
        format!(
            "--vignette-rest: {}; --vignette-peak: {}; background: radial-gradient(circle at {:.1}% {:.1}%, transparent 40%, rgba(0, 0, 0, {:.3}) 150%)",
            self.shadow(1.0),
            self.shadow(1.2),
            x * 100.0,
            y * 100.0,
            self.intensity * 0.5,
        )
    }
}

/// Pointer position as viewport fractions, or `None` before the viewport is
/// measured. The server reports an infinite viewport.
pub fn pointer_focus(x: f64, y: f64, width: f64, height: f64) -> Option<(f64, f64)> {
    let measured = |side: f64| side.is_finite() && side > 0.0;
    if !measured(width) || !measured(height) {
        return None;
    }
    Some((x / width, y / height))
}
