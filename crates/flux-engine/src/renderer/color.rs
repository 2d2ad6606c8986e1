/// RGBA color, each component 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// CSS `hsla()`: hue in degrees (wraps), saturation and lightness in
    /// percent, alpha 0.0 - 1.0.
    pub fn from_hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let h = hue.rem_euclid(360.0);
        let s = (saturation / 100.0).clamp(0.0, 1.0);
        let l = (lightness / 100.0).clamp(0.0, 1.0);
        let a = s * l.min(1.0 - l);
        let channel = |n: f32| {
            let k = (n + h / 30.0) % 12.0;
            l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };
        Self {
            r: channel(0.0),
            g: channel(8.0),
            b: channel(4.0),
            a: alpha.clamp(0.0, 1.0),
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(c: Rgba, r: f32, g: f32, b: f32) -> bool {
        (c.r - r).abs() < 1e-4 && (c.g - g).abs() < 1e-4 && (c.b - b).abs() < 1e-4
    }

    #[test]
    fn hsla_primaries() {
        assert!(close(Rgba::from_hsla(0.0, 100.0, 50.0, 1.0), 1.0, 0.0, 0.0));
        assert!(close(Rgba::from_hsla(120.0, 100.0, 50.0, 1.0), 0.0, 1.0, 0.0));
        assert!(close(Rgba::from_hsla(240.0, 100.0, 50.0, 1.0), 0.0, 0.0, 1.0));
    }

    #[test]
    fn hsla_lightness_extremes() {
        assert!(close(Rgba::from_hsla(200.0, 100.0, 100.0, 1.0), 1.0, 1.0, 1.0));
        assert!(close(Rgba::from_hsla(200.0, 100.0, 0.0, 1.0), 0.0, 0.0, 0.0));
    }

    #[test]
    fn hsla_hue_wraps() {
        assert_eq!(Rgba::from_hsla(420.0, 100.0, 50.0, 0.5), Rgba::from_hsla(60.0, 100.0, 50.0, 0.5));
        assert!(close(Rgba::from_hsla(-120.0, 100.0, 50.0, 1.0), 0.0, 0.0, 1.0));
    }
}
