/// Fraction of the scrollable distance covered, clamped to `[0, 1]`.
///
/// Returns 0 when the document does not scroll at all (document no taller
/// than the viewport) or when any input is not finite.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if !range.is_finite() || range <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

/// Clamped linear mapping from an input range onto an output range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMap {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

impl LinearMap {
    pub const fn new(from: (f64, f64), to: (f64, f64)) -> Self {
        Self { from, to }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (in_start, in_end) = self.from;
        let (out_start, out_end) = self.to;
        let span = in_end - in_start;
        if span == 0.0 || !span.is_finite() {
            return if value < in_start { out_start } else { out_end };
        }
        let t = (value - in_start) / span;
        if t.is_nan() || t <= 0.0 {
            out_start
        } else if t >= 1.0 {
            out_end
        } else {
            out_start + (out_end - out_start) * t
        }
    }
}

/// Scale and opacity applied to the hero section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroTransform {
    pub scale: f64,
    pub opacity: f64,
}

impl HeroTransform {
    pub const REST: Self = Self {
        scale: 1.0,
        opacity: 1.0,
    };

    pub fn style(&self) -> String {
        format!("transform: scale({}); opacity: {};", self.scale, self.opacity)
    }
}

impl Default for HeroTransform {
    fn default() -> Self {
        Self::REST
    }
}

/// Maps scroll progress to the hero's shrink-and-fade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroCurve {
    scale: LinearMap,
    opacity: LinearMap,
}

impl HeroCurve {
    pub fn new(range_end: f64, min_scale: f64) -> Self {
        Self {
            scale: LinearMap::new((0.0, range_end), (1.0, min_scale)),
            opacity: LinearMap::new((0.0, range_end), (1.0, 0.0)),
        }
    }

    pub fn transform(&self, progress: f64) -> HeroTransform {
        HeroTransform {
            scale: self.scale.apply(progress),
            opacity: self.opacity.apply(progress),
        }
    }
}

impl Default for HeroCurve {
    fn default() -> Self {
        Self::new(0.15, 0.9)
    }
}
