//! Color functions built on the cellular kernel.
//!
//! Each variant is a [`NoiseField`]. [`NoiseVariant`] picks one from a
//! [`NoiseType`] so the face sampler never needs to know which it got.

use cellcube_spec::NoiseType;

use super::{smoothstep, CellularNoise, FieldValue, NoiseField, Point3};
use crate::color::Color;

/// Default `f2 - f1` band in which [`EdgeMix`] blends toward the edge color.
pub const DEFAULT_EDGE_THRESHOLD: f64 = 0.05;

/// Default `f2 - f1` band over which [`RoundEdgeMix`] falls off.
pub const DEFAULT_ROUND_TRANSITION: f64 = 0.1;

/// Smallest accepted band width.
const MIN_BAND: f64 = 1e-6;

/// Plain cell colors.
#[derive(Debug, Clone, Copy)]
pub struct BaseCells {
    kernel: CellularNoise,
}

impl BaseCells {
    pub fn new(kernel: CellularNoise) -> Self {
        Self { kernel }
    }

    /// Color of the nearest feature point.
    pub fn color_at(&self, p: Point3) -> Color {
        self.kernel.evaluate(p).color
    }
}

impl NoiseField for BaseCells {
    fn sample(&self, p: Point3) -> FieldValue {
        FieldValue::Color(self.color_at(p))
    }
}

/// Cell colors blended linearly toward an edge color near boundaries.
#[derive(Debug, Clone, Copy)]
pub struct EdgeMix {
    kernel: CellularNoise,
    threshold: f64,
    edge_color: Color,
}

impl EdgeMix {
    /// Black edges with the default threshold.
    pub fn new(kernel: CellularNoise) -> Self {
        Self {
            kernel,
            threshold: DEFAULT_EDGE_THRESHOLD,
            edge_color: Color::black(),
        }
    }

    /// Set the edge band width.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.max(MIN_BAND);
        self
    }

    /// Set the edge color.
    pub fn with_edge_color(mut self, edge_color: Color) -> Self {
        self.edge_color = edge_color;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Blend weight toward the edge color for a given `f2 - f1`.
    ///
    /// 1 on the boundary, falling linearly to 0 at the threshold.
    pub fn edge_weight(&self, edge_distance: f64) -> f64 {
        if edge_distance < self.threshold {
            (self.threshold - edge_distance) / self.threshold
        } else {
            0.0
        }
    }

    pub fn color_at(&self, p: Point3) -> Color {
        let sample = self.kernel.evaluate(p);
        sample
            .color
            .lerp(&self.edge_color, self.edge_weight(sample.edge_distance()))
    }
}

impl NoiseField for EdgeMix {
    fn sample(&self, p: Point3) -> FieldValue {
        FieldValue::Color(self.color_at(p))
    }
}

/// Cell colors with a smoothstep falloff toward the edge color.
#[derive(Debug, Clone, Copy)]
pub struct RoundEdgeMix {
    kernel: CellularNoise,
    transition: f64,
    edge_color: Color,
}

impl RoundEdgeMix {
    /// Black edges with the default transition width.
    pub fn new(kernel: CellularNoise) -> Self {
        Self {
            kernel,
            transition: DEFAULT_ROUND_TRANSITION,
            edge_color: Color::black(),
        }
    }

    /// Set the falloff band width.
    pub fn with_transition(mut self, transition: f64) -> Self {
        self.transition = transition.max(MIN_BAND);
        self
    }

    /// Set the edge color.
    pub fn with_edge_color(mut self, edge_color: Color) -> Self {
        self.edge_color = edge_color;
        self
    }

    pub fn transition(&self) -> f64 {
        self.transition
    }

    pub fn edge_color(&self) -> Color {
        self.edge_color
    }

    /// Blend weight for a given `f2 - f1`: `1 - smoothstep(d / transition)`.
    ///
    /// Monotonically decreasing with zero slope at both ends of the band.
    pub fn edge_weight(&self, edge_distance: f64) -> f64 {
        if edge_distance < self.transition {
            1.0 - smoothstep((edge_distance / self.transition).clamp(0.0, 1.0))
        } else {
            0.0
        }
    }

    /// Edge proximity alone, as a single channel in [0, 1].
    pub fn edge_alpha(&self, p: Point3) -> f64 {
        self.edge_weight(self.kernel.evaluate(p).edge_distance())
    }

    pub fn color_at(&self, p: Point3) -> Color {
        let sample = self.kernel.evaluate(p);
        sample
            .color
            .lerp(&self.edge_color, self.edge_weight(sample.edge_distance()))
    }
}

impl NoiseField for RoundEdgeMix {
    fn sample(&self, p: Point3) -> FieldValue {
        FieldValue::Color(self.color_at(p))
    }
}

/// A flat edge color whose alpha is the rounded edge weight: solid on cell
/// boundaries, fully transparent inside cells.
#[derive(Debug, Clone, Copy)]
pub struct TransparentEdges {
    round: RoundEdgeMix,
}

impl TransparentEdges {
    /// White edges with the default transition width.
    pub fn new(kernel: CellularNoise) -> Self {
        Self {
            round: RoundEdgeMix::new(kernel).with_edge_color(Color::white()),
        }
    }

    pub fn with_edge_color(mut self, edge_color: Color) -> Self {
        self.round = self.round.with_edge_color(edge_color);
        self
    }

    pub fn with_transition(mut self, transition: f64) -> Self {
        self.round = self.round.with_transition(transition);
        self
    }

    pub fn color_at(&self, p: Point3) -> Color {
        self.round
            .edge_color()
            .with_alpha(self.round.edge_alpha(p))
    }
}

impl NoiseField for TransparentEdges {
    fn sample(&self, p: Point3) -> FieldValue {
        FieldValue::Color(self.color_at(p))
    }

    fn has_alpha(&self) -> bool {
        true
    }
}

/// The noise field selected for a run.
#[derive(Debug, Clone, Copy)]
pub enum NoiseVariant {
    Base(BaseCells),
    Edges(EdgeMix),
    Rounded(RoundEdgeMix),
    Transparent(TransparentEdges),
}

impl NoiseVariant {
    /// Build the variant for `noise_type` over a kernel seeded with `seed`.
    ///
    /// `edge_color` overrides the variant's default edge color; it has no
    /// effect on [`NoiseType::Base`].
    pub fn from_type(noise_type: NoiseType, seed: u32, edge_color: Option<Color>) -> Self {
        let kernel = CellularNoise::new(seed);
        match noise_type {
            NoiseType::Base => NoiseVariant::Base(BaseCells::new(kernel)),
            NoiseType::Edges => {
                let mut v = EdgeMix::new(kernel);
                if let Some(c) = edge_color {
                    v = v.with_edge_color(c);
                }
                NoiseVariant::Edges(v)
            }
            NoiseType::Rounded => {
                let mut v = RoundEdgeMix::new(kernel);
                if let Some(c) = edge_color {
                    v = v.with_edge_color(c);
                }
                NoiseVariant::Rounded(v)
            }
            NoiseType::Transparent => {
                let mut v = TransparentEdges::new(kernel);
                if let Some(c) = edge_color {
                    v = v.with_edge_color(c);
                }
                NoiseVariant::Transparent(v)
            }
        }
    }
}

impl NoiseField for NoiseVariant {
    fn sample(&self, p: Point3) -> FieldValue {
        match self {
            NoiseVariant::Base(v) => v.sample(p),
            NoiseVariant::Edges(v) => v.sample(p),
            NoiseVariant::Rounded(v) => v.sample(p),
            NoiseVariant::Transparent(v) => v.sample(p),
        }
    }

    fn has_alpha(&self) -> bool {
        matches!(self, NoiseVariant::Transparent(_))
    }
}
