//! Dimensions in canonical units (inches, pounds)

/// Caller dimensions after normalization. Never leaves the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
}

impl CanonicalDimensions {
    pub fn sides(&self) -> [f64; 3] {
        [self.length, self.width, self.height]
    }
}

/// Linear dimensions ordered longest to shortest
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortedDimensions {
    pub longest: f64,
    pub middle: f64,
    pub shortest: f64,
}

impl SortedDimensions {
    pub fn volume(&self) -> f64 {
        self.longest * self.middle * self.shortest
    }
}
