//! Boundary types shared by the fee engine and its callers

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Unit system the caller measured the item in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Centimeters and kilograms
    #[default]
    Metric,
    /// Inches and pounds
    Imperial,
}

impl UnitSystem {
    pub fn length_unit(&self) -> DisplayUnit {
        match self {
            UnitSystem::Metric => DisplayUnit::Centimeter,
            UnitSystem::Imperial => DisplayUnit::Inch,
        }
    }

    pub fn weight_unit(&self) -> DisplayUnit {
        match self {
            UnitSystem::Metric => DisplayUnit::Kilogram,
            UnitSystem::Imperial => DisplayUnit::Pound,
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

/// Unit a displayed figure is expressed in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    Inch,
    Centimeter,
    Pound,
    Kilogram,
}

impl DisplayUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            DisplayUnit::Inch => "in",
            DisplayUnit::Centimeter => "cm",
            DisplayUnit::Pound => "lb",
            DisplayUnit::Kilogram => "kg",
        }
    }
}

/// Measured item as supplied by the caller
///
/// The three linear dimensions are unordered; the engine sorts them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
    pub unit_system: UnitSystem,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64, weight: f64, unit_system: UnitSystem) -> Self {
        Self {
            length,
            width,
            height,
            weight,
            unit_system,
        }
    }

    pub fn metric(length_cm: f64, width_cm: f64, height_cm: f64, weight_kg: f64) -> Self {
        Self::new(length_cm, width_cm, height_cm, weight_kg, UnitSystem::Metric)
    }

    pub fn imperial(length_in: f64, width_in: f64, height_in: f64, weight_lb: f64) -> Self {
        Self::new(length_in, width_in, height_in, weight_lb, UnitSystem::Imperial)
    }
}

/// Fulfillment size tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeTier {
    SmallStandard,
    LargeStandard,
    Oversize,
}

impl SizeTier {
    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            SizeTier::SmallStandard => "Small standard",
            SizeTier::LargeStandard => "Large standard",
            SizeTier::Oversize => "Oversize",
        }
    }

    pub fn is_small_standard(&self) -> bool {
        matches!(self, SizeTier::SmallStandard)
    }

    pub fn is_large_standard(&self) -> bool {
        matches!(self, SizeTier::LargeStandard)
    }
}

impl std::fmt::Display for SizeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What a saving opportunity asks the shipper to change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OpportunityKind {
    /// Repack into smaller dimensions to reach a cheaper tier
    Dimension,
    /// Lighten the item to reach a cheaper weight bracket
    Weight,
}

impl OpportunityKind {
    pub fn label(&self) -> &'static str {
        match self {
            OpportunityKind::Dimension => "Dimension",
            OpportunityKind::Weight => "Weight",
        }
    }
}

/// A single threshold the item must satisfy for an opportunity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementCheck {
    pub label: String,
    /// Threshold in the caller's display unit
    pub target: f64,
    pub unit: DisplayUnit,
    pub met: bool,
}

/// Candidate reconfiguration and the fee it would yield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingOpportunity {
    pub kind: OpportunityKind,
    pub target_tier: String,
    pub target_fee: f64,
    pub current_fee: f64,
    /// Always greater than the saving epsilon
    pub saving_amount: f64,
    pub current_status: String,
    pub requirements: Vec<RequirementCheck>,
}

/// Fee engine output
///
/// Weights are in pounds; display conversion is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeResult {
    pub tier: SizeTier,
    pub fee: f64,
    pub dimensional_weight: f64,
    pub shipping_weight: f64,
    pub details: Vec<String>,
    pub savings: Vec<SavingOpportunity>,
}

impl FeeResult {
    /// Largest saving on offer, if any
    pub fn best_saving(&self) -> Option<&SavingOpportunity> {
        self.savings
            .iter()
            .max_by(|a, b| a.saving_amount.total_cmp(&b.saving_amount))
    }
}
