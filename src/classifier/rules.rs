use super::category::Category;
use super::thresholds::{BULKY_DIMENSION_THRESHOLD, BULKY_VOLUME_THRESHOLD, HEAVY_MASS_THRESHOLD};
use crate::error::{ClassifyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Width,
    Height,
    Length,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Width => "width",
            Axis::Height => "height",
            Axis::Length => "length",
        })
    }
}

/// Rule that made a package bulky
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "lowercase")]
pub enum BulkyReason {
    /// A single side met the dimension threshold
    Dimension { axis: Axis, value: f64 },
    /// The product of all three sides met the volume threshold
    Volume { volume: f64 },
}

impl fmt::Display for BulkyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BulkyReason::Dimension { axis, value } => write!(
                f,
                "{} {} >= {}",
                axis, value, BULKY_DIMENSION_THRESHOLD
            ),
            BulkyReason::Volume { volume } => {
                write!(f, "volume {} >= {}", volume, BULKY_VOLUME_THRESHOLD)
            }
        }
    }
}

/// Outcome of a classification together with the rules that decided it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub mass: f64,
    pub category: Category,
    pub bulky: Option<BulkyReason>,
    pub heavy: bool,
}

impl Classification {
    pub fn is_bulky(&self) -> bool {
        self.bulky.is_some()
    }

    pub fn is_heavy(&self) -> bool {
        self.heavy
    }
}

/// Sort a package into its handling stack.
///
/// Fails with [`ClassifyError::InvalidArgument`] if any input is negative
/// (or NaN); no category is produced in that case.
pub fn classify(width: f64, height: f64, length: f64, mass: f64) -> Result<Category> {
    validate(width, height, length, mass)?;

    Ok(decide(is_bulky(width, height, length), is_heavy(mass)))
}

/// Like [`classify`], but also reports which rules fired.
pub fn explain(width: f64, height: f64, length: f64, mass: f64) -> Result<Classification> {
    validate(width, height, length, mass)?;

    let bulky = bulky_reason(width, height, length);
    let heavy = is_heavy(mass);

    Ok(Classification {
        width,
        height,
        length,
        mass,
        category: decide(bulky.is_some(), heavy),
        bulky,
        heavy,
    })
}

/// True if any side, or the volume, meets its threshold
pub fn is_bulky(width: f64, height: f64, length: f64) -> bool {
    bulky_reason(width, height, length).is_some()
}

/// True if the mass meets the heavy threshold
pub fn is_heavy(mass: f64) -> bool {
    mass >= HEAVY_MASS_THRESHOLD
}

fn bulky_reason(width: f64, height: f64, length: f64) -> Option<BulkyReason> {
    // Sides first, volume only when no side qualifies
    for (axis, value) in [
        (Axis::Width, width),
        (Axis::Height, height),
        (Axis::Length, length),
    ] {
        if value >= BULKY_DIMENSION_THRESHOLD {
            return Some(BulkyReason::Dimension { axis, value });
        }
    }

    let volume = width * height * length;
    if volume >= BULKY_VOLUME_THRESHOLD {
        return Some(BulkyReason::Volume { volume });
    }

    None
}

fn decide(bulky: bool, heavy: bool) -> Category {
    match (heavy, bulky) {
        (true, true) => Category::Rejected,
        (true, false) | (false, true) => Category::Special,
        (false, false) => Category::Standard,
    }
}

fn validate(width: f64, height: f64, length: f64, mass: f64) -> Result<()> {
    for (field, value) in [
        ("width", width),
        ("height", height),
        ("length", length),
        ("mass", mass),
    ] {
        // Negated so NaN fails too
        if !(value >= 0.0) {
            return Err(ClassifyError::InvalidArgument { field, value });
        }
    }

    Ok(())
}
