pub mod category;
pub mod rules;
pub mod thresholds;

pub use category::{Category, ParseCategoryError};
pub use rules::{classify, explain, is_bulky, is_heavy, Axis, BulkyReason, Classification};
pub use thresholds::{BULKY_DIMENSION_THRESHOLD, BULKY_VOLUME_THRESHOLD, HEAVY_MASS_THRESHOLD};
