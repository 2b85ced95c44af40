/// Volume (cubic units) at or above which a package is bulky
pub const BULKY_VOLUME_THRESHOLD: f64 = 1_000_000.0;

/// Width, height or length at or above which a package is bulky
pub const BULKY_DIMENSION_THRESHOLD: f64 = 150.0;

/// Mass at or above which a package is heavy
pub const HEAVY_MASS_THRESHOLD: f64 = 20.0;
