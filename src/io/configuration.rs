//! Rendering constants and runtime configuration defaults

// Fallback placeholder geometry
/// Edge length of the square fallback canvas in pixels
pub const FALLBACK_CANVAS_SIZE: u32 = 300;
/// Diameter of a fallback spot in pixels
pub const FALLBACK_SPOT_DIAMETER: f64 = 20.0;

/// Sub-samples per pixel axis when rasterizing spot ellipses
pub const SUPERSAMPLING: u32 = 4;

/// Width of the spot border stroke in pixels
pub const SPOT_BORDER_WIDTH: f64 = 1.0;

/// Rotations at or below this magnitude (degrees) are treated as none
pub const ROTATION_EPSILON_DEGREES: f64 = 0.1;

/// Share of a container span reachable by a spot center, in percent
pub const REACHABLE_SPAN_PERCENT: f64 = 66.0;

/// National dex number of the spotted species
pub const SPOTTED_SPECIES: u16 = 327;

// Asset file names
/// Spotless base artwork
pub const BASE_ASSET: &str = "327-spotless.png";
/// Spotless special-palette artwork
pub const SPECIAL_ASSET: &str = "327-spotless-shiny.png";
/// Head mask clipping the spot canvas
pub const HEAD_MASK_ASSET: &str = "327-head.png";
/// Face overlay drawn over the spots
pub const FACE_ASSET: &str = "327-face.png";
/// Mouth overlay drawn last
pub const MOUTH_ASSET: &str = "327-mouth.png";

/// Directories searched for assets when none are given, in order
pub const DEFAULT_ASSET_DIRS: [&str; 2] = ["Resources/img/spinda", "assets"];

// Output settings
/// Output path used when none is given
pub const DEFAULT_OUTPUT: &str = "spots.png";
/// Default `tracing` level for the binary
pub const DEFAULT_LOG_LEVEL: &str = "warn";
