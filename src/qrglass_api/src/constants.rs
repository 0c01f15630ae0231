pub const QR_API_BASE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";

pub const DEFAULT_OUTPUT_SIZE: u32 = 1000;
pub const DEFAULT_QR_SIZE: u32 = 760;

/// Bounds for the pixel size requested from the remote service, so we never
/// ask it for degenerate resolutions.
pub const MIN_API_SIZE: u32 = 1024;
pub const MAX_API_SIZE: u32 = 2000;

pub const CARD_CORNER_RADIUS: f32 = 36.0;
pub const BORDER_WIDTH: f32 = 6.0;
pub const BORDER_INSET: f32 = 3.0;

/// The QR bitmap sits slightly above the vertical center of the card.
pub const QR_VERTICAL_LIFT: i64 = 24;

pub const GLOSS_HEIGHT_FRACTION: f32 = 0.08;
pub const GLOSS_INSET: i64 = 8;
pub const GLOSS_CORNER_RADIUS: f32 = 8.0;
pub const GLOSS_TOP_ALPHA: u8 = 89; // 35% opacity

pub const BADGE_DIAMETER_FRACTION: f32 = 0.14;
pub const BADGE_FONT_FRACTION: f32 = 0.5;
pub const BADGE_SHADOW_BLUR: f32 = 10.0;

pub const DEFAULT_OUTPUT_FILE: &str = "qr-code.png";
