// Stock tuning for the constellation scene. `ConstellationConfig::default()`
// is built from these values.

// Population
pub const DOT_COUNT: usize = 30;

// Dot sizing (pixels)
pub const BASE_RADIUS: f32 = 3.0; // idle dot radius
pub const MAX_RADIUS: f32 = 10.0; // radius of a dot right under the pointer
pub const HOVER_DISTANCE: f32 = 100.0; // pointer influence fades out at this distance

// Connection lines (pixels)
pub const LINK_DISTANCE: f32 = 100.0; // pairs further apart than this are not joined
pub const FULL_OPACITY_DISTANCE: f32 = 30.0; // pairs this close are drawn fully opaque
pub const LINE_WIDTH: f64 = 1.0;

// Dots further than this outside the left, right or bottom edge are culled
pub const EXIT_MARGIN: f32 = 10.0;

// Off-screen respawn
pub const SPAWN_INSET: f32 = 5.0; // horizontal nudge away from the centre line
pub const SPAWN_Y: f32 = -5.0; // just above the top edge
pub const RESPAWN_DELAY_MIN_MS: f64 = 1000.0;
pub const RESPAWN_DELAY_MAX_MS: f64 = 3000.0;

// Initial velocity ranges (pixels per frame)
pub const SEED_X_SPEED_MIN: f32 = -0.5;
pub const SEED_X_SPEED_MAX: f32 = 0.5;
pub const Y_SPEED_MIN: f32 = 1.0;
pub const Y_SPEED_MAX: f32 = 2.0;

// Frame pacing
pub const TARGET_FPS: f64 = 60.0;

// Palette
pub const GRADIENT_TOP: &str = "#123456"; // deep blue
pub const GRADIENT_BOTTOM: &str = "#64728e"; // light greyish blue
pub const GRADIENT_MID_OFFSET: f64 = 0.4;
pub const STAR_RGB: [u8; 3] = [200, 200, 200];
pub const STAR_ALPHA: f32 = 0.9;

// Spatial grid
pub const GRID_BUCKET_INLINE: usize = 8;
