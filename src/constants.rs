// Estimation defaults
pub const DEFAULT_UNCERTAINTY_PCT: f64 = 15.0;
pub const DEFAULT_PAUSE_PER_CHAPTER_MIN: f64 = 0.0;
pub const DEFAULT_MINUTES_PER_DAY: f64 = 30.0;

// Page mode
pub const DEFAULT_PAGES_PER_CHAPTER: f64 = 30.0;
pub const DEFAULT_SPEED_MIN_PER_PAGE: f64 = 0.20;

// Input bounds (enforced at the CLI boundary, never inside the engine)
pub const MAX_UNCERTAINTY_PCT: f64 = 50.0;
pub const MAX_PAUSE_PER_CHAPTER_MIN: f64 = 10.0;
pub const MIN_AVERAGE_MIN_PER_CHAPTER: f64 = 0.1;
pub const MIN_UNITS_PER_CHAPTER_OR_VOLUME: f64 = 1.0;
pub const MAX_SAMPLE_MINUTES: u32 = 59;

// Projection
pub const DAYS_PER_WEEK: f64 = 7.0;

// CSV import columns
pub const ID_COLUMN: &str = "chapter";
pub const PAGES_COLUMN: &str = "page_count";
pub const MINUTES_COLUMN: &str = "minutes";
