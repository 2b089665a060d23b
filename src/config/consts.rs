// src/config/consts.rs

// Statistics
pub const COUNTRY_AGGREGATE_REGION: &str = "Россия";
pub const SHARE_SCALE: u64 = 10_000; // shares are kept in basis points
pub const MIN_SHARE_BP: u64 = 100;   // 1%
pub const TOP_REGIONS: usize = 10;

// Local state
pub const LOG_FILE: &str = ".store/debug.log";
pub const CONFIG_FILE: &str = "vacancy_stats.toml";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const YEARS_SHEET: &str = "Статистика по годам";
pub const REGIONS_SHEET: &str = "Статистика по городам";
pub const DEFAULT_REPORT_FILE: &str = "report.html";

// Listing
pub const RANGE_END_DEFAULT: usize = 99_999_999;
pub const CELL_MAX_WIDTH: usize = 20;
pub const PROGRESS_EVERY: usize = 10_000; // rows between progress updates
