// src/config/consts.rs

// Persistence config (environment keys + defaults)
pub const ENV_DB_NAME: &str = "DB_NAME";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_DIR: &str = "DB_DIR";
pub const ENV_DB_BACKEND: &str = "DB_BACKEND";

pub const DEFAULT_DB_NAME: &str = "color_analysis";
pub const DEFAULT_DB_USER: &str = "postgres";
pub const DEFAULT_DB_HOST: &str = "localhost";
pub const LOCAL_HOSTS: &[&str] = &["localhost", "127.0.0.1", "::1", ""];
pub const DB_FILE_EXT: &str = "sqlite3";
pub const FREQUENCY_TABLE: &str = "color_frequencies";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Extract
pub const DEFAULT_INPUT: &str = "data/week_colors.html";

// Normalize: applied in order, substring replacement
pub const CORRECTIONS: &[(&str, &str)] = &[("BLEW", "BLUE"), ("ARSH", "ASH")];

// Statistics
pub const RED: &str = "RED";

// Demos
pub const SEARCH_LIST_LEN: usize = 20;
pub const SEARCH_MIN: u32 = 1;
pub const SEARCH_MAX: u32 = 100;
pub const BINARY_DIGITS: u32 = 4;
pub const FIB_TERMS: u32 = 50;
