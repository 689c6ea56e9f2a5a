/// Directory name used for the data root when `VOLTPATH` is unset.
pub const APP_NAME: &str = "volt";

/// Environment variable overriding the data root.
pub const VOLTPATH_ENV: &str = "VOLTPATH";

/// Lock file name inside the data root.
pub const LOCK_FILENAME: &str = "lock.json";

/// Directory holding installed resources, inside the data root.
pub const REPOS_DIR: &str = "repos";
