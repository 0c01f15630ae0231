pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "qrglass";
pub const APP_NAME: &str = "qrglass-cli";

pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "qrglass-cli.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";
