/// Environment variable holding the registry API key (basic-auth username)
pub const API_KEY_ENV: &str = "SCHEMA_REGISTRY_API_KEY";
/// Environment variable holding the registry API secret (basic-auth password)
pub const API_SECRET_ENV: &str = "SCHEMA_REGISTRY_API_SECRET";
/// Environment variable holding the registry base URL
pub const REGISTRY_URL_ENV: &str = "SCHEMA_REGISTRY_URL";

/// Context name that selects the unprefixed registry paths
pub const DEFAULT_CONTEXT: &str = "default";

pub const BIN_NAME: &str = "sr-cli";
