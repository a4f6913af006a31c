//! Build-time client configuration.

use account::graphql::DEFAULT_ENDPOINT;

/// GraphQL endpoint, taken from `PROFILE_API_URL` at compile time.
pub fn api_endpoint() -> &'static str {
    option_env!("PROFILE_API_URL").unwrap_or(DEFAULT_ENDPOINT)
}
