//! Hub API token resolution

/// Resolve the Hub API token from its conventional sources.
///
/// Priority:
/// 1. `HF_TOKEN` environment variable
/// 2. `~/.huggingface/token` file
///
/// Returns `None` when neither source yields a non-empty token. Callers that
/// require authentication map that to `HubError::MissingToken` at startup.
#[must_use]
pub fn resolve_token() -> Option<String> {
    if let Ok(token) = std::env::var("HF_TOKEN") {
        if !token.is_empty() {
            return Some(token);
        }
    }

    if let Some(home) = dirs::home_dir() {
        let token_path = home.join(".huggingface").join("token");
        if let Ok(token) = std::fs::read_to_string(token_path) {
            let token = token.trim().to_string();
            if !token.is_empty() {
                return Some(token);
            }
        }
    }

    None
}
