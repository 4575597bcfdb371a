/// Base address of the catalog backend during development.
pub const DEV_BASE_URL: &str = "http://localhost:8000";

/// Resolves the catalog base URL at compile time. Debug builds always talk
/// to the local dev server; release builds may bake in a different address
/// via the VERDANT_API_URL environment variable at build time.
pub fn base_url() -> &'static str {
    if cfg!(debug_assertions) {
        DEV_BASE_URL
    } else {
        option_env!("VERDANT_API_URL").unwrap_or(DEV_BASE_URL)
    }
}
