#[cfg(debug_assertions)]
pub fn get_asset_base_url() -> &'static str {
    "http://localhost:8080"  // Trunk dev server when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base_url() -> &'static str {
    ""  // Same origin in production
}
