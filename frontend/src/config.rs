/// Base URL of the content service. Empty means same origin, which is how the
/// backend serves the built site.
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("")
}
