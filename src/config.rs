/// Application-level constants
pub const APP_NAME: &str = "Arogya";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "info,arogya=debug"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_arogya() {
        assert_eq!(APP_NAME, "Arogya");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn default_filter_names_the_crate() {
        assert!(default_log_filter().contains("arogya"));
    }
}
