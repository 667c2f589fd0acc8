//! Version information

/// Crate version reported in logs and `--version`
pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
