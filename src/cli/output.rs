pub use skylane_core::format::OutputFormat;

/// clap value parser backed by the core `FromStr` impl
pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: skylane_core::error::SkylaneError| e.to_string())
}
