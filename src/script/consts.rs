/// Indentation width of pretty output when none is configured.
pub const DEFAULT_INDENT: usize = 4;

pub const PRETTY_ENV: &str = "TROPO_RENDER_PRETTY";
pub const INDENT_ENV: &str = "TROPO_RENDER_INDENT";
