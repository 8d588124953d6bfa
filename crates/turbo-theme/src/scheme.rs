//! System color-scheme queries.

/// Environment variable consulted by [`EnvColorScheme`].
pub const COLOR_SCHEME_ENV: &str = "TURBO_COLOR_SCHEME";

/// Whether the environment asks for a dark color scheme.
///
/// Consulted once, at initialization, and only when no valid preference was
/// persisted.
pub trait ColorSchemeQuery: Send + Sync {
    fn prefers_dark(&self) -> bool;
}

impl<F> ColorSchemeQuery for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn prefers_dark(&self) -> bool {
        self()
    }
}

/// A fixed answer, for tests and for hosts that already know the scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedColorScheme {
    dark: bool,
}

impl FixedColorScheme {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    pub fn dark() -> Self {
        Self::new(true)
    }

    pub fn light() -> Self {
        Self::new(false)
    }
}

impl ColorSchemeQuery for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.dark
    }
}

/// Reads the preference from an environment variable.
///
/// `dark` (any case) means dark; anything else, or an unset variable,
/// means light.
#[derive(Debug, Clone)]
pub struct EnvColorScheme {
    var: String,
}

impl EnvColorScheme {
    /// Read [`COLOR_SCHEME_ENV`].
    pub fn new() -> Self {
        Self::from_var(COLOR_SCHEME_ENV)
    }

    /// Read a custom variable.
    pub fn from_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Interpret a raw variable value.
    pub fn parse(value: Option<&str>) -> bool {
        value
            .map(|v| v.trim().eq_ignore_ascii_case("dark"))
            .unwrap_or(false)
    }
}

impl Default for EnvColorScheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSchemeQuery for EnvColorScheme {
    fn prefers_dark(&self) -> bool {
        Self::parse(std::env::var(&self.var).ok().as_deref())
    }
}
