//! Configuration for T3D rendering.
//!
//! Use [`ConfigBuilder`] at application startup to set the process-wide
//! defaults, or [`ConfigBuilder::build`] for a per-renderer configuration.

use std::sync::OnceLock;

/// Global configuration, initialized via [`ConfigBuilder::init`].
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Line terminator written between lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`, the editor's native line ending on Windows.
    CrLf,
}

impl LineEnding {
    /// The terminator string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Runtime configuration for T3D rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whitespace for one indentation level.
    pub indent_unit: String,
    /// Line terminator.
    pub line_ending: LineEnding,
    /// Maximum nesting depth of export-flagged expansion.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_unit: "  ".to_string(),
            line_ending: LineEnding::Lf,
            max_depth: 64,
        }
    }
}

impl Config {
    /// Line break followed by `indent` levels of indentation.
    pub fn new_line(&self, indent: usize) -> String {
        let mut s = String::with_capacity(2 + self.indent_unit.len() * indent);
        s.push_str(self.line_ending.as_str());
        for _ in 0..indent {
            s.push_str(&self.indent_unit);
        }
        s
    }
}

/// Configuration builder for fluent API.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    indent_unit: Option<String>,
    line_ending: Option<LineEnding>,
    max_depth: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the whitespace for one indentation level.
    ///
    /// Default: two spaces
    pub fn indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = Some(unit.into());
        self
    }

    /// Set the line terminator.
    ///
    /// Default: [`LineEnding::Lf`]
    pub fn line_ending(mut self, ending: LineEnding) -> Self {
        self.line_ending = Some(ending);
        self
    }

    /// Set the maximum export nesting depth.
    ///
    /// Default: 64
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Build a configuration without touching the global one.
    pub fn build(self) -> Config {
        let default = Config::default();
        Config {
            indent_unit: self.indent_unit.unwrap_or(default.indent_unit),
            line_ending: self.line_ending.unwrap_or(default.line_ending),
            max_depth: self.max_depth.unwrap_or(default.max_depth),
        }
    }

    /// Build and initialize the global configuration.
    ///
    /// This can only be called once. Subsequent calls are ignored.
    /// Returns `true` if configuration was set, `false` if already initialized.
    ///
    /// # Example
    ///
    /// ```
    /// use unreal_t3d::config::{ConfigBuilder, LineEnding};
    ///
    /// ConfigBuilder::new()
    ///     .line_ending(LineEnding::CrLf)
    ///     .init();
    /// ```
    pub fn init(self) -> bool {
        CONFIG.set(self.build()).is_ok()
    }
}

/// Get the current configuration, or default if not initialized.
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}
