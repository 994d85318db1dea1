use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

/// Box-drawing characters for bars, or plain ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphMode {
    Unicode,
    Ascii,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub glyphs: GlyphMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            glyphs: GlyphMode::Unicode,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// ASCII-only, no colors
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            glyphs: GlyphMode::Ascii,
        }
    }

    /// Resolve the command-line switches on top of the environment.
    /// `--plain` wins over `--color`, which wins over NO_COLOR and CLICOLOR.
    pub fn resolve(plain: bool, color: Option<ColorMode>) -> Self {
        if plain {
            Self::plain()
        } else {
            Self::from_env().with_color(color)
        }
    }

    pub fn with_color(self, color: Option<ColorMode>) -> Self {
        match color {
            Some(color) => Self { color, ..self },
            None => self,
        }
    }

    pub fn use_color(&self) -> bool {
        self.color.should_use_color()
    }

    /// Make `colored` agree with this config even when stdout is not a tty.
    pub fn apply(&self) {
        colored::control::set_override(self.use_color());
    }

    /// Horizontal bar of `width` cells, `value / max` of them filled.
    pub fn bar(&self, value: u32, max: u32, width: usize) -> String {
        let filled = if max == 0 {
            0
        } else {
            ((value.min(max) as usize * width) + max as usize / 2) / max as usize
        };
        let (full, empty) = match self.glyphs {
            GlyphMode::Unicode => ('█', '░'),
            GlyphMode::Ascii => ('#', '.'),
        };
        let mut bar = String::with_capacity(width * 3);
        bar.extend(std::iter::repeat(full).take(filled));
        bar.extend(std::iter::repeat(empty).take(width - filled));
        bar
    }

    pub fn bullet(&self) -> &'static str {
        match self.glyphs {
            GlyphMode::Unicode => "›",
            GlyphMode::Ascii => ">",
        }
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    /// Stage badge colored by tier.
    pub fn stage(&self, stage_id: &str, text: &str) -> String {
        self.paint(text, |t| match stage_id {
            "foundation" => t.red().bold(),
            "early-enterprise" => t.yellow().bold(),
            "growth-enterprise" => t.cyan().bold(),
            "enterprise-ready" => t.green().bold(),
            _ => t.bold(),
        })
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.use_color() {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}
