#![warn(missing_docs)]
//! Color themes for `pyntax` span categories.
//!
//! A [`Theme`] maps every [`Category`] to a terminal [`Style`]. The built-in
//! palette works on any 16-color terminal; a YAML file can override any
//! subset of it:
//!
//! ```yaml
//! keyword:
//!   fg: bright-blue
//!   bold: true
//! comment:
//!   fg: bright-black
//!   italic: true
//! string:
//!   fg: "#22863a"
//! ```
//!
//! ```
//! use pyntax::Category;
//! use pyntax_theme::Theme;
//!
//! let theme = Theme::from_yaml_str("keyword:\n  fg: bright-blue\n  bold: true\n").unwrap();
//! assert!(theme.style_for(Category::Keyword).bold);
//! ```

use pyntax::Category;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Terminal colors (ANSI 16-color palette plus 24-bit RGB).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// The terminal's own default color.
    #[default]
    Default,
    /// ANSI black.
    Black,
    /// ANSI red.
    Red,
    /// ANSI green.
    Green,
    /// ANSI yellow.
    Yellow,
    /// ANSI blue.
    Blue,
    /// ANSI magenta.
    Magenta,
    /// ANSI cyan.
    Cyan,
    /// ANSI white.
    White,
    /// Bright ANSI black.
    BrightBlack,
    /// Bright ANSI red.
    BrightRed,
    /// Bright ANSI green.
    BrightGreen,
    /// Bright ANSI yellow.
    BrightYellow,
    /// Bright ANSI blue.
    BrightBlue,
    /// Bright ANSI magenta.
    BrightMagenta,
    /// Bright ANSI cyan.
    BrightCyan,
    /// Bright ANSI white.
    BrightWhite,
    /// 24-bit RGB.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a color spec: a kebab-case ANSI name, `default`, or `#rrggbb`.
    pub fn parse(spec: &str) -> Option<Self> {
        if let Some(hex) = spec.strip_prefix('#') {
            if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Self::Rgb(r, g, b));
        }
        match spec {
            "default" => Some(Self::Default),
            "black" => Some(Self::Black),
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "yellow" => Some(Self::Yellow),
            "blue" => Some(Self::Blue),
            "magenta" => Some(Self::Magenta),
            "cyan" => Some(Self::Cyan),
            "white" => Some(Self::White),
            "bright-black" => Some(Self::BrightBlack),
            "bright-red" => Some(Self::BrightRed),
            "bright-green" => Some(Self::BrightGreen),
            "bright-yellow" => Some(Self::BrightYellow),
            "bright-blue" => Some(Self::BrightBlue),
            "bright-magenta" => Some(Self::BrightMagenta),
            "bright-cyan" => Some(Self::BrightCyan),
            "bright-white" => Some(Self::BrightWhite),
            _ => None,
        }
    }
}

/// Text style attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Bold text.
    pub bold: bool,
    /// Italic text.
    pub italic: bool,
    /// Underlined text.
    pub underline: bool,
}

impl Style {
    /// Create a style with just a foreground color.
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set the background color.
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    /// Builder: set bold.
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic.
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: set underline.
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this is the default (no styling).
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Error)]
/// Errors produced by the theme loader.
pub enum ThemeError {
    #[error("YAML parse error: {0}")]
    /// YAML parsing failed.
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    /// Filesystem I/O failed.
    Io(#[from] std::io::Error),

    #[error("unknown category '{0}'")]
    /// A style key does not name a known span category.
    UnknownCategory(String),

    #[error("invalid color '{0}'")]
    /// A color value could not be parsed.
    InvalidColor(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStyle {
    #[serde(default)]
    fg: Option<String>,
    #[serde(default)]
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underline: bool,
}

impl RawStyle {
    fn resolve(&self) -> Result<Style, ThemeError> {
        let mut style = Style::default();
        if let Some(spec) = &self.fg {
            style.fg = parse_color(spec)?;
        }
        if let Some(spec) = &self.bg {
            style.bg = parse_color(spec)?;
        }
        style.bold = self.bold;
        style.italic = self.italic;
        style.underline = self.underline;
        Ok(style)
    }
}

fn parse_color(spec: &str) -> Result<Color, ThemeError> {
    Color::parse(spec).ok_or_else(|| ThemeError::InvalidColor(spec.to_string()))
}

/// A complete style assignment for every span category.
#[derive(Debug, Clone)]
pub struct Theme {
    styles: HashMap<Category, Style>,
}

impl Theme {
    /// Style for a category. Unassigned categories render unstyled.
    pub fn style_for(&self, category: Category) -> Style {
        self.styles.get(&category).copied().unwrap_or_default()
    }

    /// Assign a style to a category.
    pub fn set(&mut self, category: Category, style: Style) {
        self.styles.insert(category, style);
    }

    /// Parse a theme from YAML, overriding the built-in palette.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ThemeError> {
        let raw: HashMap<String, RawStyle> = serde_yaml::from_str(yaml)?;
        let mut theme = Self::default();
        for (name, raw_style) in &raw {
            let category = Category::from_name(name)
                .ok_or_else(|| ThemeError::UnknownCategory(name.clone()))?;
            theme.set(category, raw_style.resolve()?);
        }
        Ok(theme)
    }

    /// Load a theme from a YAML file, overriding the built-in palette.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }
}

impl Default for Theme {
    fn default() -> Self {
        let mut styles = HashMap::new();
        styles.insert(Category::Keyword, Style::fg(Color::Blue).with_bold());
        styles.insert(Category::BuiltinFunction, Style::fg(Color::Cyan));
        styles.insert(Category::Constant, Style::fg(Color::Magenta));
        styles.insert(Category::ExceptionName, Style::fg(Color::Red));
        styles.insert(Category::MagicMethod, Style::fg(Color::BrightCyan));
        styles.insert(Category::String, Style::fg(Color::Green));
        styles.insert(Category::FString, Style::fg(Color::BrightGreen));
        styles.insert(Category::Docstring, Style::fg(Color::Green).with_italic());
        styles.insert(Category::Comment, Style::fg(Color::BrightBlack).with_italic());
        styles.insert(Category::Number, Style::fg(Color::Yellow));
        styles.insert(Category::Decorator, Style::fg(Color::BrightMagenta));
        styles.insert(Category::Operator, Style::fg(Color::BrightWhite));
        styles.insert(Category::BracketRound, Style::fg(Color::BrightYellow));
        styles.insert(Category::BracketCurly, Style::fg(Color::BrightMagenta));
        styles.insert(Category::BracketSquare, Style::fg(Color::BrightCyan));
        styles.insert(Category::ClassName, Style::fg(Color::Yellow).with_bold());
        styles.insert(Category::FunctionName, Style::fg(Color::BrightBlue));
        styles.insert(Category::SelfOrCls, Style::fg(Color::Magenta).with_italic());
        styles.insert(Category::Plain, Style::default());
        Self { styles }
    }
}
