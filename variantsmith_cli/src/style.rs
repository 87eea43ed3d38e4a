//! Styling helpers for terminal output.
//!
//! The [`ToolStyle`] trait provides convenience methods for applying ANSI
//! styling via the `colored` crate. Implementations for `&str` and `String`
//! are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait ToolStyle {
    fn banner_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn warning_style(&self) -> ColoredString;
    fn path_style(&self) -> ColoredString;
    fn heading_style(&self) -> ColoredString;
}

impl ToolStyle for &str {
    fn banner_style(&self) -> ColoredString {
        self.bright_yellow().underline()
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().bright_blue()
    }
    fn warning_style(&self) -> ColoredString {
        self.truecolor(230, 180, 40)
    }
    fn path_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn heading_style(&self) -> ColoredString {
        self.underline()
    }
}

impl ToolStyle for String {
    fn banner_style(&self) -> ColoredString {
        self.as_str().banner_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn warning_style(&self) -> ColoredString {
        self.as_str().warning_style()
    }
    fn path_style(&self) -> ColoredString {
        self.as_str().path_style()
    }
    fn heading_style(&self) -> ColoredString {
        self.as_str().heading_style()
    }
}
