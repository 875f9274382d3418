use colored::{Color, ColoredString, Colorize};

use crate::notify::Severity;

#[macro_export]
macro_rules! print_success {
    ($fmt:literal, $($e:tt)*) => {
        use ::colored::Colorize as _;
        println!("{}", format!($fmt, $($e)*).green())
    }
}

pub fn is_truecolor_supported() -> bool {
    let Ok(v) = std::env::var("COLORTERM") else {
        return false
    };
    match v.as_str() {
        "truecolor" | "24bit" => true,
        _ => false,
    }
}

pub trait ColorTheme {
    fn color(&self) -> Color;
}

impl ColorTheme for Severity {
    fn color(&self) -> Color {
        use Severity::*;
        if !self::is_truecolor_supported() {
            return match self {
                Error => Color::Red,
                Info => Color::Cyan,
                Success => Color::Green,
                Warning => Color::Yellow,
            };
        }

        let (r, g, b) = self.rgb();
        Color::TrueColor { r, g, b }
    }
}

pub fn severity_icon(severity: Severity) -> &'static str {
    use Severity::*;
    match severity {
        Error => "✖",
        Info => "ℹ",
        Success => "✔",
        Warning => "⚠",
    }
}

/// One toast line: white text on the severity's color.
pub fn toast_line(severity: Severity, message: &str) -> ColoredString {
    format!(" {} {} ", self::severity_icon(severity), message)
        .on_color(severity.color())
        .bold()
        .white()
}

pub fn switch(label: &str, checked: bool) -> String {
    if checked {
        format!("{} {}", "[x]".green().bold(), label)
    } else {
        format!("{} {}", "[ ]".bright_black(), label.dimmed())
    }
}
