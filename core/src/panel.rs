use std::{
    collections::HashMap,
    io::{self, Write as _},
    sync::{Mutex, MutexGuard, PoisonError},
};

use colored::Colorize;
use crossterm::{cursor, execute, terminal};

use crate::{
    action::Action,
    notify::{Notifier, Toast, ToastBoard},
    preference::Preference,
    style,
    view::{View, PLACEHOLDER},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelHeader {
    pub title: String,
    pub subtitle: String,
}

impl PanelHeader {
    /// An explicit title wins; otherwise the title names the target service.
    pub fn new(title: Option<&str>, target: Option<&str>) -> Self {
        let title = title.filter(|s| !s.is_empty());
        let target = target.filter(|s| !s.is_empty());

        let title = match (title, target) {
            (Some(title), _) => title.to_owned(),
            (None, Some(target)) => format!("Token2go | {}", target),
            (None, None) => "Token2go".to_owned(),
        };
        let subtitle = match target {
            Some(target) => format!("Get a token for {} with the Token2go service", target),
            None => "Go ahead and grab a token with the Token2go service".to_owned(),
        };
        Self { title, subtitle }
    }
}

struct PanelModel {
    toggles: HashMap<Preference, bool>,
    fingerprint: String,
    token: String,
    token_selected: bool,
    board: ToastBoard,
}

/// Terminal rendition of the token page.
///
/// In interactive mode every toast redraws the whole screen, so timer-driven
/// changes show up without user input.
pub struct Panel {
    header: PanelHeader,
    interactive: bool,
    model: Mutex<PanelModel>,
}

impl Panel {
    const MIN_WIDTH: usize = 40;
    const MAX_WIDTH: usize = 100;

    pub fn new(header: PanelHeader, interactive: bool) -> Self {
        Self {
            header,
            interactive,
            model: Mutex::new(PanelModel {
                toggles: HashMap::new(),
                fingerprint: PLACEHOLDER.to_owned(),
                token: PLACEHOLDER.to_owned(),
                token_selected: false,
                board: ToastBoard::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PanelModel> {
        self.model.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn width() -> usize {
        let (cols, _) = terminal::size().unwrap_or((60, 20));
        (cols as usize).clamp(Self::MIN_WIDTH, Self::MAX_WIDTH)
    }

    pub fn render(&self) -> String {
        const BOLD_LINE: &str = "━";
        const THIN_LINE: &str = "─";

        let width = Self::width();
        let bold_bar = BOLD_LINE.repeat(width).blue().bold();
        let thin_bar = THIN_LINE.repeat(width).bright_black();

        let mut m = self.lock();
        let mut lines = vec![
            bold_bar.to_string(),
            format!(" {}", self.header.title.bright_yellow().bold()),
            format!(" {}", self.header.subtitle.dimmed()),
            thin_bar.to_string(),
        ];

        let switches = [Preference::AutoCopy, Preference::AutoDelete]
            .iter()
            .map(|&pref| {
                let checked = m.toggles.get(&pref).copied().unwrap_or(false);
                style::switch(&pref.to_string(), checked)
            })
            .collect::<Vec<_>>()
            .join("    ");
        lines.push(format!(" {}", switches));

        lines.push(format!(" {} {}", "fingerprint:".cyan().bold(), m.fingerprint));
        let token = if m.token_selected {
            m.token.reversed().to_string()
        } else {
            m.token.clone()
        };
        lines.push(format!(" {} {}", "token:      ".cyan().bold(), token));

        let toasts: Vec<String> = m
            .board
            .active()
            .map(|t| format!(" {}", style::toast_line(t.severity, &t.message)))
            .collect();
        if !toasts.is_empty() {
            lines.push(thin_bar.to_string());
            lines.extend(toasts);
        }

        lines.push(bold_bar.to_string());

        if self.interactive {
            let keys = Action::KEYS
                .iter()
                .map(|(key, label)| format!("[{}] {}", key.bold(), label))
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(format!(" {}", keys.bright_black()));
        }

        lines.join("\n")
    }

    pub fn draw(&self) {
        let rendered = self.render();
        let mut stdout = io::stdout().lock();
        if self.interactive {
            let _ = execute!(
                stdout,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            );
        }
        let _ = writeln!(stdout, "{}", rendered);
        if self.interactive {
            let _ = write!(stdout, "> ");
        }
        let _ = stdout.flush();
    }
}

impl View for Panel {
    fn set_toggle(&self, pref: Preference, checked: bool) {
        self.lock().toggles.insert(pref, checked);
    }

    fn set_fingerprint_field(&self, text: &str) {
        self.lock().fingerprint = text.to_owned();
    }

    fn set_token_field(&self, text: &str) {
        let mut m = self.lock();
        m.token = text.to_owned();
        m.token_selected = false;
    }

    fn select_token_field(&self) {
        self.lock().token_selected = true;
    }
}

impl Notifier for Panel {
    fn notify(&self, toast: Toast) {
        log::debug!("[{}] {}", toast.severity, toast.message);
        self.lock().board.push(toast);
        if self.interactive {
            self.draw();
        }
    }
}
