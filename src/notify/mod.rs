use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeIcon {
    Success,
    Error,
}

impl fmt::Display for NoticeIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeIcon::Success => write!(f, "success"),
            NoticeIcon::Error => write!(f, "error"),
        }
    }
}

/// One user-facing notification: title, text, icon, and confirm button
/// label, the option set of a modal-style alert.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub text: String,
    pub icon: NoticeIcon,
    pub confirm_button_text: String,
}

impl Notice {
    pub fn new(title: &str, text: &str, icon: NoticeIcon, confirm_button_text: &str) -> Self {
        Self {
            title: title.to_string(),
            text: text.to_string(),
            icon,
            confirm_button_text: confirm_button_text.to_string(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn success(&self, notice: Notice);
    async fn error(&self, notice: Notice);
}

/// Prints notices to the terminal.
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn success(&self, notice: Notice) {
        println!("✅ {} {}", notice.title, notice.text);
        println!("   [{}]", notice.confirm_button_text);
    }

    async fn error(&self, notice: Notice) {
        eprintln!("❌ {} {}", notice.title, notice.text);
        eprintln!("   [{}]", notice.confirm_button_text);
    }
}
