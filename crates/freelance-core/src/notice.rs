//! User-facing notifications

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn color_scheme(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "blue",
            NoticeLevel::Success => "green",
            NoticeLevel::Warning => "orange",
            NoticeLevel::Error => "red",
        }
    }
}

/// A dismissible toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: Option<String>,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>) -> Self {
        Notice {
            level,
            title: title.into(),
            description: None,
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title)
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl From<&Error> for Notice {
    fn from(err: &Error) -> Self {
        // Storage failures never lose the in-memory value, so they only warn
        let level = match err {
            Error::Storage { .. } => NoticeLevel::Warning,
            _ => NoticeLevel::Error,
        };
        Notice::new(level, err.title()).with_description(err.to_string())
    }
}

impl From<Error> for Notice {
    fn from(err: Error) -> Self {
        Notice::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_from_validation_error() {
        let notice = Notice::from(Error::validation("email", "missing '@'"));
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.title, "Invalid input");
        assert_eq!(notice.description.as_deref(), Some("invalid email: missing '@'"));
    }

    #[test]
    fn test_storage_error_is_warning() {
        let notice = Notice::from(&Error::storage("userSettings", "quota exceeded"));
        assert_eq!(notice.level, NoticeLevel::Warning);
    }

    #[test]
    fn test_builders() {
        let notice = Notice::success("Profile updated");
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.description, None);

        let notice = Notice::info("Download initiated").with_description("Your earnings report is being prepared");
        assert!(notice.description.is_some());
    }
}
