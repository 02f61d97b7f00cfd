use crate::error::InviteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient, non-blocking notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NoticeKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl From<&InviteError> for Notice {
    fn from(err: &InviteError) -> Self {
        Notice::error(err.title(), err.to_string())
    }
}

impl From<InviteError> for Notice {
    fn from(err: InviteError) -> Self {
        Notice::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_notice_from_rejection() {
        let notice = Notice::from(InviteError::EmptyMessage);
        assert!(notice.is_error());
        assert_eq!(notice.title, "Please write a message");
        assert_eq!(notice.description, "Your message cannot be empty");
    }
}
