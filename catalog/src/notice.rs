//! Transient notices and the placeholder actions that raise them.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

pub const PENDING_DESCRIPTION: &str = "🚧 This feature isn't implemented yet. Stay tuned! 🚀";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeVariant {
    #[default]
    Default,
    Destructive,
}

/// A toast message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    #[must_use]
    pub fn success(description: impl Into<String>) -> Self {
        Self::titled("✅ Success", description)
    }

    #[must_use]
    pub fn error(description: impl Into<String>) -> Self {
        Self { title: "❌ Error".to_owned(), description: description.into(), variant: NoticeVariant::Destructive }
    }

    #[must_use]
    pub fn titled(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: NoticeVariant::Default }
    }

    /// Placeholder notice for an unimplemented action.
    #[must_use]
    pub fn pending(feature: PendingFeature) -> Self {
        Self::titled(feature.title(), PENDING_DESCRIPTION)
    }
}

/// Every action that exists in the UI but does nothing yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingFeature {
    Notifications,
    Search,
    ProblemDetails,
    /// Like toggle; carries the state after the toggle.
    Like { liked: bool },
    Comments,
    LoadMore,
    Share,
    Report,
    WantToHelp,
    Vote,
    ProposeSolution,
    ReportDuplicate,
    ImplementSolution,
    SolutionDetails,
    LocationSearch,
    FileUpload,
    ChangeAvatar,
    ChangePassword,
    ExportData,
    ForgotPassword,
    SignUp,
    /// Admin users-table action (`View`, `Edit`, `Suspend`).
    UserAction(&'static str),
    /// Admin review-queue action (`Approve`, `Reject`, `View`).
    ProblemAction(&'static str),
}

impl PendingFeature {
    #[must_use]
    pub fn title(self) -> String {
        let fixed = match self {
            Self::Notifications => "🔔 Notifications",
            Self::Search => "🔍 Search",
            Self::ProblemDetails => "🔍 Problem Details",
            Self::Like { liked: true } => "❤️ Liked",
            Self::Like { liked: false } => "💔 Unliked",
            Self::Comments => "💬 Comments",
            Self::LoadMore => "📄 Load More",
            Self::Share => "🔗 Share",
            Self::Report => "🚩 Report",
            Self::WantToHelp => "🤝 Want to Help",
            Self::Vote => "🗳️ Vote",
            Self::ProposeSolution => "💡 Propose Solution",
            Self::ReportDuplicate => "🔄 Report Duplicate",
            Self::ImplementSolution => "🚀 Implement Solution",
            Self::SolutionDetails => "💡 Solution Details",
            Self::LocationSearch => "📍 Location Search",
            Self::FileUpload => "📎 File Upload",
            Self::ChangeAvatar => "📷 Change Avatar",
            Self::ChangePassword => "🔒 Change Password",
            Self::ExportData => "📊 Export Data",
            Self::ForgotPassword => "🔑 Forgot Password",
            Self::SignUp => "✍️ Sign Up",
            Self::UserAction(action) => return format!("👤 {action}"),
            Self::ProblemAction(action) => return format!("📋 {action}"),
        };
        fixed.to_owned()
    }
}
