//! View identifiers.
//!
//! Views are opaque to the router: it only needs a stable identifier to
//! activate one. The identifier strings match the page component names.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// User role a view belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Reviewer,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Reviewer, Role::Admin];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Reviewer => "reviewer",
            Self::Admin => "admin",
        }
    }

    /// Human-facing label used in navigation chrome.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Reviewer => "Reviewer",
            Self::Admin => "Admin",
        }
    }
}

/// Page-level view activated by a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    /// A student's own application.
    #[serde(rename = "MyApplicationPage")]
    MyApplication,
    /// Reviewer queue of applications.
    #[serde(rename = "ApplicationListPage")]
    ApplicationList,
    /// Reviewer detail screen for a single application.
    #[serde(rename = "ReviewDetailPage")]
    ReviewDetail,
    /// Admin system overview.
    #[serde(rename = "SystemOverviewPage")]
    SystemOverview,
}

impl ViewId {
    pub const ALL: [ViewId; 4] = [
        ViewId::MyApplication,
        ViewId::ApplicationList,
        ViewId::ReviewDetail,
        ViewId::SystemOverview,
    ];

    /// Stable identifier, equal to the page component name.
    #[must_use]
    pub fn identifier(self) -> &'static str {
        match self {
            Self::MyApplication => "MyApplicationPage",
            Self::ApplicationList => "ApplicationListPage",
            Self::ReviewDetail => "ReviewDetailPage",
            Self::SystemOverview => "SystemOverviewPage",
        }
    }

    /// Parse an identifier produced by [`ViewId::identifier`].
    #[must_use]
    pub fn from_identifier(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.identifier() == raw)
    }

    #[must_use]
    pub fn role(self) -> Role {
        match self {
            Self::MyApplication => Role::Student,
            Self::ApplicationList | Self::ReviewDetail => Role::Reviewer,
            Self::SystemOverview => Role::Admin,
        }
    }

    /// Document title shown while the view is active.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::MyApplication => "My Application",
            Self::ApplicationList => "Applications",
            Self::ReviewDetail => "Review Application",
            Self::SystemOverview => "System Overview",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
