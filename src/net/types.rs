//! Wire types shared by the REST services.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Closed set of user roles known to the backend.
///
/// Unknown role strings fail deserialization, which downstream readers
/// treat as an unreadable identity rather than an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Engineer,
    Observer,
}

impl Role {
    /// Wire spelling of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Engineer => "engineer",
            Role::Observer => "observer",
        }
    }

    /// Human-facing label for selects and badges.
    pub fn label(self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Engineer => "Engineer",
            Role::Observer => "Observer",
        }
    }

    /// Parse the wire spelling; `None` for anything outside the closed set.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "manager" => Some(Role::Manager),
            "engineer" => Some(Role::Engineer),
            "observer" => Some(Role::Observer),
            _ => None,
        }
    }

    /// Every role, in display order.
    pub const ALL: [Role; 3] = [Role::Manager, Role::Engineer, Role::Observer];
}

/// Authenticated user record held client-side after login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    pub fn is_manager(&self) -> bool {
        matches!(self.role, Role::Manager)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    /// Name shown in lists: full name when present, otherwise the login.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}

/// Abbreviated user embedded in projects (manager) and defects (assignee).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
}

/// Login request payload.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration request payload.
#[derive(Clone, Debug, Serialize)]
pub struct Registration {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub manager_id: i64,
    #[serde(default)]
    pub manager: Option<UserRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ProjectCreate {
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub manager_id: i64,
}

/// Partial project update; absent fields are left untouched by the backend.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<i64>,
}

/// Defect severity as triaged by the reporter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];
}

/// Defect workflow state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefectStatus {
    New,
    InProgress,
    Review,
    Closed,
    Cancelled,
}

impl DefectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DefectStatus::New => "new",
            DefectStatus::InProgress => "in_progress",
            DefectStatus::Review => "review",
            DefectStatus::Closed => "closed",
            DefectStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DefectStatus::New => "New",
            DefectStatus::InProgress => "In progress",
            DefectStatus::Review => "Review",
            DefectStatus::Closed => "Closed",
            DefectStatus::Cancelled => "Cancelled",
        }
    }

    /// Open states counted as "active" in project statistics.
    pub fn is_active(self) -> bool {
        matches!(
            self,
            DefectStatus::New | DefectStatus::InProgress | DefectStatus::Review
        )
    }

    pub const ALL: [DefectStatus; 5] = [
        DefectStatus::New,
        DefectStatus::InProgress,
        DefectStatus::Review,
        DefectStatus::Closed,
        DefectStatus::Cancelled,
    ];
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defect {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: DefectStatus,
    #[serde(default)]
    pub assignee_id: Option<i64>,
    pub project_id: i64,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub assignee: Option<UserRef>,
}

#[derive(Clone, Debug, Serialize)]
pub struct DefectCreate {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub project_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Partial defect update; absent fields are left untouched by the backend.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DefectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DefectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Per-project defect statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefectStats {
    pub active: u32,
    pub resolved: u32,
    pub total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub defect_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub user: Option<User>,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct CommentCreate {
    pub defect_id: i64,
    pub content: String,
}
