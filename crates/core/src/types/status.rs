//! Role, status, and kind enums for the record collections.
//!
//! Each enum takes only its listed values; facet filters and form selects
//! round-trip through `Display`/`FromStr` using the exact display labels.

use serde::{Deserialize, Serialize};

/// Generate `Display`, `FromStr`, and a `VALUES` list for a facet enum.
///
/// Facet enums are matched against query-string values, so the string form
/// is the display label, not a serde rename.
macro_rules! facet_enum {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            /// All values, in declaration order.
            pub const VALUES: &'static [Self] = &[$(Self::$variant),+];

            /// The display label for this value.
            #[must_use]
            pub const fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok(Self::$variant),)+
                    _ => Err(format!(concat!("invalid ", stringify!($name), ": {}"), s)),
                }
            }
        }
    };
}

/// Role of a managed user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UserRole {
    Admin,
    Moderator,
    #[default]
    User,
}

facet_enum!(UserRole {
    Admin => "Admin",
    Moderator => "Moderator",
    User => "User",
});

/// Lifecycle status of a managed user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

facet_enum!(UserStatus {
    Active => "Active",
    Inactive => "Inactive",
    Pending => "Pending",
});

/// Kind of a stored file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    Pdf,
    Doc,
    Spreadsheet,
    Text,
    Image,
    Video,
    Audio,
}

facet_enum!(FileKind {
    Pdf => "PDF",
    Doc => "DOC",
    Spreadsheet => "Spreadsheet",
    Text => "Text",
    Image => "Image",
    Video => "Video",
    Audio => "Audio",
});

/// Ingestion status of a stored file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FileStatus {
    #[default]
    Stored,
    Processing,
    Failed,
}

facet_enum!(FileStatus {
    Stored => "Stored",
    Processing => "Processing",
    Failed => "Failed",
});

/// Status of a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WorkspaceStatus {
    #[default]
    Active,
    Inactive,
}

facet_enum!(WorkspaceStatus {
    Active => "Active",
    Inactive => "Inactive",
});

/// Status of a subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PlanStatus {
    #[default]
    Active,
    Inactive,
}

facet_enum!(PlanStatus {
    Active => "Active",
    Inactive => "Inactive",
});

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// Admin-panel role with different permission levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Full access to all admin features including plan and RBAC changes.
    SuperAdmin,
    /// Full access to record management.
    Admin,
    /// Read-only access to the dashboards.
    Viewer,
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SuperAdmin => write!(f, "super_admin"),
            Self::Admin => write!(f, "admin"),
            Self::Viewer => write!(f, "viewer"),
        }
    }
}

impl std::str::FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Self::SuperAdmin),
            "admin" => Ok(Self::Admin),
            "viewer" => Ok(Self::Viewer),
            _ => Err(format!("invalid admin role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_roundtrip() {
        for role in UserRole::VALUES {
            assert_eq!(role.label().parse::<UserRole>().unwrap(), *role);
        }
        for kind in FileKind::VALUES {
            assert_eq!(kind.label().parse::<FileKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_file_kind_labels() {
        assert_eq!(FileKind::Pdf.to_string(), "PDF");
        assert_eq!("PDF".parse::<FileKind>().unwrap(), FileKind::Pdf);
        assert!("pdf".parse::<FileKind>().is_err());
    }

    #[test]
    fn test_admin_role_roundtrip() {
        assert_eq!(
            "super_admin".parse::<AdminRole>().unwrap(),
            AdminRole::SuperAdmin
        );
        assert_eq!(AdminRole::Viewer.to_string(), "viewer");
        assert!("owner".parse::<AdminRole>().is_err());
    }
}
