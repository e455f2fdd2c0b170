//! Role hierarchy - closed, totally ordered set of account roles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Account role, ordered from highest to lowest authority.
///
/// The set is closed: every persisted role is one of these five values, and
/// an unknown string is a data error, not a recoverable runtime case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Sysadmin,
    #[serde(rename = "administrator")]
    Admin,
    Moderator,
    Veteran,
    #[default]
    User,
}

impl Role {
    /// All roles, highest authority first.
    pub const ALL: [Role; 5] = [
        Role::Sysadmin,
        Role::Admin,
        Role::Moderator,
        Role::Veteran,
        Role::User,
    ];

    /// Rank index in the total order. 0 is the highest authority.
    #[inline]
    pub const fn rank(self) -> u8 {
        match self {
            Role::Sysadmin => 0,
            Role::Admin => 1,
            Role::Moderator => 2,
            Role::Veteran => 3,
            Role::User => 4,
        }
    }

    /// Whether this role strictly outranks `other`.
    ///
    /// Equal roles never outrank each other.
    #[inline]
    pub const fn is_higher_than(self, other: Role) -> bool {
        self.rank() < other.rank()
    }

    /// Whether this role may act on other accounts at all
    /// (sysadmin, administrator, or moderator).
    #[inline]
    pub const fn is_staff(self) -> bool {
        matches!(self, Role::Sysadmin | Role::Admin | Role::Moderator)
    }

    /// The single gate shared by every moderation action against another
    /// account: the actor must be staff and must strictly outrank the target.
    #[inline]
    pub const fn can_moderate(self, target: Role) -> bool {
        self.is_staff() && self.is_higher_than(target)
    }

    /// Storage/wire string for this role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Sysadmin => "sysadmin",
            Role::Admin => "administrator",
            Role::Moderator => "moderator",
            Role::Veteran => "veteran",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a role from its storage string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sysadmin" => Ok(Role::Sysadmin),
            "administrator" => Ok(Role::Admin),
            "moderator" => Ok(Role::Moderator),
            "veteran" => Ok(Role::Veteran),
            "user" => Ok(Role::User),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}
