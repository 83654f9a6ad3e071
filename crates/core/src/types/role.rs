//! User roles.
//!
//! The backend encodes roles as small integers; the client keeps the raw
//! code on the wire types and converts through [`Role`] at decision
//! points so an unrecognized code stays data instead of a parse failure.

use serde::{Deserialize, Serialize};

/// User role with different permission levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access, including user administration and the dashboard.
    Admin,
    /// Handles orders at the register.
    Cashier,
    /// Works the kitchen order queue.
    Cook,
    /// Places orders from the menu.
    Customer,
}

impl Role {
    /// Convert a backend role code into a `Role`.
    ///
    /// Returns `None` for codes this client does not know about; callers
    /// decide the fallback (navigation defaults to the menu).
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Admin),
            1 => Some(Self::Cashier),
            2 => Some(Self::Cook),
            3 => Some(Self::Customer),
            _ => None,
        }
    }

    /// The backend's integer code for this role.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Admin => 0,
            Self::Cashier => 1,
            Self::Cook => 2,
            Self::Customer => 3,
        }
    }

    /// Human-readable name, as shown in role pickers.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Admin => "Administrador",
            Self::Cashier => "Cajero",
            Self::Cook => "Cocinero",
            Self::Customer => "Cliente",
        }
    }

    /// All roles in code order, for building selection lists.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Admin, Self::Cashier, Self::Cook, Self::Customer]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Cashier => write!(f, "cashier"),
            Self::Cook => write!(f, "cook"),
            Self::Customer => write!(f, "customer"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "cashier" => Ok(Self::Cashier),
            "cook" => Ok(Self::Cook),
            "customer" => Ok(Self::Customer),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_codes_roundtrip() {
        for role in Role::all() {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
    }

    #[test]
    fn test_unknown_codes_are_none() {
        assert_eq!(Role::from_code(-1), None);
        assert_eq!(Role::from_code(4), None);
        assert_eq!(Role::from_code(99), None);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Role::Cook.to_string(), "cook");
        assert_eq!("cashier".parse::<Role>().unwrap(), Role::Cashier);
        assert!("waiter".parse::<Role>().is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Role::Admin.display_name(), "Administrador");
        assert_eq!(Role::Customer.display_name(), "Cliente");
    }
}
