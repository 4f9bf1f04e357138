/**
 * User Roles
 *
 * This module defines the closed set of roles used for route-level
 * authorization. Authorization is a set-membership check per route; there is
 * no computed hierarchy.
 *
 * # Default Role
 *
 * `individual` is the lowest-privilege role and the default: any absent or
 * unrecognized role value supplied at creation resolves to it through
 * `Role::parse_or_default`. That function is the single validation point
 * shared by public registration and admin user creation.
 *
 * # Storage
 *
 * Roles are stored as TEXT in the users table. The manual sqlx codec below
 * keeps the column a plain string; a value that somehow does not match the
 * enumeration decodes as the default rather than failing the row.
 */

use serde::{Deserialize, Serialize};

/// Privilege tag attached to every user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Full access to all endpoints
    Administrator,
    /// Member of an organization; may read company data
    OrganizationMember,
    /// Ordinary account; lowest privilege, used as the default
    Individual,
    /// Manages events; no extra route access in this API
    EventManager,
}

impl Role {
    /// Wire/storage representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::OrganizationMember => "organization-member",
            Role::Individual => "individual",
            Role::EventManager => "event-manager",
        }
    }

    /// Parse a role string, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "administrator" => Some(Role::Administrator),
            "organization-member" => Some(Role::OrganizationMember),
            "individual" => Some(Role::Individual),
            "event-manager" => Some(Role::EventManager),
            _ => None,
        }
    }

    /// Resolve an optional role value supplied at user creation
    ///
    /// Absent or unrecognized values resolve to the lowest-privilege role.
    /// Both registration and admin user creation go through here so the two
    /// call sites cannot diverge.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(Role::parse).unwrap_or_default()
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Individual
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl sqlx::Type<sqlx::Postgres> for Role {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <&str as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <&str as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for Role {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<'_, sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Role {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<'_, sqlx::Postgres>>::decode(value)?;
        Ok(Role::parse(s).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_string_round_trip() {
        for role in [
            Role::Administrator,
            Role::OrganizationMember,
            Role::Individual,
            Role::EventManager,
        ] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Role::parse("ADMINISTRATOR"), Some(Role::Administrator));
        assert_eq!(Role::parse("Organization-Member"), Some(Role::OrganizationMember));
    }

    #[test]
    fn test_unknown_role_defaults_to_individual() {
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse_or_default(Some("superuser")), Role::Individual);
        assert_eq!(Role::parse_or_default(None), Role::Individual);
        assert_eq!(Role::parse_or_default(Some("")), Role::Individual);
    }

    #[test]
    fn test_explicit_administrator_is_kept() {
        assert_eq!(
            Role::parse_or_default(Some("administrator")),
            Role::Administrator
        );
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Role::OrganizationMember).unwrap();
        assert_eq!(json, r#""organization-member""#);

        let role: Role = serde_json::from_str(r#""event-manager""#).unwrap();
        assert_eq!(role, Role::EventManager);
    }
}
