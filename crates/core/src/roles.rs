//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in
//! `20260301000002_create_users_table.sql`.

pub const ROLE_CLIENT: &str = "client";
pub const ROLE_DESIGNER: &str = "designer";
pub const ROLE_ADMIN: &str = "admin";

/// All valid role values.
pub const VALID_ROLES: &[&str] = &[ROLE_CLIENT, ROLE_DESIGNER, ROLE_ADMIN];

/// True when the role may act on designs it does not own (read access and
/// review operations).
pub fn is_elevated(role: &str) -> bool {
    role == ROLE_DESIGNER || role == ROLE_ADMIN
}
