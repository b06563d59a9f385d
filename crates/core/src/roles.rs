//! Well-known role name constants carried in access-token claims.

pub const ROLE_HR: &str = "hr";
pub const ROLE_EMPLOYEE: &str = "employee";
