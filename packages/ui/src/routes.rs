//! Route table and role guard.
//!
//! The web crate owns the Dioxus `Routable` enum; this module holds the
//! platform-free part so containers can navigate and the guard can be tested
//! without a renderer.

use std::fmt;

use store::User;

/// Application views reachable through the router.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoutePath {
    Login,
    Bills,
    NewBill,
}

impl RoutePath {
    pub fn path(self) -> &'static str {
        match self {
            RoutePath::Login => "/",
            RoutePath::Bills => "/employee/bills",
            RoutePath::NewBill => "/employee/bill/new",
        }
    }

    /// Parse a location path. Legacy hash routes (`#employee/bills`) are
    /// accepted as well. Unknown paths return `None`.
    pub fn parse(raw: &str) -> Option<RoutePath> {
        let trimmed = raw.trim().trim_start_matches('#').trim_start_matches('/');
        let trimmed = trimmed.trim_end_matches('/');
        match trimmed {
            "" => Some(RoutePath::Login),
            "employee/bills" => Some(RoutePath::Bills),
            "employee/bill/new" => Some(RoutePath::NewBill),
            _ => None,
        }
    }

    /// Whether the route is reserved to signed-in employees.
    pub fn requires_employee(self) -> bool {
        matches!(self, RoutePath::Bills | RoutePath::NewBill)
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Apply the role guard: employee routes need an `Employee` user, anything
/// else lands on the login page.
pub fn authorize(target: RoutePath, user: Option<&User>) -> RoutePath {
    if !target.requires_employee() {
        return target;
    }
    match user {
        Some(user) if user.is_employee() => target,
        _ => {
            tracing::info!(route = %target, "not signed in as an employee, redirecting to login");
            RoutePath::Login
        }
    }
}

/// Resolve a location path for the given user.
pub fn navigate(path: &str, user: Option<&User>) -> Option<RoutePath> {
    RoutePath::parse(path).map(|target| authorize(target, user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::UserType;

    fn admin() -> User {
        User {
            user_type: UserType::Admin,
            email: "admin@test.tld".into(),
        }
    }

    #[test]
    fn test_parse_paths() {
        assert_eq!(RoutePath::parse("/"), Some(RoutePath::Login));
        assert_eq!(RoutePath::parse(""), Some(RoutePath::Login));
        assert_eq!(RoutePath::parse("/employee/bills"), Some(RoutePath::Bills));
        assert_eq!(RoutePath::parse("#employee/bills"), Some(RoutePath::Bills));
        assert_eq!(RoutePath::parse("#employee/bill/new"), Some(RoutePath::NewBill));
        assert_eq!(RoutePath::parse("/employee/bill/new/"), Some(RoutePath::NewBill));
        assert_eq!(RoutePath::parse("#admin/dashboard"), None);
    }

    #[test]
    fn test_path_roundtrip() {
        for route in [RoutePath::Login, RoutePath::Bills, RoutePath::NewBill] {
            assert_eq!(RoutePath::parse(route.path()), Some(route));
        }
    }

    #[test]
    fn test_employee_reaches_employee_routes() {
        let employee = User::employee("a@a");
        assert_eq!(navigate("#employee/bills", Some(&employee)), Some(RoutePath::Bills));
        assert_eq!(navigate("#employee/bill/new", Some(&employee)), Some(RoutePath::NewBill));
    }

    #[test]
    fn test_guard_redirects_to_login() {
        assert_eq!(navigate("/employee/bills", None), Some(RoutePath::Login));
        assert_eq!(navigate("/employee/bill/new", Some(&admin())), Some(RoutePath::Login));
        assert_eq!(authorize(RoutePath::Login, None), RoutePath::Login);
    }

    #[test]
    fn test_unknown_path_resolves_to_nothing() {
        assert_eq!(navigate("/nowhere", Some(&User::employee("a@a"))), None);
    }
}
