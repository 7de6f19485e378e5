//! Static route table mapping paths to access metadata.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router wires paths to page components in `app`; this module is the
//! declarative source of truth for which of those paths require a session
//! and which role may enter. `util::guard` evaluates entries from this
//! table on every navigation attempt.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::Role;

/// Access metadata attached to a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteAccess {
    /// Whether a stored token is required to enter.
    pub requires_auth: bool,
    /// Role the stored session must carry, if the route is role-scoped.
    pub role: Option<Role>,
}

impl RouteAccess {
    /// Access for routes anyone may visit.
    pub const PUBLIC: RouteAccess = RouteAccess { requires_auth: false, role: None };

    /// Access for routes restricted to one role.
    pub const fn for_role(role: Role) -> RouteAccess {
        RouteAccess { requires_auth: true, role: Some(role) }
    }
}

/// One entry of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    /// Browser path as it appears in the address bar.
    pub path: &'static str,
    /// Unique route name.
    pub name: &'static str,
    pub access: RouteAccess,
}

/// Every navigable route. `/` and `/home` are two entries for the same
/// screen and keep distinct names so both stay unique.
pub const ROUTE_TABLE: &[RouteMeta] = &[
    RouteMeta { path: "/", name: "root", access: RouteAccess::PUBLIC },
    RouteMeta { path: "/home", name: "home", access: RouteAccess::PUBLIC },
    RouteMeta { path: "/signup", name: "signup", access: RouteAccess::PUBLIC },
    RouteMeta { path: "/login", name: "login", access: RouteAccess::PUBLIC },
    RouteMeta { path: "/adminlogin", name: "admin-login", access: RouteAccess::PUBLIC },
    RouteMeta {
        path: "/admin/dashboard",
        name: "admin-dashboard",
        access: RouteAccess::for_role(Role::Admin),
    },
    RouteMeta {
        path: "/manager/dashboard",
        name: "manager-dashboard",
        access: RouteAccess::for_role(Role::Manager),
    },
    RouteMeta {
        path: "/employee/dashboard",
        name: "employee-dashboard",
        access: RouteAccess::for_role(Role::Employee),
    },
];

/// Path of the login screen, the unauthenticated redirect target.
pub const LOGIN_PATH: &str = "/login";

/// Path of the home screen, the role-mismatch redirect target.
pub const HOME_PATH: &str = "/";

/// Look up a route by its browser path.
///
/// Empty paths and trailing slashes normalize to their canonical entry, so
/// `""`, `/` and `/home/` all resolve.
pub fn find_route(path: &str) -> Option<&'static RouteMeta> {
    let canonical = match path {
        "" => "/",
        p if p.len() > 1 && p.ends_with('/') => &p[..p.len() - 1],
        p => p,
    };
    ROUTE_TABLE.iter().find(|meta| meta.path == canonical)
}

/// Dashboard path for a role, used to land users after login.
pub const fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin/dashboard",
        Role::Manager => "/manager/dashboard",
        Role::Employee => "/employee/dashboard",
    }
}
