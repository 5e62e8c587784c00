//! Route table and role gating

use std::fmt;

use crate::session::Role;

/// Every page the portal can show
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    AdminLogin,

    StudentDashboard,
    StudentUpload,
    StudentCertificates,
    StudentCertificate(String),

    StaffDashboard,
    StaffStudents,
    StaffAddStudent,
    StaffEditStudent(String),
    StaffStudent(String),
    StaffFlagged,
    StaffIncomplete,
    StaffReview,
    StaffCertificate(String),

    AdminDashboard,
    AdminStudents,
    AdminAddStudent,
    AdminEditStudent(String),
    AdminStudent(String),
    AdminCertificate(String),
    AdminStaff,
    AdminAddStaff,
    AdminStaffMember(String),
    AdminEditStaff(String),
}

impl Route {
    /// Parse a path; None when no route matches
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Route::Landing,
            ["login"] => Route::Login,
            ["admin", "login"] => Route::AdminLogin,

            ["student", "dashboard"] => Route::StudentDashboard,
            ["student", "upload"] => Route::StudentUpload,
            ["student", "certificates"] => Route::StudentCertificates,
            ["student", "certificates", id] => Route::StudentCertificate(id.to_string()),

            ["staff", "dashboard"] => Route::StaffDashboard,
            ["staff", "students"] => Route::StaffStudents,
            ["staff", "students", "add"] => Route::StaffAddStudent,
            ["staff", "students", id, "edit"] => Route::StaffEditStudent(id.to_string()),
            ["staff", "students", id] => Route::StaffStudent(id.to_string()),
            ["staff", "flagged"] => Route::StaffFlagged,
            ["staff", "incomplete"] => Route::StaffIncomplete,
            ["staff", "review"] => Route::StaffReview,
            ["staff", "certificates", id] => Route::StaffCertificate(id.to_string()),

            ["admin", "dashboard"] => Route::AdminDashboard,
            ["admin", "students"] => Route::AdminStudents,
            ["admin", "students", "add"] => Route::AdminAddStudent,
            ["admin", "students", id, "edit"] => Route::AdminEditStudent(id.to_string()),
            ["admin", "students", id] => Route::AdminStudent(id.to_string()),
            ["admin", "certificates", id] => Route::AdminCertificate(id.to_string()),
            ["admin", "staff"] => Route::AdminStaff,
            ["admin", "staff", "add"] => Route::AdminAddStaff,
            ["admin", "staff", id, "edit"] => Route::AdminEditStaff(id.to_string()),
            ["admin", "staff", id] => Route::AdminStaffMember(id.to_string()),

            _ => return None,
        };
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::AdminLogin => "/admin/login".to_string(),

            Route::StudentDashboard => "/student/dashboard".to_string(),
            Route::StudentUpload => "/student/upload".to_string(),
            Route::StudentCertificates => "/student/certificates".to_string(),
            Route::StudentCertificate(id) => format!("/student/certificates/{}", id),

            Route::StaffDashboard => "/staff/dashboard".to_string(),
            Route::StaffStudents => "/staff/students".to_string(),
            Route::StaffAddStudent => "/staff/students/add".to_string(),
            Route::StaffEditStudent(id) => format!("/staff/students/{}/edit", id),
            Route::StaffStudent(id) => format!("/staff/students/{}", id),
            Route::StaffFlagged => "/staff/flagged".to_string(),
            Route::StaffIncomplete => "/staff/incomplete".to_string(),
            Route::StaffReview => "/staff/review".to_string(),
            Route::StaffCertificate(id) => format!("/staff/certificates/{}", id),

            Route::AdminDashboard => "/admin/dashboard".to_string(),
            Route::AdminStudents => "/admin/students".to_string(),
            Route::AdminAddStudent => "/admin/students/add".to_string(),
            Route::AdminEditStudent(id) => format!("/admin/students/{}/edit", id),
            Route::AdminStudent(id) => format!("/admin/students/{}", id),
            Route::AdminCertificate(id) => format!("/admin/certificates/{}", id),
            Route::AdminStaff => "/admin/staff".to_string(),
            Route::AdminAddStaff => "/admin/staff/add".to_string(),
            Route::AdminStaffMember(id) => format!("/admin/staff/{}", id),
            Route::AdminEditStaff(id) => format!("/admin/staff/{}/edit", id),
        }
    }

    /// Role a visitor must hold to open this route
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::Landing | Route::Login | Route::AdminLogin => None,
            Route::StudentDashboard
            | Route::StudentUpload
            | Route::StudentCertificates
            | Route::StudentCertificate(_) => Some(Role::Student),
            Route::StaffDashboard
            | Route::StaffStudents
            | Route::StaffAddStudent
            | Route::StaffEditStudent(_)
            | Route::StaffStudent(_)
            | Route::StaffFlagged
            | Route::StaffIncomplete
            | Route::StaffReview
            | Route::StaffCertificate(_) => Some(Role::Staff),
            _ => Some(Role::Admin),
        }
    }

    pub fn dashboard(role: Role) -> Route {
        match role {
            Role::Student => Route::StudentDashboard,
            Role::Staff => Route::StaffDashboard,
            Role::Admin => Route::AdminDashboard,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Decide which route a navigation to `path` actually lands on.
///
/// Unknown paths go to the landing page, gated routes send anonymous
/// visitors to the login page and wrong-role visitors to the landing page.
pub fn resolve(path: &str, role: Option<Role>) -> Route {
    let Some(route) = Route::parse(path) else {
        tracing::debug!(path, "unknown path, redirecting to landing");
        return Route::Landing;
    };
    match (route.required_role(), role) {
        (None, _) => route,
        (Some(_), None) => Route::Login,
        (Some(required), Some(current)) if required != current => Route::Landing,
        _ => route,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_routes() -> Vec<Route> {
        let id = || "42".to_string();
        vec![
            Route::Landing,
            Route::Login,
            Route::AdminLogin,
            Route::StudentDashboard,
            Route::StudentUpload,
            Route::StudentCertificates,
            Route::StudentCertificate(id()),
            Route::StaffDashboard,
            Route::StaffStudents,
            Route::StaffAddStudent,
            Route::StaffEditStudent(id()),
            Route::StaffStudent(id()),
            Route::StaffFlagged,
            Route::StaffIncomplete,
            Route::StaffReview,
            Route::StaffCertificate(id()),
            Route::AdminDashboard,
            Route::AdminStudents,
            Route::AdminAddStudent,
            Route::AdminEditStudent(id()),
            Route::AdminStudent(id()),
            Route::AdminCertificate(id()),
            Route::AdminStaff,
            Route::AdminAddStaff,
            Route::AdminStaffMember(id()),
            Route::AdminEditStaff(id()),
        ]
    }

    #[test]
    fn test_every_route_parses_its_own_path() {
        for route in all_routes() {
            assert_eq!(Route::parse(&route.path()), Some(route.clone()), "{}", route);
        }
    }

    #[test]
    fn test_literal_segments_win_over_ids() {
        assert_eq!(Route::parse("/admin/staff/add"), Some(Route::AdminAddStaff));
        assert_eq!(Route::parse("/staff/students/add/"), Some(Route::StaffAddStudent));
        assert_eq!(Route::parse("/admin/login"), Some(Route::AdminLogin));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::parse("/about"), None);
        assert_eq!(resolve("/about", None), Route::Landing);
        assert_eq!(resolve("/staff/students/1/edit/extra", Some(Role::Staff)), Route::Landing);
    }

    #[test]
    fn test_anonymous_visitors_are_sent_to_login() {
        assert_eq!(resolve("/student/dashboard", None), Route::Login);
        assert_eq!(resolve("/admin/staff", None), Route::Login);
        assert_eq!(resolve("/", None), Route::Landing);
        assert_eq!(resolve("/admin/login", None), Route::AdminLogin);
    }

    #[test]
    fn test_wrong_role_is_sent_to_landing() {
        assert_eq!(resolve("/admin/dashboard", Some(Role::Staff)), Route::Landing);
        assert_eq!(resolve("/staff/flagged", Some(Role::Student)), Route::Landing);
        assert_eq!(resolve("/staff/flagged", Some(Role::Staff)), Route::StaffFlagged);
    }

    #[test]
    fn test_query_string_is_ignored() {
        assert_eq!(Route::parse("/student/certificates?page=2"), Some(Route::StudentCertificates));
    }
}
