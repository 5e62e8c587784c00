//! Portal controller: session, current route, mounted page and transition

use crate::fixtures;
use crate::list_view::{SortDirection, SortableList};
use crate::models::*;
use crate::pages::*;
use crate::routes::{resolve, Route};
use crate::session::{Role, Session};
use crate::transition::RouteTransition;

/// The page currently mounted, with its local state
#[derive(Debug, Clone)]
pub enum Page {
    Landing,
    Login(LoginPage),

    StudentDashboard,
    Upload(UploadPage),
    Certificates(CertificateListPage),
    Certificate(CertificatePage),

    StaffDashboard,
    Students(StudentsPage),
    StudentForm(StudentFormPage),
    StudentDetail(StudentDetailPage),
    Flagged(SortableList<FlaggedCertificate>),
    Incomplete(Vec<IncompleteSubmission>),
    Review(CertificateListPage),

    AdminDashboard,
    StaffList(StaffListPage),
    StaffForm(StaffFormPage),
    StaffDetail(StaffDetailPage),
}

impl Page {
    /// Mount the page for a route with fresh data.
    ///
    /// Routes pointing at an unknown record yield the list page to go to instead.
    pub fn mount(route: &Route) -> Result<Page, Route> {
        let page = match route {
            Route::Landing => Page::Landing,
            Route::Login => Page::Login(LoginPage::new(false)),
            Route::AdminLogin => Page::Login(LoginPage::new(true)),

            Route::StudentDashboard => Page::StudentDashboard,
            Route::StudentUpload => Page::Upload(UploadPage::default()),
            Route::StudentCertificates => Page::Certificates(CertificateListPage::new(fixtures::student_certificates(), Role::Student)),
            Route::StudentCertificate(id) => {
                let cert = fixtures::student_certificates()
                    .into_iter()
                    .find(|c| c.id == *id)
                    .ok_or_else(|| missing("certificate", id, Route::StudentCertificates))?;
                Page::Certificate(CertificatePage::new(cert, Role::Student))
            }

            Route::StaffDashboard => Page::StaffDashboard,
            Route::StaffStudents => Page::Students(StudentsPage::new(
                fixtures::staff_students(),
                StudentColumn::TotalPoints,
                SortDirection::Descending,
                Role::Staff,
            )),
            Route::StaffAddStudent => Page::StudentForm(StudentFormPage::add(Role::Staff)),
            Route::StaffEditStudent(id) => {
                let student = find_student(fixtures::staff_students(), id, Route::StaffStudents)?;
                Page::StudentForm(StudentFormPage::edit(&student, Role::Staff))
            }
            Route::StaffStudent(id) => {
                let student = find_student(fixtures::staff_students(), id, Route::StaffStudents)?;
                Page::StudentDetail(StudentDetailPage::new(student, Role::Staff))
            }
            Route::StaffFlagged => Page::Flagged(SortableList::new(
                fixtures::flagged_certificates(),
                FlaggedColumn::UploadDate,
                SortDirection::Descending,
            )),
            Route::StaffIncomplete => Page::Incomplete(fixtures::incomplete_submissions()),
            Route::StaffReview => Page::Review(CertificateListPage::new(fixtures::review_queue(), Role::Staff)),
            Route::StaffCertificate(id) => {
                let cert = fixtures::certificate_by_id(id).ok_or_else(|| missing("certificate", id, Route::StaffReview))?;
                Page::Certificate(CertificatePage::new(cert, Role::Staff))
            }

            Route::AdminDashboard => Page::AdminDashboard,
            Route::AdminStudents => Page::Students(StudentsPage::new(
                fixtures::admin_students(),
                StudentColumn::TotalPoints,
                SortDirection::Descending,
                Role::Admin,
            )),
            Route::AdminAddStudent => Page::StudentForm(StudentFormPage::add(Role::Admin)),
            Route::AdminEditStudent(id) => {
                let student = find_student(fixtures::admin_students(), id, Route::AdminStudents)?;
                Page::StudentForm(StudentFormPage::edit(&student, Role::Admin))
            }
            Route::AdminStudent(id) => {
                let student = find_student(fixtures::admin_students(), id, Route::AdminStudents)?;
                Page::StudentDetail(StudentDetailPage::new(student, Role::Admin))
            }
            Route::AdminCertificate(id) => {
                let cert = fixtures::certificate_by_id(id).ok_or_else(|| missing("certificate", id, Route::AdminDashboard))?;
                Page::Certificate(CertificatePage::new(cert, Role::Admin))
            }
            Route::AdminStaff => Page::StaffList(StaffListPage::new(
                fixtures::staff_members(),
                StaffColumn::Name,
                SortDirection::Ascending,
                Role::Admin,
            )),
            Route::AdminAddStaff => Page::StaffForm(StaffFormPage::add()),
            Route::AdminStaffMember(id) => Page::StaffDetail(StaffDetailPage::new(find_staff(id)?)),
            Route::AdminEditStaff(id) => Page::StaffForm(StaffFormPage::edit(&find_staff(id)?)),
        };
        Ok(page)
    }
}

impl Page {
    /// Hand a saved record to the list page it belongs to
    pub fn receive(&mut self, record: Saved) {
        match (self, record) {
            (Page::Students(page), Saved::Student(student)) => page.upsert(student),
            (Page::StaffList(page), Saved::Staff(staff)) => page.upsert(staff),
            (_, record) => tracing::warn!(?record, "saved record has no list on this page"),
        }
    }
}

fn missing(kind: &str, id: &str, fallback: Route) -> Route {
    tracing::warn!(kind, id, %fallback, "record not found, redirecting");
    fallback
}

fn find_student(students: Vec<Student>, id: &str, fallback: Route) -> Result<Student, Route> {
    students
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| missing("student", id, fallback))
}

fn find_staff(id: &str) -> Result<Staff, Route> {
    fixtures::staff_members()
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| missing("staff", id, Route::AdminStaff))
}

/// The running portal.
///
/// Owns the injected session; `teardown` must be called when the shell
/// goes away so a pending transition never fires afterwards.
#[derive(Debug)]
pub struct Portal {
    session: Session,
    route: Route,
    page: Page,
    transition: RouteTransition,
    history: Vec<Route>,
}

impl Portal {
    /// Start the portal on the dashboard of a restored session, or the landing page
    pub fn new(session: Session, transition: RouteTransition, now: f64) -> Self {
        let start = session.role().map(Route::dashboard).unwrap_or(Route::Landing);
        Self::with_path(session, transition, &start.path(), now)
    }

    /// Start the portal at an explicit path (e.g. the browser location)
    pub fn with_path(session: Session, transition: RouteTransition, path: &str, now: f64) -> Self {
        let mut portal = Self {
            session,
            route: Route::Landing,
            page: Page::Landing,
            transition,
            history: Vec::new(),
        };
        portal.enter(path, now);
        portal.history.clear();
        portal
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Navigate to a path, applying role gates and redirects
    pub fn navigate(&mut self, path: &str, now: f64) {
        let previous = self.route.clone();
        self.enter(path, now);
        if self.route != previous {
            self.history.push(previous);
        }
    }

    pub fn go(&mut self, route: Route, now: f64) {
        self.navigate(&route.path(), now);
    }

    /// Return to the previous route, or the role's home when there is none
    pub fn back(&mut self, now: f64) {
        let target = self
            .history
            .pop()
            .unwrap_or_else(|| self.role().map(Route::dashboard).unwrap_or(Route::Landing));
        self.enter(&target.path(), now);
    }

    pub fn apply(&mut self, outcome: Outcome, now: f64) {
        match outcome {
            Outcome::Stay => {}
            Outcome::Navigate(route) => self.go(route, now),
            Outcome::Save(route, record) => {
                self.go(route, now);
                self.page.receive(record);
            }
            Outcome::Back => self.back(now),
        }
    }

    pub fn login(&mut self, role: Role, now: f64) {
        self.session.login(role);
        self.history.clear();
        self.go(Route::dashboard(role), now);
    }

    pub fn logout(&mut self, now: f64) {
        self.session.logout();
        self.history.clear();
        self.go(Route::Login, now);
    }

    /// Whether the loading screen covers the page this frame
    pub fn is_loading(&mut self, now: f64) -> bool {
        self.transition.poll(now)
    }

    pub fn transition(&self) -> &RouteTransition {
        &self.transition
    }

    pub fn teardown(&mut self) {
        self.transition.cancel();
        tracing::debug!("portal torn down");
    }

    fn enter(&mut self, path: &str, now: f64) {
        let mut route = resolve(path, self.role());
        let page = loop {
            match Page::mount(&route) {
                Ok(page) => break page,
                Err(redirect) => route = resolve(&redirect.path(), self.role()),
            }
        };
        if route != self.route {
            self.transition.start(now);
        }
        tracing::info!(requested = path, route = %route, "navigate");
        self.route = route;
        self.page = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryRoleStore;

    fn portal(role: Option<Role>) -> Portal {
        Portal::new(Session::init(Box::new(MemoryRoleStore::new(role))), RouteTransition::default(), 0.0)
    }

    #[test]
    fn test_restored_role_opens_dashboard() {
        assert_eq!(portal(Some(Role::Staff)).route(), &Route::StaffDashboard);
        assert_eq!(portal(None).route(), &Route::Landing);
    }

    #[test]
    fn test_login_and_logout() {
        let mut p = portal(None);
        p.navigate("/admin/students", 0.0);
        assert_eq!(p.route(), &Route::Login);

        p.login(Role::Admin, 1.0);
        assert_eq!(p.route(), &Route::AdminDashboard);
        p.navigate("/admin/students", 2.0);
        assert!(matches!(p.page(), Page::Students(page) if page.scope == Role::Admin));

        p.logout(3.0);
        assert_eq!(p.route(), &Route::Login);
        assert_eq!(p.role(), None);
    }

    #[test]
    fn test_wrong_role_lands_on_landing() {
        let mut p = portal(Some(Role::Student));
        p.navigate("/staff/flagged", 0.0);
        assert_eq!(p.route(), &Route::Landing);
    }

    #[test]
    fn test_unknown_record_redirects_to_list() {
        let mut p = portal(Some(Role::Admin));
        p.navigate("/admin/staff/404/edit", 0.0);
        assert_eq!(p.route(), &Route::AdminStaff);
        p.navigate("/admin/staff/2/edit", 0.0);
        assert!(matches!(p.page(), Page::StaffForm(page) if page.form.name == "Prof. Michael Brown"));
    }

    #[test]
    fn test_each_mount_gets_fresh_data() {
        let mut p = portal(Some(Role::Admin));
        p.navigate("/admin/students", 0.0);
        if let Page::Students(page) = p.page_mut() {
            page.request_delete("1");
            page.confirm_delete();
            assert_eq!(page.list.len(), 2);
        }
        p.navigate("/admin/dashboard", 1.0);
        p.navigate("/admin/students", 2.0);
        assert!(matches!(p.page(), Page::Students(page) if page.list.len() == 3));
    }

    #[test]
    fn test_default_sort_state_at_mount() {
        let mut p = portal(Some(Role::Staff));
        p.navigate("/staff/flagged", 0.0);
        let Page::Flagged(list) = p.page() else {
            panic!("expected flagged page");
        };
        assert_eq!(list.state().field, FlaggedColumn::UploadDate);
        assert_eq!(list.state().direction, SortDirection::Descending);
        assert_eq!(list.items()[0].upload_date, "2024-03-08");
    }

    #[test]
    fn test_transition_runs_on_route_change() {
        let mut p = portal(Some(Role::Staff));
        assert!(p.is_loading(0.5));
        assert!(!p.is_loading(1.0));

        p.navigate("/staff/students", 5.0);
        assert!(p.is_loading(5.2));
        p.teardown();
        assert!(!p.is_loading(5.3));
    }

    #[test]
    fn test_back_after_accepting_certificate() {
        let mut p = portal(Some(Role::Staff));
        p.navigate("/staff/review", 0.0);
        p.navigate("/staff/certificates/4", 1.0);
        let outcome = match p.page_mut() {
            Page::Certificate(page) => page.accept(),
            _ => Outcome::Stay,
        };
        p.apply(outcome, 2.0);
        assert_eq!(p.route(), &Route::StaffReview);
    }

    #[test]
    fn test_saved_staff_appears_in_list() {
        let mut p = portal(Some(Role::Admin));
        p.navigate("/admin/staff/add", 0.0);
        let outcome = match p.page_mut() {
            Page::StaffForm(page) => {
                page.form.name = "Prof. Anna Lee".to_string();
                page.form.email = "anna.lee@ktu.edu".to_string();
                page.form.department = "Civil Engineering".to_string();
                page.form.password = "pw".to_string();
                page.form.confirm_password = "pw".to_string();
                page.submit()
            }
            _ => Outcome::Stay,
        };
        p.apply(outcome, 1.0);
        assert_eq!(p.route(), &Route::AdminStaff);
        let Page::StaffList(page) = p.page() else {
            panic!("expected staff list");
        };
        assert_eq!(page.list.len(), 4);
        assert_eq!(page.list.items()[0].name, "Prof. Anna Lee");
    }

    #[test]
    fn test_edited_student_replaces_row() {
        let mut p = portal(Some(Role::Staff));
        p.navigate("/staff/students/1/edit", 0.0);
        let outcome = match p.page_mut() {
            Page::StudentForm(page) => {
                page.form.name = "Johnny Doe".to_string();
                page.submit()
            }
            _ => Outcome::Stay,
        };
        p.apply(outcome, 1.0);
        let Page::Students(page) = p.page() else {
            panic!("expected student list");
        };
        assert_eq!(page.list.len(), 3);
        assert!(page.list.find(|s| s.id == "1" && s.name == "Johnny Doe").is_some());
    }
}
