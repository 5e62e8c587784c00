//! Page-local state and actions
//!
//! Each page owns the data it was mounted with; actions mutate that copy,
//! log what a backend call would have done and tell the portal where to go.

use crate::fixtures;
use crate::forms::{CertificateEdit, LoginForm, StaffForm, StudentForm, UploadForm};
use crate::list_view::{SortDirection, Sortable, SortableList};
use crate::models::*;
use crate::routes::Route;
use crate::session::Role;

/// What the portal should do after a page action
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Stay,
    Navigate(Route),
    /// Go to a list page and put the saved record into it
    Save(Route, Saved),
    Back,
}

/// Record produced by a form submit
#[derive(Debug, Clone, PartialEq)]
pub enum Saved {
    Student(Student),
    Staff(Staff),
}

/// Record awaiting delete confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub id: String,
    pub name: String,
}

// ============================================================================
// Management lists (students, staff)
// ============================================================================

/// A sortable management list with a delete confirmation dialog
#[derive(Debug, Clone)]
pub struct ManagePage<T: Sortable> {
    pub list: SortableList<T>,
    pub pending_delete: Option<PendingDelete>,
    /// Role whose shell the page is rendered in
    pub scope: Role,
}

impl<T: Sortable + Entity> ManagePage<T> {
    pub fn new(items: Vec<T>, field: T::Field, direction: SortDirection, scope: Role) -> Self {
        Self {
            list: SortableList::new(items, field, direction),
            pending_delete: None,
            scope,
        }
    }

    pub fn sort_by(&mut self, field: T::Field) {
        self.list.sort_by(field);
    }

    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = self.list.find(|item| item.id() == id).map(|item| PendingDelete {
            id: item.id().to_string(),
            name: item.display_name().to_string(),
        });
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_delete(&mut self) {
        let Some(pending) = self.pending_delete.take() else {
            return;
        };
        let removed = self.list.retain(|item| item.id() != pending.id);
        tracing::info!(id = %pending.id, name = %pending.name, removed, "deleted record");
    }

    /// Replace the record with the same id, or insert it where the current
    /// sort order puts it
    pub fn upsert(&mut self, item: T) {
        let id = item.id().to_string();
        if self.list.find(|x| x.id() == id).is_some() {
            self.list.update(|x| x.id() == id, |x| *x = item);
            tracing::info!(%id, "updated record in list");
        } else {
            self.list.push(item);
            tracing::info!(%id, "added record to list");
        }
    }
}

/// One past the largest numeric id
fn next_id<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    let max = ids.filter_map(|id| id.parse::<u32>().ok()).max().unwrap_or(0);
    (max + 1).to_string()
}

pub type StudentsPage = ManagePage<Student>;
pub type StaffListPage = ManagePage<Staff>;

impl StudentsPage {
    pub fn view(&self, id: &str) -> Outcome {
        Outcome::Navigate(match self.scope {
            Role::Admin => Route::AdminStudent(id.to_string()),
            _ => Route::StaffStudent(id.to_string()),
        })
    }

    pub fn edit(&self, id: &str) -> Outcome {
        Outcome::Navigate(match self.scope {
            Role::Admin => Route::AdminEditStudent(id.to_string()),
            _ => Route::StaffEditStudent(id.to_string()),
        })
    }

    pub fn add(&self) -> Outcome {
        Outcome::Navigate(match self.scope {
            Role::Admin => Route::AdminAddStudent,
            _ => Route::StaffAddStudent,
        })
    }
}

impl StaffListPage {
    pub fn view(&self, id: &str) -> Outcome {
        Outcome::Navigate(Route::AdminStaffMember(id.to_string()))
    }

    pub fn edit(&self, id: &str) -> Outcome {
        Outcome::Navigate(Route::AdminEditStaff(id.to_string()))
    }
}

// ============================================================================
// Forms
// ============================================================================

#[derive(Debug, Clone)]
pub struct LoginPage {
    pub form: LoginForm,
    /// Admin sign-in has its own page and no role picker
    pub admin_only: bool,
    pub error: Option<String>,
}

impl LoginPage {
    pub fn new(admin_only: bool) -> Self {
        let role = if admin_only { Role::Admin } else { Role::Student };
        Self { form: LoginForm::for_role(role), admin_only, error: None }
    }

    /// Returns the role to sign in as, or None with `error` set
    pub fn submit(&mut self) -> Option<Role> {
        if self.admin_only {
            self.form.role = Role::Admin;
        }
        match self.form.submit() {
            Ok(role) => {
                self.error = None;
                Some(role)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct StudentFormPage {
    pub form: StudentForm,
    /// Student being edited; None when adding
    pub editing: Option<Student>,
    pub scope: Role,
    pub error: Option<String>,
}

impl StudentFormPage {
    pub fn add(scope: Role) -> Self {
        Self { form: StudentForm::default(), editing: None, scope, error: None }
    }

    pub fn edit(student: &Student, scope: Role) -> Self {
        Self { form: StudentForm::from_student(student), editing: Some(student.clone()), scope, error: None }
    }

    pub fn list_route(&self) -> Route {
        match self.scope {
            Role::Admin => Route::AdminStudents,
            _ => Route::StaffStudents,
        }
    }

    pub fn submit(&mut self) -> Outcome {
        // Staff add students to their own list, admins must pick a staff member
        if let Err(e) = self.form.validate(self.scope == Role::Admin) {
            self.error = Some(e.to_string());
            return Outcome::Stay;
        }
        self.error = None;
        let student = match &self.editing {
            Some(original) => {
                let mut student = original.clone();
                self.form.apply_to(&mut student);
                tracing::info!(id = %student.id, form = ?self.form, "updating student");
                student
            }
            None => {
                let existing = match self.scope {
                    Role::Admin => fixtures::admin_students(),
                    _ => fixtures::staff_students(),
                };
                let student = self.form.to_student(next_id(existing.iter().map(|s| s.id.as_str())));
                tracing::info!(id = %student.id, form = ?self.form, "creating student");
                student
            }
        };
        Outcome::Save(self.list_route(), Saved::Student(student))
    }
}

#[derive(Debug, Clone)]
pub struct StaffFormPage {
    pub form: StaffForm,
    pub editing: Option<Staff>,
    pub error: Option<String>,
}

impl StaffFormPage {
    pub fn add() -> Self {
        Self { form: StaffForm::default(), editing: None, error: None }
    }

    pub fn edit(staff: &Staff) -> Self {
        Self { form: StaffForm::from_staff(staff), editing: Some(staff.clone()), error: None }
    }

    pub fn submit(&mut self) -> Outcome {
        if let Err(e) = self.form.validate(self.editing.is_none()) {
            self.error = Some(e.to_string());
            return Outcome::Stay;
        }
        self.error = None;
        let staff = match &self.editing {
            Some(original) => {
                let mut staff = original.clone();
                self.form.apply_to(&mut staff);
                staff
            }
            None => {
                let existing = fixtures::staff_members();
                self.form.to_staff(next_id(existing.iter().map(|s| s.id.as_str())))
            }
        };
        let action = if self.editing.is_some() { "updating staff" } else { "creating staff" };
        tracing::info!(id = %staff.id, name = %staff.name, email = %staff.email, department = %staff.department, "{}", action);
        Outcome::Save(Route::AdminStaff, Saved::Staff(staff))
    }
}

#[derive(Debug, Clone, Default)]
pub struct UploadPage {
    pub form: UploadForm,
    pub error: Option<String>,
    /// Number of certificates in the last successful submission
    pub submitted: Option<usize>,
}

impl UploadPage {
    pub fn add_files<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            match self.form.add_file(name) {
                Ok(()) => self.error = None,
                Err(e) => {
                    tracing::warn!(file = name, "rejected upload: {}", e);
                    self.error = Some(e.to_string());
                }
            }
        }
        self.submitted = None;
    }

    pub fn submit(&mut self) {
        if let Err((file, e)) = self.form.validate() {
            self.error = Some(if file.is_empty() { e.to_string() } else { format!("{}: {}", file, e) });
            return;
        }
        for entry in &self.form.entries {
            tracing::info!(file = %entry.file_name, title = %entry.title, category = %entry.category, points = %entry.points, "submitting certificate");
        }
        self.submitted = Some(self.form.entries.len());
        self.form = UploadForm::default();
        self.error = None;
    }
}

// ============================================================================
// Detail pages
// ============================================================================

#[derive(Debug, Clone)]
pub struct CertificatePage {
    pub certificate: Certificate,
    pub scope: Role,
    /// Manual entry form while editing
    pub edit: Option<CertificateEdit>,
    pub error: Option<String>,
}

impl CertificatePage {
    pub fn new(certificate: Certificate, scope: Role) -> Self {
        Self { certificate, scope, edit: None, error: None }
    }

    /// Students only view; staff and admins review
    pub fn can_review(&self) -> bool {
        self.scope != Role::Student
    }

    pub fn accept(&mut self) -> Outcome {
        self.certificate.status = CertificateStatus::Approved;
        tracing::info!(id = %self.certificate.id, "accepted certificate");
        Outcome::Back
    }

    pub fn reject(&mut self) -> Outcome {
        self.certificate.status = CertificateStatus::Rejected;
        tracing::info!(id = %self.certificate.id, "rejected certificate");
        Outcome::Back
    }

    pub fn flag_incorrect(&mut self) {
        self.certificate.status = CertificateStatus::Flagged;
        tracing::info!(id = %self.certificate.id, "flagged certificate as incorrect");
    }

    pub fn start_manual_entry(&mut self) {
        self.edit = Some(CertificateEdit::from_certificate(&self.certificate));
        self.error = None;
    }

    pub fn cancel_manual_entry(&mut self) {
        self.edit = None;
        self.error = None;
    }

    pub fn save_changes(&mut self) {
        let Some(edit) = &self.edit else {
            return;
        };
        match edit.apply(&mut self.certificate) {
            Ok(()) => {
                tracing::info!(id = %self.certificate.id, title = %self.certificate.title, points = self.certificate.points, "saved certificate changes");
                self.edit = None;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn download(&self) {
        tracing::info!(id = %self.certificate.id, file = %self.certificate.file, "download certificate");
    }
}

/// Certificates listed for one student
#[derive(Debug, Clone)]
pub struct CertificateListPage {
    pub list: SortableList<Certificate>,
    pub scope: Role,
}

impl CertificateListPage {
    pub fn new(certificates: Vec<Certificate>, scope: Role) -> Self {
        Self {
            list: SortableList::new(certificates, CertificateColumn::UploadDate, SortDirection::Descending),
            scope,
        }
    }

    pub fn view(&self, id: &str) -> Outcome {
        Outcome::Navigate(certificate_route(self.scope, id))
    }

    pub fn download(&self, id: &str) {
        if let Some(cert) = self.list.find(|c| c.id == id) {
            tracing::info!(id, file = %cert.file, "download certificate");
        }
    }
}

pub fn certificate_route(scope: Role, id: &str) -> Route {
    match scope {
        Role::Student => Route::StudentCertificate(id.to_string()),
        Role::Staff => Route::StaffCertificate(id.to_string()),
        Role::Admin => Route::AdminCertificate(id.to_string()),
    }
}

#[derive(Debug, Clone)]
pub struct StudentDetailPage {
    pub student: Student,
    pub certificates: CertificateListPage,
}

impl StudentDetailPage {
    pub fn new(student: Student, scope: Role) -> Self {
        let certificates = CertificateListPage::new(fixtures::certificates_for_student(&student.name), scope);
        Self { student, certificates }
    }
}

#[derive(Debug, Clone)]
pub struct StaffDetailPage {
    pub staff: Staff,
    pub students: SortableList<Student>,
}

impl StaffDetailPage {
    pub fn new(staff: Staff) -> Self {
        let students = fixtures::admin_students()
            .into_iter()
            .filter(|s| s.assigned_staff.as_deref() == Some(staff.name.as_str()))
            .collect();
        Self {
            staff,
            students: SortableList::new(students, StudentColumn::Name, SortDirection::Ascending),
        }
    }

    pub fn view_student(&self, id: &str) -> Outcome {
        Outcome::Navigate(Route::AdminStudent(id.to_string()))
    }

    pub fn edit(&self) -> Outcome {
        Outcome::Navigate(Route::AdminEditStaff(self.staff.id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_flow() {
        let mut page = StudentsPage::new(fixtures::admin_students(), StudentColumn::TotalPoints, SortDirection::Descending, Role::Admin);
        page.request_delete("2");
        assert_eq!(page.pending_delete.as_ref().map(|p| p.name.as_str()), Some("Jane Smith"));
        page.cancel_delete();
        assert_eq!(page.list.len(), 3);

        page.request_delete("2");
        page.confirm_delete();
        assert_eq!(page.list.len(), 2);
        assert!(page.pending_delete.is_none());
        assert!(page.list.find(|s| s.id == "2").is_none());
    }

    #[test]
    fn test_request_delete_unknown_id_is_ignored() {
        let mut page = StaffListPage::new(fixtures::staff_members(), StaffColumn::Name, SortDirection::Ascending, Role::Admin);
        page.request_delete("nope");
        assert!(page.pending_delete.is_none());
        page.confirm_delete();
        assert_eq!(page.list.len(), 3);
    }

    #[test]
    fn test_student_routes_follow_scope() {
        let staff = StudentsPage::new(fixtures::staff_students(), StudentColumn::TotalPoints, SortDirection::Descending, Role::Staff);
        assert_eq!(staff.view("1"), Outcome::Navigate(Route::StaffStudent("1".to_string())));
        assert_eq!(staff.add(), Outcome::Navigate(Route::StaffAddStudent));
        let admin = StudentsPage::new(fixtures::admin_students(), StudentColumn::TotalPoints, SortDirection::Descending, Role::Admin);
        assert_eq!(admin.edit("3"), Outcome::Navigate(Route::AdminEditStudent("3".to_string())));
    }

    #[test]
    fn test_staff_form_submit() {
        let mut page = StaffFormPage::add();
        page.form.name = "Prof. New".to_string();
        page.form.email = "new@ktu.edu".to_string();
        page.form.department = "Civil Engineering".to_string();
        page.form.password = "a".to_string();
        page.form.confirm_password = "b".to_string();
        assert_eq!(page.submit(), Outcome::Stay);
        assert_eq!(page.error.as_deref(), Some("Passwords do not match"));
        page.form.confirm_password = "a".to_string();
        let Outcome::Save(route, Saved::Staff(staff)) = page.submit() else {
            panic!("expected a saved staff member");
        };
        assert_eq!(route, Route::AdminStaff);
        assert_eq!(staff.id, "4");
        assert_eq!(staff.name, "Prof. New");
        assert!(page.error.is_none());
    }

    #[test]
    fn test_student_edit_keeps_totals() {
        let original = fixtures::admin_students().remove(2);
        let mut page = StudentFormPage::edit(&original, Role::Admin);
        page.form.name = "Michael Johnson".to_string();
        let Outcome::Save(route, Saved::Student(student)) = page.submit() else {
            panic!("expected a saved student");
        };
        assert_eq!(route, Route::AdminStudents);
        assert_eq!(student.id, original.id);
        assert_eq!(student.name, "Michael Johnson");
        assert_eq!(student.total_points, original.total_points);
        assert_eq!(student.assigned_staff, original.assigned_staff);
    }

    #[test]
    fn test_upsert_replaces_or_inserts_in_order() {
        let mut page = StudentsPage::new(fixtures::staff_students(), StudentColumn::TotalPoints, SortDirection::Descending, Role::Staff);
        let mut jane = fixtures::staff_students().remove(1);
        jane.total_points = 70;
        page.upsert(jane);
        assert_eq!(page.list.len(), 3);
        assert_eq!(page.list.items()[0].name, "Jane Smith");

        let mut form = StudentFormPage::add(Role::Staff);
        form.form.name = "Ann Lee".to_string();
        form.form.ktu_id = "KTU/2021/010".to_string();
        form.form.department = "Civil Engineering".to_string();
        let Outcome::Save(_, Saved::Student(ann)) = form.submit() else {
            panic!("expected a saved student");
        };
        assert_eq!(ann.id, "4");
        page.upsert(ann);
        let names: Vec<_> = page.list.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Jane Smith", "Mike Johnson", "John Doe", "Ann Lee"]);
    }

    #[test]
    fn test_certificate_review_actions() {
        let cert = fixtures::certificate_by_id("1").expect("fixture certificate");
        let mut page = CertificatePage::new(cert, Role::Admin);
        assert!(page.can_review());
        page.start_manual_entry();
        if let Some(edit) = page.edit.as_mut() {
            edit.points = "25".to_string();
        }
        page.save_changes();
        assert_eq!(page.certificate.points, 25);
        assert!(page.edit.is_none());
        assert_eq!(page.accept(), Outcome::Back);
        assert_eq!(page.certificate.status, CertificateStatus::Approved);
    }

    #[test]
    fn test_upload_submit_resets_form() {
        let mut page = UploadPage::default();
        page.add_files(["cert.pdf", "virus.exe"]);
        assert_eq!(page.form.entries.len(), 1);
        assert!(page.error.is_some());
        let entry = &mut page.form.entries[0];
        entry.title = "Blood Donation Camp".to_string();
        entry.category = "Other".to_string();
        entry.points = "5".to_string();
        page.submit();
        assert_eq!(page.submitted, Some(1));
        assert!(page.form.entries.is_empty());
    }

    #[test]
    fn test_staff_detail_lists_assigned_students() {
        let staff = fixtures::staff_members().remove(0);
        let page = StaffDetailPage::new(staff);
        let names: Vec<_> = page.students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["John Doe", "Mike Johnson"]);
    }
}
