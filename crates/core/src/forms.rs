//! Form state and validation for the add/edit/upload pages

use crate::constants::{CERTIFICATE_CATEGORIES, DEPARTMENTS};
use crate::error::FormError;
use crate::fixtures;
use crate::models::{Certificate, Staff, Student};
use crate::session::Role;

fn required(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(())
    }
}

fn valid_email(email: &str) -> Result<(), FormError> {
    let email = email.trim();
    let ok = match email.split_once('@') {
        Some((user, domain)) => !user.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'),
        None => false,
    };
    if ok { Ok(()) } else { Err(FormError::InvalidEmail(email.to_string())) }
}

// ============================================================================
// Sign in
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self { email: String::new(), password: String::new(), role: Role::Student }
    }
}

impl LoginForm {
    pub fn for_role(role: Role) -> Self {
        Self { role, ..Self::default() }
    }

    /// Credentials are not checked anywhere; only presence is required
    pub fn submit(&self) -> Result<Role, FormError> {
        required(&self.email, "Email")?;
        required(&self.password, "Password")?;
        Ok(self.role)
    }
}

// ============================================================================
// Students
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentForm {
    pub name: String,
    pub ktu_id: String,
    pub department: String,
    /// Only offered on the admin page; staff add students to themselves
    pub assigned_staff_id: String,
    pub staff_search: String,
}

impl StudentForm {
    pub fn from_student(student: &Student) -> Self {
        let assigned_staff_id = student
            .assigned_staff
            .as_deref()
            .and_then(|name| fixtures::assignable_staff().into_iter().find(|(_, n, _)| n == name))
            .map(|(id, _, _)| id)
            .unwrap_or_default();
        Self {
            name: student.name.clone(),
            ktu_id: student.register_no.clone(),
            department: student.department.clone(),
            assigned_staff_id,
            staff_search: String::new(),
        }
    }

    /// Staff picker entries matching the search text by name or department
    pub fn staff_matches(&self) -> Vec<(String, String, String)> {
        let needle = self.staff_search.to_lowercase();
        fixtures::assignable_staff()
            .into_iter()
            .filter(|(_, name, dept)| name.to_lowercase().contains(&needle) || dept.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn assigned_staff_name(&self) -> Option<String> {
        fixtures::assignable_staff()
            .into_iter()
            .find(|(id, _, _)| *id == self.assigned_staff_id)
            .map(|(_, name, _)| name)
    }

    pub fn validate(&self, require_staff: bool) -> Result<(), FormError> {
        required(&self.name, "Name")?;
        required(&self.ktu_id, "KTU ID")?;
        required(&self.department, "Department")?;
        if require_staff {
            required(&self.assigned_staff_id, "Assigned staff")?;
            if self.assigned_staff_name().is_none() {
                return Err(FormError::UnknownStaff(self.assigned_staff_id.clone()));
            }
        }
        Ok(())
    }

    /// A new student with no uploads yet
    pub fn to_student(&self, id: String) -> Student {
        let mut student = Student {
            id,
            name: String::new(),
            register_no: String::new(),
            department: String::new(),
            total_certificates: 0,
            total_points: 0,
            last_upload: String::new(),
            assigned_staff: None,
        };
        self.apply_to(&mut student);
        student
    }

    /// Copy the edited fields onto an existing record, keeping its totals.
    /// The assignment only changes when a staff member was picked.
    pub fn apply_to(&self, student: &mut Student) {
        student.name = self.name.trim().to_string();
        student.register_no = self.ktu_id.trim().to_string();
        student.department = self.department.clone();
        if let Some(name) = self.assigned_staff_name() {
            student.assigned_staff = Some(name);
        }
    }
}

// ============================================================================
// Staff
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaffForm {
    pub name: String,
    pub email: String,
    pub department: String,
    pub password: String,
    pub confirm_password: String,
}

impl StaffForm {
    pub fn from_staff(staff: &Staff) -> Self {
        let department = DEPARTMENTS
            .iter()
            .find(|d| d.starts_with(staff.department.as_str()))
            .map(|d| d.to_string())
            .unwrap_or_else(|| staff.department.clone());
        Self {
            name: staff.name.clone(),
            email: staff.email.clone(),
            department,
            ..Self::default()
        }
    }

    pub fn to_staff(&self, id: String) -> Staff {
        let mut staff = Staff {
            id,
            name: String::new(),
            email: String::new(),
            department: String::new(),
            assigned_students: 0,
            total_student_points: 0,
            last_active: String::new(),
        };
        self.apply_to(&mut staff);
        staff
    }

    pub fn apply_to(&self, staff: &mut Staff) {
        staff.name = self.name.trim().to_string();
        staff.email = self.email.trim().to_string();
        staff.department = self.department.clone();
    }

    /// New accounts need a confirmed password; edits leave it untouched
    pub fn validate(&self, new_account: bool) -> Result<(), FormError> {
        required(&self.name, "Name")?;
        required(&self.email, "Email")?;
        valid_email(&self.email)?;
        required(&self.department, "Department")?;
        if new_account {
            required(&self.password, "Password")?;
            if self.password != self.confirm_password {
                return Err(FormError::PasswordMismatch);
            }
        }
        Ok(())
    }
}

// ============================================================================
// Certificate upload
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Pdf,
}

impl FileKind {
    /// Images and PDFs are the only accepted uploads
    pub fn from_name(name: &str) -> Option<Self> {
        let ext = name.rsplit_once('.')?.1.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(FileKind::Pdf),
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" => Some(FileKind::Image),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadEntry {
    pub file_name: String,
    pub kind: FileKind,
    pub title: String,
    pub category: String,
    pub points: String,
}

impl UploadEntry {
    pub fn validate(&self) -> Result<(), FormError> {
        required(&self.title, "Title")?;
        required(&self.category, "Category")?;
        if !CERTIFICATE_CATEGORIES.contains(&self.category.as_str()) {
            return Err(FormError::Required("Category"));
        }
        parse_points(&self.points)?;
        Ok(())
    }
}

fn parse_points(points: &str) -> Result<u32, FormError> {
    points.trim().parse::<u32>().map_err(|_| FormError::InvalidPoints)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadForm {
    pub entries: Vec<UploadEntry>,
}

impl UploadForm {
    /// Queue a picked or dropped file; unsupported types are rejected
    pub fn add_file(&mut self, file_name: &str) -> Result<(), FormError> {
        let kind = FileKind::from_name(file_name).ok_or_else(|| FormError::UnsupportedFile(file_name.to_string()))?;
        self.entries.push(UploadEntry {
            file_name: file_name.to_string(),
            kind,
            title: String::new(),
            category: String::new(),
            points: String::new(),
        });
        Ok(())
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    /// Validate every entry; the first failure is reported with its file name
    pub fn validate(&self) -> Result<(), (String, FormError)> {
        if self.entries.is_empty() {
            return Err((String::new(), FormError::Required("Certificate file")));
        }
        for entry in &self.entries {
            entry.validate().map_err(|e| (entry.file_name.clone(), e))?;
        }
        Ok(())
    }
}

// ============================================================================
// Certificate manual entry
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertificateEdit {
    pub title: String,
    pub category: String,
    pub points: String,
}

impl CertificateEdit {
    pub fn from_certificate(cert: &Certificate) -> Self {
        Self {
            title: cert.title.clone(),
            category: cert.category.clone(),
            points: cert.points.to_string(),
        }
    }

    /// Validate and write the edited details back
    pub fn apply(&self, cert: &mut Certificate) -> Result<(), FormError> {
        required(&self.title, "Title")?;
        required(&self.category, "Category")?;
        let points = parse_points(&self.points)?;
        cert.title = self.title.trim().to_string();
        cert.category = self.category.clone();
        cert.points = points;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_credentials() {
        let mut form = LoginForm::for_role(Role::Staff);
        assert_eq!(form.submit(), Err(FormError::Required("Email")));
        form.email = "a@ktu.edu".to_string();
        form.password = "secret".to_string();
        assert_eq!(form.submit(), Ok(Role::Staff));
    }

    #[test]
    fn test_staff_password_mismatch() {
        let form = StaffForm {
            name: "Prof. New".to_string(),
            email: "new@ktu.edu".to_string(),
            department: DEPARTMENTS[0].to_string(),
            password: "one".to_string(),
            confirm_password: "two".to_string(),
        };
        assert_eq!(form.validate(true), Err(FormError::PasswordMismatch));
        // Editing never checks passwords
        assert_eq!(form.validate(false), Ok(()));
    }

    #[test]
    fn test_staff_email_must_look_like_one() {
        let mut form = StaffForm::from_staff(&fixtures::staff_members()[0]);
        assert_eq!(form.department, "Computer Science and Engineering");
        assert_eq!(form.validate(false), Ok(()));
        form.email = "sarah.wilson".to_string();
        assert!(matches!(form.validate(false), Err(FormError::InvalidEmail(_))));
    }

    #[test]
    fn test_student_form_staff_assignment() {
        let mut form = StudentForm {
            name: "Ann Lee".to_string(),
            ktu_id: "KTU/2021/010".to_string(),
            department: DEPARTMENTS[1].to_string(),
            ..StudentForm::default()
        };
        assert_eq!(form.validate(false), Ok(()));
        assert_eq!(form.validate(true), Err(FormError::Required("Assigned staff")));
        form.assigned_staff_id = "99".to_string();
        assert_eq!(form.validate(true), Err(FormError::UnknownStaff("99".to_string())));
        form.assigned_staff_id = "2".to_string();
        assert_eq!(form.validate(true), Ok(()));
        assert_eq!(form.to_student("9".to_string()).assigned_staff.as_deref(), Some("Prof. Michael Brown"));
    }

    #[test]
    fn test_staff_search_matches_name_or_department() {
        let form = StudentForm { staff_search: "civil".to_string(), ..StudentForm::default() };
        let matches = form.staff_matches();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].1, "Prof. James Wilson");
    }

    #[test]
    fn test_upload_accepts_images_and_pdfs_only() {
        let mut form = UploadForm::default();
        assert!(form.add_file("nss.PDF").is_ok());
        assert!(form.add_file("photo.jpeg").is_ok());
        assert_eq!(form.add_file("notes.docx"), Err(FormError::UnsupportedFile("notes.docx".to_string())));
        assert_eq!(form.entries.len(), 2);
        assert_eq!(form.entries[0].kind, FileKind::Pdf);
    }

    #[test]
    fn test_upload_validation() {
        let mut form = UploadForm::default();
        assert!(form.validate().is_err());
        form.add_file("nss.pdf").ok();
        let (file, err) = form.validate().unwrap_err();
        assert_eq!(file, "nss.pdf");
        assert_eq!(err, FormError::Required("Title"));

        let entry = &mut form.entries[0];
        entry.title = "NSS Camp".to_string();
        entry.category = "NSS/NCC".to_string();
        entry.points = "ten".to_string();
        assert_eq!(form.validate(), Err(("nss.pdf".to_string(), FormError::InvalidPoints)));
        form.entries[0].points = "10".to_string();
        assert_eq!(form.validate(), Ok(()));
        form.remove(0);
        assert!(form.entries.is_empty());
    }

    #[test]
    fn test_certificate_edit_apply() {
        let mut cert = fixtures::student_certificates().remove(0);
        let mut edit = CertificateEdit::from_certificate(&cert);
        edit.points = "20".to_string();
        assert_eq!(edit.apply(&mut cert), Ok(()));
        assert_eq!(cert.points, 20);
        edit.points = "-1".to_string();
        assert_eq!(edit.apply(&mut cert), Err(FormError::InvalidPoints));
        assert_eq!(cert.points, 20);
    }
}
