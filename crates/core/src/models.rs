//! Portal entities and their sortable columns

use serde::{Deserialize, Serialize};

use crate::list_view::{FieldKind, FieldValue, Sortable};

// ============================================================================
// Students
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub register_no: String,
    pub department: String,
    pub total_certificates: u32,
    pub total_points: u32,
    /// ISO date of the most recent certificate upload
    pub last_upload: String,
    #[serde(default)]
    pub assigned_staff: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentColumn {
    Name,
    RegisterNo,
    Department,
    TotalCertificates,
    #[default]
    TotalPoints,
    LastUpload,
    AssignedStaff,
}

impl Sortable for Student {
    type Field = StudentColumn;

    fn field_kind(field: &StudentColumn) -> FieldKind {
        match field {
            StudentColumn::TotalCertificates | StudentColumn::TotalPoints => FieldKind::Number,
            StudentColumn::LastUpload => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }

    fn field_value(&self, field: &StudentColumn) -> Option<FieldValue<'_>> {
        Some(match field {
            StudentColumn::Name => FieldValue::text(&self.name),
            StudentColumn::RegisterNo => FieldValue::text(&self.register_no),
            StudentColumn::Department => FieldValue::text(&self.department),
            StudentColumn::TotalCertificates => self.total_certificates.into(),
            StudentColumn::TotalPoints => self.total_points.into(),
            StudentColumn::LastUpload => FieldValue::text(&self.last_upload),
            StudentColumn::AssignedStaff => FieldValue::text(self.assigned_staff.as_deref()?),
        })
    }
}

// ============================================================================
// Staff
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub assigned_students: u32,
    pub total_student_points: u32,
    pub last_active: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaffColumn {
    #[default]
    Name,
    Email,
    Department,
    AssignedStudents,
    TotalStudentPoints,
    LastActive,
}

impl Sortable for Staff {
    type Field = StaffColumn;

    fn field_kind(field: &StaffColumn) -> FieldKind {
        match field {
            StaffColumn::AssignedStudents | StaffColumn::TotalStudentPoints => FieldKind::Number,
            StaffColumn::LastActive => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }

    fn field_value(&self, field: &StaffColumn) -> Option<FieldValue<'_>> {
        Some(match field {
            StaffColumn::Name => FieldValue::text(&self.name),
            StaffColumn::Email => FieldValue::text(&self.email),
            StaffColumn::Department => FieldValue::text(&self.department),
            StaffColumn::AssignedStudents => self.assigned_students.into(),
            StaffColumn::TotalStudentPoints => self.total_student_points.into(),
            StaffColumn::LastActive => FieldValue::text(&self.last_active),
        })
    }
}

// ============================================================================
// Certificates
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CertificateStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Flagged,
}

impl CertificateStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CertificateStatus::Pending => "Pending",
            CertificateStatus::Approved => "Approved",
            CertificateStatus::Rejected => "Rejected",
            CertificateStatus::Flagged => "Flagged",
        }
    }
}

impl std::fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: String,
    pub title: String,
    pub category: String,
    pub upload_date: String,
    pub status: CertificateStatus,
    pub points: u32,
    /// Location of the uploaded file (never fetched)
    pub file: String,
    pub student_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CertificateColumn {
    Title,
    Category,
    #[default]
    UploadDate,
    Status,
    Points,
}

impl Sortable for Certificate {
    type Field = CertificateColumn;

    fn field_kind(field: &CertificateColumn) -> FieldKind {
        match field {
            CertificateColumn::Points => FieldKind::Number,
            CertificateColumn::UploadDate => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }

    fn field_value(&self, field: &CertificateColumn) -> Option<FieldValue<'_>> {
        Some(match field {
            CertificateColumn::Title => FieldValue::text(&self.title),
            CertificateColumn::Category => FieldValue::text(&self.category),
            CertificateColumn::UploadDate => FieldValue::text(&self.upload_date),
            CertificateColumn::Status => FieldValue::text(self.status.label()),
            CertificateColumn::Points => self.points.into(),
        })
    }
}

/// Certificate raised for staff attention
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedCertificate {
    pub id: String,
    pub title: String,
    pub student_name: String,
    pub category: String,
    pub points: u32,
    pub upload_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlaggedColumn {
    Title,
    StudentName,
    Category,
    Points,
    #[default]
    UploadDate,
}

impl Sortable for FlaggedCertificate {
    type Field = FlaggedColumn;

    fn field_kind(field: &FlaggedColumn) -> FieldKind {
        match field {
            FlaggedColumn::Points => FieldKind::Number,
            FlaggedColumn::UploadDate => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }

    fn field_value(&self, field: &FlaggedColumn) -> Option<FieldValue<'_>> {
        Some(match field {
            FlaggedColumn::Title => FieldValue::text(&self.title),
            FlaggedColumn::StudentName => FieldValue::text(&self.student_name),
            FlaggedColumn::Category => FieldValue::text(&self.category),
            FlaggedColumn::Points => self.points.into(),
            FlaggedColumn::UploadDate => FieldValue::text(&self.upload_date),
        })
    }
}

// ============================================================================
// Identity
// ============================================================================

/// Records that pages address by id and show by name
pub trait Entity {
    fn id(&self) -> &str;
    fn display_name(&self) -> &str;
}

impl Entity for Student {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Entity for Staff {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Entity for Certificate {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

impl Entity for FlaggedCertificate {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

// ============================================================================
// Dashboard content
// ============================================================================

/// Headline figure on a dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub subtext: Option<&'static str>,
}

/// Line in a "recent activity" feed
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub student_name: Option<String>,
    pub title: String,
    pub category: Option<String>,
    pub when: String,
    pub points: u32,
    pub status: CertificateStatus,
}

/// Submission missing required details
#[derive(Debug, Clone, PartialEq)]
pub struct IncompleteSubmission {
    pub id: String,
    pub student_name: String,
    pub title: String,
    pub missing: Vec<&'static str>,
    pub upload_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_view::{SortDirection, SortableList};

    #[test]
    fn test_missing_assigned_staff_sorts_last() {
        let mut students = crate::fixtures::admin_students();
        students[1].assigned_staff = None;
        let missing_id = students[1].id.clone();
        let mut list = SortableList::new(students, StudentColumn::Name, SortDirection::Ascending);
        for _ in 0..2 {
            list.sort_by(StudentColumn::AssignedStaff);
            assert_eq!(list.items().last().map(|s| s.id.clone()), Some(missing_id.clone()));
        }
    }

    #[test]
    fn test_status_sorts_by_label() {
        let certs = crate::fixtures::student_certificates();
        let mut list = SortableList::new(certs, CertificateColumn::Title, SortDirection::Ascending);
        let statuses: Vec<_> = list.sort_by(CertificateColumn::Status).iter().map(|c| c.status).collect();
        assert_eq!(statuses.first(), Some(&CertificateStatus::Pending));
        assert_eq!(statuses.last(), Some(&CertificateStatus::Approved));
    }
}
