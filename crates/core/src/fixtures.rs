//! Mock data each page mounts with
//!
//! Every call returns a fresh copy; pages never share their arrays.

use crate::models::*;

#[allow(clippy::too_many_arguments)]
fn student(
    id: &str,
    name: &str,
    register_no: &str,
    department: &str,
    certificates: u32,
    points: u32,
    last_upload: &str,
    staff: Option<&str>,
) -> Student {
    Student {
        id: id.to_string(),
        name: name.to_string(),
        register_no: register_no.to_string(),
        department: department.to_string(),
        total_certificates: certificates,
        total_points: points,
        last_upload: last_upload.to_string(),
        assigned_staff: staff.map(str::to_string),
    }
}

fn staff(id: &str, name: &str, email: &str, department: &str, students: u32, points: u32, last_active: &str) -> Staff {
    Staff {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        assigned_students: students,
        total_student_points: points,
        last_active: last_active.to_string(),
    }
}

fn certificate(id: &str, title: &str, category: &str, date: &str, status: CertificateStatus, points: u32, file: &str) -> Certificate {
    Certificate {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        upload_date: date.to_string(),
        status,
        points,
        file: file.to_string(),
        student_name: "John Doe".to_string(),
    }
}

/// Students listed on the admin "Manage Students" page
pub fn admin_students() -> Vec<Student> {
    vec![
        student("1", "John Doe", "KTU/2021/001", "Computer Science", 5, 45, "2024-03-08", Some("Prof. Sarah Wilson")),
        student("2", "Jane Smith", "KTU/2021/002", "Electronics", 3, 25, "2024-03-07", Some("Prof. Michael Brown")),
        student("3", "Mike Johnson", "KTU/2021/003", "Mechanical", 7, 65, "2024-03-06", Some("Prof. Sarah Wilson")),
    ]
}

/// Students assigned to the signed-in staff member
pub fn staff_students() -> Vec<Student> {
    vec![
        student("1", "John Doe", "KTU/2021/001", "Computer Science", 5, 45, "2024-03-08", None),
        student("2", "Jane Smith", "KTU/2021/002", "Computer Science", 3, 30, "2024-03-07", None),
        student("3", "Mike Johnson", "KTU/2021/003", "Computer Science", 7, 65, "2024-03-06", None),
    ]
}

pub fn staff_members() -> Vec<Staff> {
    vec![
        staff("1", "Prof. Sarah Wilson", "sarah.wilson@ktu.edu", "Computer Science", 15, 450, "2024-03-08"),
        staff("2", "Prof. Michael Brown", "michael.brown@ktu.edu", "Electronics", 12, 380, "2024-03-07"),
        staff("3", "Prof. Emily Davis", "emily.davis@ktu.edu", "Mechanical", 18, 520, "2024-03-08"),
    ]
}

/// Staff offered in the "assign staff" picker of the add-student form
pub fn assignable_staff() -> Vec<(String, String, String)> {
    [
        ("1", "Prof. Sarah Wilson", "Computer Science and Engineering"),
        ("2", "Prof. Michael Brown", "Electronics and Communication Engineering"),
        ("3", "Prof. Emily Davis", "Mechanical Engineering"),
        ("4", "Prof. James Wilson", "Civil Engineering"),
        ("5", "Prof. Lisa Anderson", "Information Technology"),
    ]
    .into_iter()
    .map(|(id, name, dept)| (id.to_string(), name.to_string(), dept.to_string()))
    .collect()
}

/// Certificates uploaded by the signed-in student
pub fn student_certificates() -> Vec<Certificate> {
    vec![
        certificate("1", "NSS Certificate", "NSS/NCC", "2024-03-08", CertificateStatus::Approved, 15, "/path/to/file.pdf"),
        certificate("2", "Technical Workshop", "Technical Events", "2024-03-07", CertificateStatus::Pending, 10, "/path/to/file2.pdf"),
    ]
}

/// Certificates shown on a student's detail page
pub fn certificates_for_student(student_name: &str) -> Vec<Certificate> {
    let mut certs = student_certificates();
    for cert in &mut certs {
        cert.student_name = student_name.to_string();
    }
    certs
}

/// Certificates awaiting a staff decision
pub fn review_queue() -> Vec<Certificate> {
    let mut certs = vec![
        certificate("4", "Sports Meet Certificate", "Sports", "2024-02-18", CertificateStatus::Pending, 10, "/path/to/file4.pdf"),
        certificate("5", "Cultural Fest Volunteer", "Cultural Activities", "2024-03-05", CertificateStatus::Pending, 12, "/path/to/file5.pdf"),
        certificate("2", "Technical Workshop", "Technical Events", "2024-03-07", CertificateStatus::Pending, 10, "/path/to/file2.pdf"),
    ];
    certs[0].student_name = "Jane Smith".to_string();
    certs[1].student_name = "Mike Johnson".to_string();
    certs
}

/// Single certificate opened in a staff or admin preview page
pub fn certificate_by_id(id: &str) -> Option<Certificate> {
    let flagged = flagged_certificates().into_iter().map(|f| {
        let file = format!("/path/to/flagged{}.pdf", f.id);
        let mut cert = certificate(&f.id, &f.title, &f.category, &f.upload_date, CertificateStatus::Flagged, f.points, &file);
        cert.student_name = f.student_name;
        cert
    });
    review_queue().into_iter().chain(flagged).find(|c| c.id == id)
}

pub fn flagged_certificates() -> Vec<FlaggedCertificate> {
    [
        ("1", "NSS Certificate", "John Doe", "NSS/NCC", 15, "2024-03-08"),
        ("2", "Technical Workshop", "Jane Smith", "Technical Events", 10, "2024-03-07"),
        ("3", "Sports Meet", "Mike Johnson", "Sports", 20, "2024-03-06"),
    ]
    .into_iter()
    .map(|(id, title, student_name, category, points, date)| FlaggedCertificate {
        id: id.to_string(),
        title: title.to_string(),
        student_name: student_name.to_string(),
        category: category.to_string(),
        points,
        upload_date: date.to_string(),
    })
    .collect()
}

pub fn incomplete_submissions() -> Vec<IncompleteSubmission> {
    vec![
        IncompleteSubmission {
            id: "7".to_string(),
            student_name: "Jane Smith".to_string(),
            title: "Hackathon Participation".to_string(),
            missing: vec!["category", "points"],
            upload_date: "2024-03-04".to_string(),
        },
        IncompleteSubmission {
            id: "8".to_string(),
            student_name: "Mike Johnson".to_string(),
            title: String::new(),
            missing: vec!["title"],
            upload_date: "2024-03-02".to_string(),
        },
    ]
}

pub fn student_stats() -> Vec<StatCard> {
    vec![
        StatCard { label: "Total Uploads", value: "12".to_string(), subtext: None },
        StatCard { label: "Pending Approval", value: "3".to_string(), subtext: None },
        StatCard { label: "Approved", value: "9".to_string(), subtext: None },
        StatCard { label: "Activity Points", value: "45".to_string(), subtext: None },
    ]
}

pub fn student_recent_activity() -> Vec<ActivityEntry> {
    [
        ("NSS Certificate", CertificateStatus::Approved, "2024-02-20", 15),
        ("Sports Meet Certificate", CertificateStatus::Pending, "2024-02-18", 10),
        ("Workshop Certificate", CertificateStatus::Approved, "2024-02-15", 20),
    ]
    .into_iter()
    .map(|(title, status, when, points)| ActivityEntry {
        student_name: None,
        title: title.to_string(),
        category: None,
        when: when.to_string(),
        points,
        status,
    })
    .collect()
}

/// Approved points per category for the student dashboard chart
pub fn student_points_by_category() -> Vec<(&'static str, u32)> {
    vec![("NSS/NCC", 15), ("Professional Development", 20), ("Sports", 10)]
}

pub fn staff_certificate_stats() -> Vec<StatCard> {
    vec![
        StatCard { label: "Total Certificates", value: "156".to_string(), subtext: Some("+12 this week") },
        StatCard { label: "Flagged Certificates", value: "8".to_string(), subtext: Some("5.1% of total") },
        StatCard { label: "Approved Certificates", value: "132".to_string(), subtext: Some("84.6% approved") },
        StatCard { label: "Pending Review", value: "16".to_string(), subtext: Some("10.3% pending") },
    ]
}

pub fn staff_student_stats() -> Vec<StatCard> {
    vec![
        StatCard { label: "Total Students", value: "245".to_string(), subtext: None },
        StatCard { label: "Students Uploaded", value: "178".to_string(), subtext: Some("72.7% of total") },
        StatCard { label: "Average Points", value: "38.5".to_string(), subtext: Some("per student") },
    ]
}

/// Quick stats on the admin dashboard
pub fn admin_stats() -> Vec<StatCard> {
    vec![
        StatCard { label: "Total Students", value: "250".to_string(), subtext: None },
        StatCard { label: "Staff Members", value: "15".to_string(), subtext: None },
        StatCard { label: "Activity Points Completion", value: "85%".to_string(), subtext: None },
    ]
}

pub fn staff_recent_activity() -> Vec<ActivityEntry> {
    [
        ("John Doe", "Certificate Upload", "NSS/NCC", "2 hours ago", 15, CertificateStatus::Pending),
        ("Jane Smith", "Certificate Flagged", "Sports", "3 hours ago", 10, CertificateStatus::Flagged),
        ("Mike Johnson", "Certificate Approved", "Technical Events", "5 hours ago", 20, CertificateStatus::Approved),
    ]
    .into_iter()
    .map(|(student, title, category, when, points, status)| ActivityEntry {
        student_name: Some(student.to_string()),
        title: title.to_string(),
        category: Some(category.to_string()),
        when: when.to_string(),
        points,
        status,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_flagged_certificate_opens() {
        for flagged in flagged_certificates() {
            let cert = certificate_by_id(&flagged.id).unwrap();
            assert_eq!(cert.title, flagged.title);
        }
        let cert = certificate_by_id("3").unwrap();
        assert_eq!(cert.status, CertificateStatus::Flagged);
        assert_eq!(cert.student_name, "Mike Johnson");
        assert!(certificate_by_id("99").is_none());
    }

    #[test]
    fn test_review_queue_is_pending() {
        assert!(review_queue().iter().all(|c| c.status == CertificateStatus::Pending));
    }

    #[test]
    fn test_fresh_copy_per_call() {
        let mut first = admin_students();
        first.clear();
        assert_eq!(admin_students().len(), 3);
    }
}
