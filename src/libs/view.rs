use super::student::Student;
use super::user::AuthenticatedUser;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints students as a table, one row each.
    pub fn students(students: &[Student]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "STUDENT ID", "NAME", "EMAIL", "PHONE", "COURSE", "DEPARTMENT", "YEAR", "STATUS", "ENROLLED"]);
        for student in students {
            table.add_row(row![
                student.id,
                student.student_id,
                student.display_name(),
                student.email.as_deref().unwrap_or("-"),
                student.phone.as_deref().unwrap_or("-"),
                student.course,
                student.department.as_deref().unwrap_or("-"),
                student.year_level.as_deref().unwrap_or("-"),
                student.status,
                student.enrollment_date.format("%Y-%m-%d")
            ]);
        }
        table.printstd();
    }

    pub fn user(user: &AuthenticatedUser) {
        let mut table = Table::new();

        table.add_row(row!["USER ID", "USERNAME", "FULL NAME", "ROLE"]);
        table.add_row(row![user.user_id, user.username, user.full_name, user.role]);
        table.printstd();
    }
}
