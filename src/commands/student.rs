use super::open_storage;
use crate::{
    db::{db::Storage, students::Students, users::Users},
    libs::{
        messages::Message,
        outcome::Outcome,
        student::{Department, SortColumn, SortDirection, Student, StudentRecord},
        user::AuthenticatedUser,
        validation::{sanitize, validate},
        view::View,
    },
    msg_bail_anyhow, msg_error, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Password};

#[derive(Debug, Args)]
pub struct StudentArgs {
    #[command(subcommand)]
    command: StudentCommand,
}

#[derive(Debug, Args)]
struct SortArgs {
    /// Sort key: id, student_id, name, course, department, year_level, status
    #[arg(long)]
    sort: Option<String>,
    /// Sort order: asc or desc
    #[arg(long)]
    order: Option<String>,
    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct StudentFields {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    middle_name: Option<String>,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    /// Mobile number, 09XX-XXX-XXXX
    #[arg(long)]
    phone: String,
    #[arg(long)]
    course: String,
    /// Full college name or its abbreviation (CICS, COE, CAFAD, CET)
    #[arg(long)]
    department: String,
    /// 1st Year, 2nd Year, 3rd Year or 4th Year
    #[arg(long)]
    year_level: String,
    /// Defaults to Enrolled
    #[arg(long)]
    status: Option<String>,
}

impl StudentFields {
    fn into_record(self, student_id: Option<String>) -> StudentRecord {
        let department = match Department::from_abbreviation(self.department.trim()) {
            Some(department) => department.as_str().to_string(),
            None => self.department,
        };

        StudentRecord {
            student_id,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            course: self.course,
            department,
            year_level: self.year_level,
            status: self.status,
        }
    }
}

#[derive(Debug, Subcommand)]
enum StudentCommand {
    /// List all students
    List {
        #[command(flatten)]
        sort: SortArgs,
    },
    /// Search students by any field or department abbreviation
    Search {
        /// Search term
        term: String,
        #[command(flatten)]
        sort: SortArgs,
    },
    /// Add a student (admin only)
    Add {
        /// Student ID, YY-NNNNN
        student_id: String,
        #[command(flatten)]
        fields: StudentFields,
        /// Admin username performing the change
        #[arg(long = "as")]
        actor: String,
    },
    /// Update a student's details (admin only)
    Update {
        /// Student ID of the record to change
        student_id: String,
        #[command(flatten)]
        fields: StudentFields,
        /// Admin username performing the change
        #[arg(long = "as")]
        actor: String,
    },
    /// Delete a student (admin only)
    Delete {
        /// Student ID of the record to delete
        student_id: String,
        /// Admin username performing the change
        #[arg(long = "as")]
        actor: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: StudentArgs) -> Result<()> {
    let storage = open_storage()?;
    let students = Students::new(&storage);

    match args.command {
        StudentCommand::List { sort } => {
            let rows = students.get_all(resolve_column(&sort), resolve_direction(&sort))?;
            show(&rows, sort.json)
        }
        StudentCommand::Search { term, sort } => {
            let rows = students.search(&term, resolve_column(&sort), resolve_direction(&sort))?;
            show(&rows, sort.json)
        }
        StudentCommand::Add { student_id, fields, actor } => {
            authorize(&storage, &actor)?;
            let record = fields.into_record(Some(student_id));
            let result = validate(&record, false);
            if !result.valid {
                msg_error!(result.message);
                return Ok(());
            }
            report(students.add(&sanitize(&record)));
            Ok(())
        }
        StudentCommand::Update { student_id, fields, actor } => {
            authorize(&storage, &actor)?;
            let record = fields.into_record(None);
            let result = validate(&record, true);
            if !result.valid {
                msg_error!(result.message);
                return Ok(());
            }
            report(students.update(&student_id, &sanitize(&record)));
            Ok(())
        }
        StudentCommand::Delete { student_id, actor, yes } => {
            authorize(&storage, &actor)?;
            let confirmed = yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeleteStudent(student_id.clone()).to_string())
                    .default(false)
                    .interact()?;
            if !confirmed {
                msg_warning!(Message::DeleteCancelled);
                return Ok(());
            }
            report(students.delete(&student_id));
            Ok(())
        }
    }
}

fn resolve_column(sort: &SortArgs) -> SortColumn {
    SortColumn::resolve(sort.sort.as_deref())
}

fn resolve_direction(sort: &SortArgs) -> SortDirection {
    SortDirection::resolve(sort.order.as_deref())
}

/// Prompts for the actor's password and requires the admin role.
fn authorize(storage: &Storage, username: &str) -> Result<AuthenticatedUser> {
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .allow_empty_password(true)
        .interact()?;

    let login = Users::new(storage).verify_login(username, &password);
    let Some(user) = login.user else {
        let message = login.message.unwrap_or_else(|| Message::InvalidCredentials.to_string());
        msg_bail_anyhow!(message);
    };
    if !user.role.is_admin() {
        msg_bail_anyhow!(Message::AdminRequired);
    }
    Ok(user)
}

fn show(rows: &[Student], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
        return Ok(());
    }
    if rows.is_empty() {
        msg_info!(Message::StudentsNotFound);
        return Ok(());
    }
    View::students(rows);
    msg_info!(Message::StudentsFound(rows.len()));
    Ok(())
}

fn report(outcome: Outcome) {
    if outcome.success {
        msg_success!(outcome.message);
    } else {
        msg_error!(outcome.message);
    }
}
