/// All user-facing messages of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === VALIDATION MESSAGES ===
    FieldRequired(&'static str),  // field label
    NameCharacters(&'static str), // field label
    NameLength(&'static str),     // field label
    StudentIdFormat,
    MiddleNameTooLong,
    EmailRequired,
    EmailFormat,
    EmailTooLong,
    PhoneRequired,
    PhoneFormat,
    PhonePrefix,
    CourseRequired,
    CourseLength,
    DepartmentInvalid,
    StatusInvalid,
    YearLevelRequired,
    YearLevelInvalid,
    ValidationPassed,

    // === ACCOUNT MESSAGES ===
    CredentialsRequired,
    InvalidCredentials,
    UsernameRequired,
    PasswordRequired,
    AccountNameCharacters(&'static str), // field label
    AccountNameLength(&'static str),     // field label
    AccountMiddleNameTooLong,
    UserCreated,
    UsernameExists,
    DefaultAdminCreated,
    LoggedInAs(String, String), // full name, role
    AdminRequired,
    PromptPassword,
    PromptNewPassword,
    PromptConfirmPassword,
    PasswordMismatch,

    // === STUDENT MESSAGES ===
    StudentAdded,
    StudentUpdated,
    StudentDeleted,
    StudentIdExists,
    StudentNotFound,
    StudentsNotFound,
    StudentsFound(usize),
    ConfirmDeleteStudent(String), // student_id
    DeleteCancelled,

    // === DATABASE MESSAGES ===
    DatabaseError,
    DatabaseInitialized(String), // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
}
