use thiserror::Error;

/// Failures of a user-triggered action. `Display` is the text shown in the
/// panel's status line.
#[derive(Debug, Error)]
pub enum AttendanceError {
    #[error("Enter your team roster first.")]
    EmptyRoster,

    #[error("Run this on a meeting page ({host}).")]
    WrongPage { host: String },

    #[error("Could not read the participant list. Open the People panel in Google Meet.")]
    NoResponse,

    #[error("Failed to save the team roster.")]
    Persistence(#[source] anyhow::Error),

    #[error("Something went wrong while checking attendance.")]
    Unexpected(#[source] anyhow::Error),
}

impl From<AttendanceError> for String {
    fn from(err: AttendanceError) -> Self {
        err.to_string()
    }
}
