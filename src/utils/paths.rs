/// Whether `program` resolves to an executable on `PATH`.
///
/// Only looks the name up; the binary is never run.
pub fn command_exists(program: &str) -> bool {
    which::which(program).is_ok()
}
