/// Compare a supervisor-entered code with the code expected for an op/action.
///
/// Both sides are trimmed; the comparison is exact and case-sensitive.
pub fn validate(entered: &str, expected: &str) -> bool {
    entered.trim() == expected.trim()
}
