/// The two attendance transitions a supervisor can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckAction {
    In,
    Out,
}

impl CheckAction {
    /// Button / prompt label.
    pub fn label(&self) -> &'static str {
        match self {
            CheckAction::In => "Check In",
            CheckAction::Out => "Check Out",
        }
    }

    /// Operation name written to the internal log table.
    pub fn log_operation(&self) -> &'static str {
        match self {
            CheckAction::In => "check_in",
            CheckAction::Out => "check_out",
        }
    }

    pub fn invalid_code_message(&self) -> &'static str {
        match self {
            CheckAction::In => "Invalid check-in code.",
            CheckAction::Out => "Invalid check-out code.",
        }
    }
}
