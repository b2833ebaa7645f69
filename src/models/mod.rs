pub mod check_action;
pub mod check_status;
pub mod op;
pub mod operator;
