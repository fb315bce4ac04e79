pub mod employee;
pub mod plan_entry;
pub mod report_status;
pub mod role;
pub mod work_entry;
