pub mod attendance;
pub mod category;
pub mod kpi;
pub mod lead;
pub mod report;
pub mod task;
pub mod time_entry;
