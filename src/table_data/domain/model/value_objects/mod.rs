pub mod column_value;
pub mod elapsed_time;
