pub mod row_origin;
pub mod table_data_domain_error;
