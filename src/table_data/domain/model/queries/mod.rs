pub mod table_data_request;
