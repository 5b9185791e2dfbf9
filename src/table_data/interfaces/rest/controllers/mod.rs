pub mod table_data_rest_controller;
