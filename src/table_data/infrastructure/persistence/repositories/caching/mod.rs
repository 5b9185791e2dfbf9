pub mod moka_table_data_cache_repository_impl;
