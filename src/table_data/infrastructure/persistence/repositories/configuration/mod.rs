pub mod app_config_connection_string_resolver_repository_impl;
