mod environment_test;
mod error_mapping_test;
mod settings_test;
