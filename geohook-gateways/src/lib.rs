pub mod api_key;
pub mod google_maps;
pub mod json_file_store;
