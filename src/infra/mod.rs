// Infrastructure adapters for the application ports

pub mod csv_row_source;
pub mod id_generator;
pub mod json_output_adapter;
pub mod taxonomy_loader;
