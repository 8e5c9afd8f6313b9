pub mod yaml_store;

pub use yaml_store::YamlFileConfigStore;
