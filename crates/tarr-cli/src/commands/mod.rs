pub mod config_ops;
pub mod search_ops;
pub mod translit_ops;
