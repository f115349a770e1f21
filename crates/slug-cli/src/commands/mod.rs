pub mod config_ops;
pub mod slug_ops;
