pub mod check_ops;
pub mod compile_ops;
pub mod config_ops;
pub mod replay_ops;
