//! Command orchestration layer.
//!
//! Each command wraps its body with `log_op_start!` and either
//! `log_op_end!` or `log_op_error!`.

pub mod compare;
pub mod normalize;
pub mod overview;
