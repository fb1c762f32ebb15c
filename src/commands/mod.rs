mod check;
mod context;
mod init;
mod rules;
mod stats;

pub use check::{check_exit_code, run_check, run_check_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use rules::{execute_rules_action, run_rules, run_rules_impl};
pub use stats::{run_stats, run_stats_impl};
