mod audit;
mod context;
mod init;
mod templates;

pub use audit::{run_audit, run_audit_impl, run_uv, run_uv_impl};
pub use context::{color_choice_to_mode, load_rules, write_output};
pub use init::{run_init, run_init_impl};
pub use templates::{list_templates, run_templates};
