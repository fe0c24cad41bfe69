//! Command handlers for the multilang-gen CLI.

pub(crate) mod export;
pub(crate) mod generate;

pub(crate) use export::handle_export_command;
pub(crate) use generate::handle_gen_command;
