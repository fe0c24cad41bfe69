//! `multilang-gen export`: write the built-in `index.json` as a starting point.

use std::path::Path;

use multilang_gen::{export_index, GenResult};

use crate::output;

pub(crate) fn handle_export_command(target_dir: &Path) -> GenResult<()> {
    let path = export_index(target_dir)?;

    output::success(format!("Exported language index to: {}", path.display()));
    output::hint("Edit this file to customize the list of supported languages.");
    Ok(())
}
