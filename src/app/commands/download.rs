use std::fs;
use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::StoreClient;

/// Download a file and write it to `output`, or to `./<file_id>` when omitted.
pub fn execute<C: StoreClient>(
    ctx: &AppContext<C>,
    file_id: &str,
    output: Option<&Path>,
) -> Result<PathBuf, AppError> {
    let target = output.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(file_id));
    let contents = ctx.client().download(file_id)?;
    fs::write(&target, contents)?;
    Ok(target)
}
