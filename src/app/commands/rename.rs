use crate::app::AppContext;
use crate::domain::{AppError, EntryContext, RenameRequest};
use crate::ports::StoreClient;

/// Execute the rename command for one entry.
pub fn execute<C: StoreClient>(
    ctx: &AppContext<C>,
    entry: &EntryContext,
    new_name: &str,
) -> Result<RenameRequest, AppError> {
    let request = entry.rename(new_name)?;
    ctx.client().rename(&request)?;
    Ok(request)
}
