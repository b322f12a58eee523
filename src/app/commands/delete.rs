use crate::app::AppContext;
use crate::domain::{AppError, DeleteSelection, StorePath};
use crate::ports::{DeleteRequest, StoreClient};

/// Execute the bulk delete for the checked entries of one directory.
pub fn execute<C: StoreClient>(
    ctx: &AppContext<C>,
    selection: &DeleteSelection,
    path: &str,
) -> Result<DeleteRequest, AppError> {
    let request =
        DeleteRequest { files: selection.require_selected()?, path: StorePath::sanitize(path) };
    ctx.client().delete_multiple(&request)?;
    Ok(request)
}
