use crate::app::AppContext;
use crate::domain::{AppError, EntryContext, PermissionUpdate};
use crate::ports::StoreClient;

/// Execute the permission update for the entry the context menu was opened on.
///
/// Without an explicit code the entry's current permissions are re-submitted
/// (the pre-filled value of the edit form).
pub fn execute<C: StoreClient>(
    ctx: &AppContext<C>,
    entry: &EntryContext,
    octal: Option<&str>,
    group: Option<&str>,
) -> Result<PermissionUpdate, AppError> {
    let prefill = entry.prefill_octal();
    let code = octal.unwrap_or(prefill.as_str());
    let update = entry.permission_update(code, group)?;

    ctx.client().update_permissions(&update)?;
    Ok(update)
}
