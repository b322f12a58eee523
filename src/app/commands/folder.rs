use crate::app::AppContext;
use crate::domain::{AppError, OctalPermissionCode, StorePath};
use crate::ports::{CreateFolderRequest, StoreClient};

/// Execute the create-folder command.
///
/// Name and permissions are required; permissions must be a valid octal code.
pub fn execute<C: StoreClient>(
    ctx: &AppContext<C>,
    name: &str,
    permissions: &str,
    path: &str,
) -> Result<CreateFolderRequest, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::MissingInput("folder name"));
    }
    let permissions = permissions.trim();
    if permissions.is_empty() {
        return Err(AppError::MissingInput("folder permissions"));
    }

    let request = CreateFolderRequest {
        name: name.to_string(),
        permissions: OctalPermissionCode::parse(permissions)?,
        path: StorePath::sanitize(path),
    };
    ctx.client().create_folder(&request)?;
    Ok(request)
}
