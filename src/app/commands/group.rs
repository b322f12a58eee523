use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::StoreClient;

/// Create a group.
pub fn add<C: StoreClient>(ctx: &AppContext<C>, name: &str) -> Result<String, AppError> {
    let name = require_name(name)?;
    ctx.client().add_group(&name)?;
    Ok(name)
}

/// Delete a group.
pub fn remove<C: StoreClient>(ctx: &AppContext<C>, name: &str) -> Result<String, AppError> {
    let name = require_name(name)?;
    ctx.client().remove_group(&name)?;
    Ok(name)
}

fn require_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        tracing::error!("no group name entered");
        return Err(AppError::MissingInput("group name"));
    }
    Ok(name.to_string())
}
