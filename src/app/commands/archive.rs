//! Archive browsing: listing, diffing against the current tree, restoring.

use crate::app::AppContext;
use crate::domain::{AppError, Archive, ArchiveSelector, DiffOutcome};
use crate::ports::StoreClient;

/// Which archive a diff should be computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveTarget {
    /// The newest archive (the selector's starting position).
    Latest,
    /// A number of "previous" steps back from the newest archive.
    Back(usize),
    /// An explicit archive id.
    Id(String),
}

/// Fetch archives into a selector positioned on the newest one.
pub fn list<C: StoreClient>(ctx: &AppContext<C>) -> Result<ArchiveSelector, AppError> {
    Ok(ArchiveSelector::new(ctx.client().list_archives()?))
}

/// Resolve `target` against the selector and diff that archive.
pub fn diff<C: StoreClient>(
    ctx: &AppContext<C>,
    target: &ArchiveTarget,
) -> Result<(Archive, DiffOutcome), AppError> {
    let mut selector = list(ctx)?;
    let archive = select(&mut selector, target)?;
    let outcome = ctx.client().diff(&archive.id)?;
    Ok((archive, outcome))
}

/// Restore the tree to the given archive.
pub fn restore<C: StoreClient>(ctx: &AppContext<C>, archive_id: &str) -> Result<String, AppError> {
    let archive_id = archive_id.trim();
    if archive_id.is_empty() {
        return Err(AppError::MissingInput("archive to restore"));
    }
    let message = ctx.client().restore(archive_id)?;
    tracing::info!(archive = archive_id, "restored archive");
    Ok(message)
}

fn select(selector: &mut ArchiveSelector, target: &ArchiveTarget) -> Result<Archive, AppError> {
    let selected = match target {
        ArchiveTarget::Latest => selector.selected(),
        ArchiveTarget::Back(steps) => {
            for _ in 0..*steps {
                if !selector.previous_enabled() {
                    break;
                }
                selector.previous();
            }
            selector.selected()
        }
        ArchiveTarget::Id(id) => selector.select_id(id),
    };

    selected.cloned().ok_or_else(|| {
        AppError::ArchiveNotFound(match target {
            ArchiveTarget::Id(id) => id.clone(),
            _ => "no archives available".to_string(),
        })
    })
}
