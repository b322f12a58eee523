//! Archive browsing subcommands.

use clap::Subcommand;

use crate::app::AppContext;
use crate::app::commands::archive::{self, ArchiveTarget};
use crate::domain::{AppError, DiffOutcome};
use crate::ports::StoreClient;

#[derive(Subcommand)]
pub enum ArchiveCommands {
    /// List archives, oldest first
    #[clap(visible_alias = "ls")]
    List,
    /// Show the diff between an archive and the current tree
    Diff {
        /// Archive id (defaults to the newest archive)
        #[arg(conflicts_with = "back")]
        id: Option<String>,
        /// Step back this many archives from the newest
        #[arg(long)]
        back: Option<usize>,
    },
    /// Restore the tree to an archive
    Restore {
        /// Archive id
        id: String,
    },
}

pub fn run_archive<C: StoreClient>(
    ctx: &AppContext<C>,
    command: ArchiveCommands,
) -> Result<(), AppError> {
    match command {
        ArchiveCommands::List => {
            let selector = archive::list(ctx)?;
            if selector.archives().is_empty() {
                println!("No archives");
            }
            let current = selector.selected_index();
            for (i, entry) in selector.archives().iter().enumerate() {
                let marker = if Some(i) == current { "*" } else { " " };
                let time = entry.time.as_deref().unwrap_or("");
                println!("{} {}  {}  {}", marker, entry.id, entry.archive, time);
            }
        }
        ArchiveCommands::Diff { id, back } => {
            let target = match (id, back) {
                (Some(id), _) => ArchiveTarget::Id(id),
                (None, Some(steps)) => ArchiveTarget::Back(steps),
                (None, None) => ArchiveTarget::Latest,
            };
            let (selected, outcome) = archive::diff(ctx, &target)?;
            match outcome {
                DiffOutcome::Changes(diff) => print!("{}", diff),
                DiffOutcome::Identical => {
                    println!("{} is identical to current tree", selected.archive)
                }
            }
        }
        ArchiveCommands::Restore { id } => {
            let message = archive::restore(ctx, &id)?;
            println!("✅ {}", message);
        }
    }
    Ok(())
}
