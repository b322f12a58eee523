//! Group administration subcommands.

use clap::Subcommand;

use crate::app::AppContext;
use crate::app::commands::group;
use crate::domain::AppError;
use crate::ports::StoreClient;

#[derive(Subcommand)]
pub enum GroupCommands {
    /// Create a group
    Add {
        /// Group name
        name: String,
    },
    /// Delete a group
    #[clap(visible_alias = "rm")]
    Remove {
        /// Group name
        name: String,
    },
}

pub fn run_group<C: StoreClient>(ctx: &AppContext<C>, command: GroupCommands) -> Result<(), AppError> {
    match command {
        GroupCommands::Add { name } => {
            let name = group::add(ctx, &name)?;
            println!("✅ Added group {}", name);
        }
        GroupCommands::Remove { name } => {
            let name = group::remove(ctx, &name)?;
            println!("✅ Removed group {}", name);
        }
    }
    Ok(())
}
