//! Offline permission conversion subcommands.

use clap::Subcommand;

use crate::app::commands::perms::{self, PermissionFlags};
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum PermsCommands {
    /// Convert a symbolic string (e.g. -rwxr-xr--) to octal
    #[clap(visible_alias = "o")]
    Octal {
        /// Ten-character permission string as shown in listings
        #[arg(allow_hyphen_values = true)]
        symbolic: String,
    },
    /// Compute the octal code of checkbox selections
    #[clap(visible_alias = "c")]
    Checkboxes {
        /// Owner permissions, e.g. rwx
        #[arg(long, allow_hyphen_values = true)]
        user: Option<String>,
        /// Group permissions, e.g. r-x
        #[arg(long, allow_hyphen_values = true)]
        group: Option<String>,
        /// Everyone else's permissions, e.g. r
        #[arg(long, allow_hyphen_values = true)]
        everyone: Option<String>,
    },
    /// Render an octal code as a symbolic string
    #[clap(visible_alias = "s")]
    Symbolic {
        /// Three octal digits, e.g. 754
        code: String,
        /// Entry type flag placed in front (- for files, d for directories)
        #[arg(long, default_value_t = '-')]
        entry_type: char,
    },
}

pub fn run_perms(command: PermsCommands) -> Result<(), AppError> {
    match command {
        PermsCommands::Octal { symbolic } => println!("{}", perms::octal(&symbolic)),
        PermsCommands::Checkboxes { user, group, everyone } => {
            let flags = PermissionFlags { user, group, everyone };
            println!("{}", perms::checkboxes(&flags));
        }
        PermsCommands::Symbolic { code, entry_type } => {
            println!("{}", perms::symbolic(&code, entry_type)?)
        }
    }
    Ok(())
}
