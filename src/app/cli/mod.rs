//! CLI Adapter.

mod archive;
mod group;
mod perms;
mod stats;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use dialoguer::Confirm;

use crate::app::commands::perms::PermissionFlags;
use crate::app::commands::upload::UploadOptions;
use crate::app::commands::{chmod, delete, download, folder, list, rename, upload};
use crate::app::{AppContext, api, logging};
use crate::domain::size::QUOTA_PRESETS;
use crate::domain::{
    AppError, ByteSize, CheckboxPermissionSet, DeleteSelection, FileEntry, OctalPermissionCode,
    symbolic_to_octal,
};
use crate::services::HttpStoreClient;

/// Permissions used when an upload names none: owner rwx, group read.
const DEFAULT_UPLOAD_PERMISSIONS: &str = "740";

#[derive(Parser)]
#[command(name = "storectl")]
#[command(version)]
#[command(about = "Manage files, permissions and archives of a self-hosted file store", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to $STORECTL_CONFIG or ~/.config/storectl/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Server URL, overriding the config file
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert between symbolic, checkbox and octal permissions
    #[clap(visible_alias = "p")]
    Perms {
        #[command(subcommand)]
        command: perms::PermsCommands,
    },
    /// List a directory with ids and permissions
    #[clap(visible_alias = "list")]
    Ls {
        /// Directory to list
        #[arg(default_value = "/")]
        path: String,
    },
    /// Upload a file with group and permissions
    #[clap(visible_alias = "up")]
    Upload {
        /// Local file to upload
        file: PathBuf,
        /// Group assigned to the file
        #[arg(long, default_value = "")]
        group: String,
        /// Owner permissions, e.g. rwx
        #[arg(long, allow_hyphen_values = true)]
        user: Option<String>,
        /// Group permissions, e.g. r-x
        #[arg(long, allow_hyphen_values = true)]
        group_perms: Option<String>,
        /// Everyone else's permissions, e.g. r
        #[arg(long, allow_hyphen_values = true)]
        everyone: Option<String>,
        /// Destination directory
        #[arg(long, default_value = "/")]
        path: String,
        /// Refuse files larger than this (e.g. 100M, 512M, 1G, 5G)
        #[arg(long, value_parser = parse_max_size)]
        max_size: Option<ByteSize>,
    },
    /// Change permissions of a stored entry
    Chmod {
        /// Entry id or name
        entry: String,
        /// Octal code (754) or symbolic string (-rwxr-xr--); keeps the
        /// current permissions when omitted
        #[arg(allow_hyphen_values = true, required_unless_present = "group")]
        mode: Option<String>,
        /// New group (keeps the current one when omitted)
        #[arg(long)]
        group: Option<String>,
        /// Directory containing the entry
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Rename a stored entry
    #[clap(visible_alias = "mv")]
    Rename {
        /// Entry id or name
        entry: String,
        /// New name
        new_name: String,
        /// Directory containing the entry
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Delete entries of a directory
    Rm {
        /// Names of the entries to delete
        #[arg(required = true)]
        names: Vec<String>,
        /// Directory containing the entries
        #[arg(long, default_value = "/")]
        path: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Create a directory
    Mkdir {
        /// Folder name
        name: String,
        /// Octal permissions of the new folder
        #[arg(long)]
        perms: String,
        /// Parent directory
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Administer groups
    #[clap(visible_alias = "g")]
    Group {
        #[command(subcommand)]
        command: group::GroupCommands,
    },
    /// Browse, diff and restore archives
    #[clap(visible_alias = "a")]
    Archive {
        #[command(subcommand)]
        command: archive::ArchiveCommands,
    },
    /// Download a stored file
    #[clap(visible_alias = "dl")]
    Download {
        /// File id
        file_id: String,
        /// Output path (defaults to the file id in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show system performance figures
    Stats {
        /// Keep refreshing at the configured interval
        #[arg(short, long)]
        watch: bool,
        /// Stop after this many refreshes
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
        count: Option<u64>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = dispatch(cli);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<(), AppError> {
    let Cli { config, base_url, command, .. } = cli;
    let connect = || api::connect(config.as_deref(), base_url.as_deref());

    match command {
        Commands::Perms { command } => perms::run_perms(command),
        Commands::Ls { path } => run_ls(&connect()?, &path),
        Commands::Upload { file, group, user, group_perms, everyone, path, max_size } => {
            let flags = PermissionFlags { user, group: group_perms, everyone };
            let options = UploadOptions {
                file,
                group,
                permissions: upload_permissions(&flags),
                path,
                max_size,
            };
            run_upload(&connect()?, &options)
        }
        Commands::Chmod { entry, mode, group, path } => {
            run_chmod(&connect()?, &entry, mode.as_deref(), group.as_deref(), &path)
        }
        Commands::Rename { entry, new_name, path } => {
            let ctx = connect()?;
            let entry = list::resolve(&ctx, &path, &entry)?;
            let request = rename::execute(&ctx, &entry, &new_name)?;
            println!("✅ Renamed {} to {}", entry.name, request.new_name);
            Ok(())
        }
        Commands::Rm { names, path, yes } => run_rm(&connect()?, names, &path, yes),
        Commands::Mkdir { name, perms, path } => {
            let request = folder::execute(&connect()?, &name, &perms, &path)?;
            println!(
                "✅ Created folder {} ({})",
                request.path.join(&request.name),
                request.permissions
            );
            Ok(())
        }
        Commands::Group { command } => group::run_group(&connect()?, command),
        Commands::Archive { command } => archive::run_archive(&connect()?, command),
        Commands::Download { file_id, output } => {
            let written = download::execute(&connect()?, &file_id, output.as_deref())?;
            println!("✅ Saved {}", written.display());
            Ok(())
        }
        Commands::Stats { watch, count } => stats::run_stats(&connect()?, watch, count),
    }
}

fn upload_permissions(flags: &PermissionFlags) -> CheckboxPermissionSet {
    if flags.is_empty() {
        CheckboxPermissionSet::from_octal(DEFAULT_UPLOAD_PERMISSIONS)
    } else {
        flags.to_checkboxes()
    }
}

fn run_upload(ctx: &AppContext<HttpStoreClient>, options: &UploadOptions) -> Result<(), AppError> {
    let response = upload::execute(ctx, options)?;
    match response.size.map(ByteSize::from_bytes) {
        Some(size) => println!(
            "✅ Uploaded {} ({}, {})",
            response.filename,
            options.permissions.to_octal(),
            size
        ),
        None => println!("✅ Uploaded {} ({})", response.filename, options.permissions.to_octal()),
    }
    Ok(())
}

fn parse_max_size(text: &str) -> Result<ByteSize, String> {
    ByteSize::parse(text).map_err(|e| format!("{} (quota presets: {})", e, QUOTA_PRESETS.join(", ")))
}

fn run_ls(ctx: &AppContext<HttpStoreClient>, path: &str) -> Result<(), AppError> {
    let entries = list::execute(ctx, path)?;
    if entries.is_empty() {
        println!("No entries");
    }
    for entry in &entries {
        println!("{}", listing_row(entry));
    }
    Ok(())
}

fn listing_row(entry: &FileEntry) -> String {
    let size = entry.size.map(|s| ByteSize::from_bytes(s).to_string()).unwrap_or_default();
    format!(
        "{} {:<10} {:<10} {:>8} {:>6}  {}",
        entry.symbolic(),
        entry.owner.as_deref().unwrap_or("-"),
        entry.group.as_deref().filter(|g| !g.is_empty()).unwrap_or("-"),
        size,
        entry.id,
        entry.name
    )
}

/// Octal code for a typed mode. Digits must be a valid code; anything else
/// is read as a listing string and must cover all three principals.
fn mode_to_octal(mode: &str) -> Result<OctalPermissionCode, AppError> {
    if mode.starts_with(|c: char| c.is_ascii_digit()) {
        return OctalPermissionCode::parse(mode);
    }
    let code = symbolic_to_octal(mode);
    if !code.is_complete() {
        return Err(AppError::InvalidPermissionCode(mode.to_string()));
    }
    Ok(code)
}

fn run_chmod(
    ctx: &AppContext<HttpStoreClient>,
    key: &str,
    mode: Option<&str>,
    group: Option<&str>,
    path: &str,
) -> Result<(), AppError> {
    let octal = mode.map(mode_to_octal).transpose()?;
    let entry = list::resolve(ctx, path, key)?;

    let update = chmod::execute(ctx, &entry, octal.as_ref().map(|c| c.as_str()), group)?;
    let flag = entry.symbolic_permissions.chars().next().unwrap_or('-');
    let symbolic = update.permissions.to_checkboxes().to_symbolic(flag);
    println!("✅ Set permissions of {} to {} ({})", entry.name, update.permissions, symbolic);
    Ok(())
}

fn run_rm(
    ctx: &AppContext<HttpStoreClient>,
    names: Vec<String>,
    path: &str,
    yes: bool,
) -> Result<(), AppError> {
    let mut selection = DeleteSelection::new(names);
    selection.select_all(true);

    if !yes && !confirm(&selection.confirmation_prompt())? {
        println!("Cancelled");
        return Ok(());
    }

    let request = delete::execute(ctx, &selection, path)?;
    println!("✅ Deleted {} item(s) from {}", request.files.len(), request.path);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| AppError::Io(std::io::Error::other(e.to_string())))
}
