//! Dashboard command.

use std::io::IsTerminal;

use chrono::Local;

use crate::app::AppContext;
use crate::app::commands::stats;
use crate::domain::AppError;
use crate::ports::StoreClient;

pub fn run_stats<C>(ctx: &AppContext<C>, watch: bool, count: Option<u64>) -> Result<(), AppError>
where
    C: StoreClient + Send + Sync + 'static,
{
    let color = std::io::stdout().is_terminal();

    if !watch && count.is_none() {
        print!("{}", stats::snapshot(ctx)?.render(color));
        return Ok(());
    }

    stats::watch(ctx, count, move |snapshot| {
        println!("--- {} ---", Local::now().format("%H:%M:%S"));
        print!("{}", snapshot.render(color));
    })
    .join();
    Ok(())
}
