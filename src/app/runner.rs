use tokio::time::Instant;
use tracing::{info, warn};

use g0::args::{TesterArgs, to_test_config};
use g0::error::AppResult;
use g0::runner::LoadTest;
use g0::shutdown::shutdown_channel;

use crate::system::banner::print_cli_banner;
use crate::system::shutdown_handlers::setup_signal_shutdown_handler;

use super::export::export_json;
use super::progress::setup_progress_indicator;
use super::summary::{print_summary, print_test_start};

/// Runs one load test in the foreground: banner, live progress, summary,
/// and the optional JSON export.
pub(crate) async fn run_local(args: TesterArgs) -> AppResult<()> {
    let config = to_test_config(&args)?;
    let test = LoadTest::new(config)?;

    if !args.no_banner {
        print_cli_banner(args.no_color);
    }
    print_test_start(test.config());
    let target = test.config().duration;

    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    let run_start = Instant::now();
    let handle = test.with_external_shutdown(shutdown_rx).start();

    let (done_tx, done_rx) = shutdown_channel();
    let progress_handle = (!args.no_progress).then(|| {
        setup_progress_indicator(
            handle.subscribe_progress(),
            run_start,
            target,
            args.no_color,
            done_rx,
        )
    });

    let result = handle.wait().await;

    done_tx.send_replace(true);
    if let Some(progress_handle) = progress_handle
        && let Err(err) = progress_handle.await
    {
        warn!("Progress task failed: {}", err);
    }
    shutdown_tx.send_replace(true);
    if let Err(err) = signal_handle.await {
        warn!("Signal handler task failed: {}", err);
    }

    let summary = result?;
    print_summary(&summary);

    if let Some(path) = args.export_json.as_deref() {
        export_json(path, &summary).await?;
        info!("Summary written to {}", path);
    }
    Ok(())
}
