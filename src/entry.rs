use clap::{CommandFactory, FromArgMatches};

use g0::args::{CliArgs, Command};
use g0::config::{apply_config, load_config};
use g0::error::{AppError, AppResult, ValidationError};

use crate::app;
use crate::system::logger::init_logging;

pub(crate) fn run() -> AppResult<()> {
    let matches = CliArgs::command().get_matches();
    let cli = CliArgs::from_arg_matches(&matches)?;

    match cli.command {
        Command::Run(mut args) => {
            init_logging(args.verbose, args.no_color);

            if let Some(config) = load_config(args.config.as_deref())?
                && let Some(run_matches) = matches.subcommand_matches("run")
            {
                apply_config(&mut args, run_matches, &config)?;
            }

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .map_err(|source| {
                    AppError::validation(ValidationError::RuntimeBuildFailed { source })
                })?;

            let result = runtime.block_on(app::run_local(args));
            match result.as_ref() {
                Err(err) if err.is_configuration() => {
                    tracing::error!("Load test not started: {}", err);
                }
                Err(err) => tracing::error!("Load test failed: {}", err),
                Ok(()) => {}
            }
            result
        }
    }
}
