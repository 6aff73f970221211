use clap::Parser;

use crate::error::{AppError, AppResult};

use super::{CliArgs, Command, TesterArgs};

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<TesterArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = CliArgs::try_parse_from(args).map_err(AppError::from)?;
    match cli.command {
        Command::Run(args) => Ok(args),
    }
}
