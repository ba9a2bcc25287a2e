use std::ffi::OsString;
use std::sync::Arc;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::error;

use volley::args::{OutputFormat, TesterArgs};
use volley::config::{apply_config, default_config_path, load_config};
use volley::error::AppResult;
use volley::http::ReqwestClient;
use volley::run::{RunConfig, RunController};

use crate::app::{print_banner, print_report, spawn_progress_printer};

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = match parse_args()? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    crate::logger::init_logging(args.verbose, args.no_color);

    if let Err(err) = merge_config(&mut args, &matches) {
        error!("Failed to load config: {}", err);
        return Err(err);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args))
}

fn parse_args() -> AppResult<Option<(TesterArgs, ArgMatches)>> {
    let mut cmd = TesterArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = TesterArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty || std::env::var_os("VOLLEY_URL").is_some() {
        return false;
    }

    default_config_path().is_none()
}

fn merge_config(args: &mut TesterArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(args, matches, &config)?;
    }
    Ok(())
}

async fn run_async(args: TesterArgs) -> AppResult<()> {
    let config = RunConfig::from_args(&args)?;
    let client = Arc::new(ReqwestClient::new(config.timeout().as_duration())?);
    if args.output_format == OutputFormat::Text {
        print_banner(&config);
    }
    let controller = RunController::new(config, client);

    let progress = (!args.no_progress).then(|| {
        spawn_progress_printer(
            controller.subscribe_progress(),
            controller.config().total_requests().get(),
            args.no_color,
        )
    });

    let report = controller.run().await?;

    if let Some(progress) = progress
        && let Err(err) = progress.await
    {
        error!("Progress printer failed: {}", err);
    }

    print_report(&report, args.output_format)?;
    Ok(())
}
