use clap::{CommandFactory, FromArgMatches};

use loadprobe::args::ProbeArgs;
use loadprobe::config::{apply_config, load_config};
use loadprobe::error::AppResult;
use loadprobe::http::{ProbePlan, run_probe};
use loadprobe::summary::duration_line;

pub(crate) fn run() -> AppResult<()> {
    let matches = ProbeArgs::command().get_matches();
    let mut args = ProbeArgs::from_arg_matches(&matches)?;

    let loaded = load_config(args.config.as_deref())?;
    if let Some((_, config)) = loaded.as_ref() {
        apply_config(&mut args, &matches, config)?;
    }

    // The file may turn on verbose, so the subscriber goes in after it is applied.
    crate::logger::init_logging(args.verbose);
    if let Some((path, _)) = loaded.as_ref() {
        tracing::debug!("Using config file {}", path.display());
    }

    let plan = ProbePlan::fixed(args.workers, args.iterations)?;
    tracing::debug!("Expecting {} requests in total", plan.expected_requests());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let report = runtime.block_on(run_probe(&plan))?;
    println!("{}", duration_line(&report));
    Ok(())
}
