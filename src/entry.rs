use clap::{CommandFactory, FromArgMatches};

use vubench::app::run_suite;
use vubench::args::TesterArgs;
use vubench::config::{apply_config, load_config};
use vubench::error::AppResult;

use crate::logger::init_logging;

pub(crate) fn run() -> AppResult<()> {
    let matches = TesterArgs::command().get_matches();
    let mut args = TesterArgs::from_arg_matches(&matches)?;

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let mut stdout = std::io::stdout();
        run_suite(&args, &mut stdout).await.map(drop)
    })
}
