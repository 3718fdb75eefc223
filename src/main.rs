use clap::Parser;
use microbrew::args::Cli;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    microbrew::logging::init_tracing(&config.log);
    tracing::info!(endpoint = %config.source.endpoint, page_size = config.view.page_size, "starting");

    if cli.print {
        let text = microbrew::ui::run_print(&config, cli.query())?;
        print!("{text}");
        return Ok(());
    }

    microbrew::ui::run(&config, cli.query())
}
