use clap::Parser;
use log::debug;
use weekplan::application::RenderService;
use weekplan::cli::Cli;
use weekplan::error::WeekplanError;
use weekplan::infrastructure::{load_document, load_template, RenderConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(rendered) => {
            println!("{}", rendered);
            std::process::exit(0)
        }
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<String, WeekplanError> {
    // 1. Resolve settings
    let config = RenderConfig::resolve(cli.locale, cli.offset, cli.today.as_deref())?;
    debug!("main: {:?}", config);

    // 2. Load inputs
    let document = load_document(&cli.data)?;
    let template = load_template(&cli.template)?;

    // 3. Render
    RenderService::new()
        .with_today(config.today)
        .render(&template, &document, &config.locale, config.week_offset)
}
