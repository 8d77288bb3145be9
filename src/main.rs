use clap::Parser;
use tracing::error;

use country_pop_scraper::{config::Config, logging, output, pipeline, ScraperError};

#[derive(Parser)]
#[command(name = "country-pop-scraper")]
#[command(about = "Scrapes country population figures into a CSV dataset")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: String,
    /// Override the output CSV path from the config file
    #[arg(long)]
    output: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    logging::init_logging();

    let mut config = Config::load(&cli.config)?;
    if let Some(path) = cli.output {
        config.output.path = path;
    }

    match pipeline::run(&config).await {
        Ok((table, reference)) => {
            output::write_csv(&config.output, &table)?;

            // Surface the result table and the full reference list so an
            // operator can audit completeness by hand.
            for (country, population) in &table {
                match population {
                    Some(p) => println!("{}  {}", country, p),
                    None => println!("{}  -", country),
                }
            }
            println!(
                "✅ Wrote {} countries to {}",
                table.len(),
                config.output.path
            );
            println!("Reference countries: {:?}", reference.sorted_names());
            Ok(())
        }
        // The page loaded but carried no marked table: report it and exit
        // without output rather than crash.
        Err(ScraperError::TableNotFound { class }) => {
            error!(
                "No table with class '{}' found on the page; no output written",
                class
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
