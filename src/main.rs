use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use normcurve::{
    analysis::{has_accepted_extension, parse_reference, plot_workbook_file},
    config::ServerConfig,
    constants::{DEFAULT_REF_MEAN, DEFAULT_REF_STD_DEV},
    init_logging, serve,
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "normcurve")]
#[command(about = "Compare a spreadsheet column against a reference normal curve")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the upload form server
    Serve {
        #[arg(short, long)]
        port: Option<u16>,

        #[arg(short = 'b', long)]
        host: Option<String>,
    },
    /// Render the comparison chart for a local workbook to a PNG file
    Plot {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        column: String,

        #[arg(long, default_value = DEFAULT_REF_MEAN, allow_hyphen_values = true)]
        ref_mean: String,

        #[arg(long, default_value = DEFAULT_REF_STD_DEV, allow_hyphen_values = true)]
        ref_std_dev: String,

        #[arg(short, long, default_value = "comparison.png")]
        output: PathBuf,
    },
}

fn run_plot(
    input: PathBuf,
    column: String,
    ref_mean: String,
    ref_std_dev: String,
    output: PathBuf,
) -> Result<()> {
    let filename = input.to_string_lossy();
    if !has_accepted_extension(&filename) {
        warn!("{} does not have an .xlsx/.xls extension, trying anyway", filename);
    }

    let reference = parse_reference(&ref_mean, &ref_std_dev)?;
    let chart = plot_workbook_file(&input, column.trim(), &reference, &output)
        .with_context(|| format!("Failed to plot column '{}' of {}", column, input.display()))?;

    info!(
        "{} | {}",
        chart.model.data_legend(),
        chart.model.reference_legend()
    );

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse command line arguments
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = ServerConfig::from_env()?.with_overrides(host, port);

            info!("Starting comparison server");
            serve(config).await?;
        }
        Commands::Plot {
            input,
            column,
            ref_mean,
            ref_std_dev,
            output,
        } => {
            tokio::task::spawn_blocking(move || {
                run_plot(input, column, ref_mean, ref_std_dev, output)
            })
            .await??;
        }
    }

    Ok(())
}
