use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sort_compare::{
    bubble_sort, format_timing, generate_array, insertion_sort, render_comparison, time_sort,
    Config, BUBBLE_LABEL, INSERTION_LABEL,
};

/// Compare bubble sort and insertion sort on random data
#[derive(Parser, Debug)]
#[command(name = "sort_compare")]
#[command(about = "Time two sorting algorithms and chart the comparison", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the web UI (port 0 picks an ephemeral port)
    Serve {
        /// Path to TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Host to bind (overrides the configuration)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides the configuration)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run one comparison cycle headlessly and write the chart to a file
    Bench {
        /// Number of elements to sort
        #[arg(short, long, default_value_t = 1000)]
        elements: usize,

        /// Output path for the chart PNG
        #[arg(short, long, default_value = "sort_times.png")]
        output: PathBuf,

        /// Path to TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(&path)
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };
    config.validate().map_err(|e| anyhow::anyhow!(e))?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, host, port } => {
            let mut config = load_config(config)?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            sort_compare::server::serve(config).await
        }

        Commands::Bench {
            elements,
            output,
            config,
        } => {
            let config = load_config(config)?;
            if elements == 0 {
                anyhow::bail!("element count must be positive");
            }

            println!("Generating {} random integers...", elements);
            let input = generate_array(elements, config.array.value_low, config.array.value_high);

            let bubble = time_sort(BUBBLE_LABEL, &input, bubble_sort);
            println!("{}", format_timing(&bubble));

            let insertion = time_sort(INSERTION_LABEL, &input, insertion_sort);
            println!("{}", format_timing(&insertion));

            render_comparison(
                &[bubble, insertion],
                &output,
                (config.chart.width, config.chart.height),
            )
            .map_err(|e| anyhow::anyhow!("{}", e))?;
            println!("\n✓ Chart saved to: {}", output.display());
            Ok(())
        }
    }
}
