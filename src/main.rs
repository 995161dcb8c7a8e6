mod jxa;

use clap::{Parser, Subcommand};
use jxa::{ExecutionOptions, JxaConfig, JxaExecutor, build_application_script, escape_str};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use tracing::{Level, debug};
use tracing_subscriber::fmt;

/// CLI arguments
#[derive(Debug, Parser)]
#[command(name = "notes-jxa")]
#[command(about = "Run JavaScript for Automation against Apple Notes via osascript")]
struct Args {
    /// Config file path (default: ~/.notes-jxa/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Escape text for a double-quoted JXA string literal
    Escape {
        /// Text to escape ("-" reads stdin)
        text: String,
    },
    /// Print the Notes application script wrapping a fragment
    Build {
        /// Code fragment ("-" reads stdin)
        fragment: String,
    },
    /// Execute a script and print the result as JSON
    Exec {
        /// Script body ("-" reads stdin)
        script: String,

        /// Kill the interpreter after this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Wrap the script with the Notes application binding first
        #[arg(long)]
        notes: bool,
    },
}

/// Resolve "-" to stdin contents
fn read_arg(value: String) -> io::Result<String> {
    if value != "-" {
        return Ok(value);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Results go to stdout, logs to stderr
    fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let config_path = args.config.unwrap_or_else(JxaConfig::default_path);
    let config = JxaConfig::load(&config_path)?.apply_env();
    debug!(
        path = %config_path.display(),
        shell = %config.shell,
        interpreter = %config.interpreter,
        "Configuration loaded"
    );

    match args.command {
        Cmd::Escape { text } => {
            print!("{}", escape_str(&read_arg(text)?));
        }
        Cmd::Build { fragment } => {
            println!("{}", build_application_script(&read_arg(fragment)?));
        }
        Cmd::Exec {
            script,
            timeout_ms,
            notes,
        } => {
            let script = read_arg(script)?;
            let options = timeout_ms.map(ExecutionOptions::with_timeout_ms);
            let executor = JxaExecutor::new(config);

            let result = if notes {
                executor.execute_in_notes(&script, options).await
            } else {
                executor.execute(&script, options).await
            };

            println!("{}", serde_json::to_string_pretty(&result)?);
            if !result.success {
                process::exit(1);
            }
        }
    }

    Ok(())
}
