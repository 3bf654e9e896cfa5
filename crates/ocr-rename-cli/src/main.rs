mod commands;
mod logging;
mod progress;

use std::path::Path;
use std::process;

use clap::{CommandFactory, Parser};
use colored::*;
use commands::{Cli, Commands};
use dotenv::dotenv;
use ocr_rename_core::{
    config, extract_time_token, AppConfig, OcrClient, Recognizer, RenameEngine,
};
use progress::CliReporter;
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let _guard = logging::init_logger("info");

    let args = Cli::parse();

    match args.command {
        Some(Commands::Process { folder }) => {
            let config = load_config_or_exit();
            if let Err(err) = run_process(&config, &folder) {
                error!("Batch aborted: {}", err);
                process::exit(1);
            }
        }
        Some(Commands::Recognize { file }) => {
            let config = load_config_or_exit();
            if let Err(err) = run_recognize(&config, &file) {
                error!("Error: {}", err);
                process::exit(1);
            }
        }
        Some(Commands::Extract { text }) => {
            let token = extract_time_token(&text);
            if token.is_empty() {
                println!("{}", "no time found".yellow());
            } else {
                println!("{}", token);
            }
        }
        Some(Commands::PrintConfig) => {
            let config = load_config_or_exit();
            println!("Configuration: {:#?}", config);
        }
        None => {
            let _ = Cli::command().print_long_help();
        }
    }

    Ok(())
}

fn load_config_or_exit() -> AppConfig {
    match config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    }
}

fn run_process(config: &AppConfig, folder: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let client = OcrClient::new(config.ocr.clone())?;
    let engine = RenameEngine::new(client).with_ignore_patterns(&config.ignore_patterns);
    let reporter = CliReporter::new();
    let result = engine.process(folder, &reporter)?;

    info!(
        "{} images, {} renamed, {} skipped in {:.2}s",
        result.total_images,
        result.renamed,
        result.skipped,
        result.duration.as_secs_f64(),
    );

    println!();
    println!(
        "{} images, {} renamed, {} skipped in {}",
        format!("{}", result.total_images).cyan(),
        format!("{}", result.renamed).green(),
        format!("{}", result.skipped).yellow(),
        format!("{:.2}s", result.duration.as_secs_f64()).green(),
    );
    match &result.output_dir {
        Some(dir) => println!("Renamed copies are in {}", dir.display().to_string().bold()),
        None => println!("{}", "Nothing was copied".yellow()),
    }

    Ok(())
}

fn run_recognize(config: &AppConfig, file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let client = OcrClient::new(config.ocr.clone())?;
    let response = client.recognize(file)?;

    if let Some(summary) = response.error_summary() {
        println!("{} {}", "OCR error:".red(), summary);
    }

    match response.first_text() {
        Some(text) => {
            println!("{}", "Recognized text:".bold());
            println!("{}", text.trim_end());
            let token = extract_time_token(text);
            if token.is_empty() {
                println!("{} {}", "Time token:".bold(), "none".yellow());
            } else {
                println!("{} {}", "Time token:".bold(), token.green());
            }
        }
        None => println!("{}", "No parsed results".yellow()),
    }

    Ok(())
}
