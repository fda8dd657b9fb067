mod assembler;
mod config;
mod enricher;
mod fetcher;
mod importer;
mod model;
mod normalizer;
mod pipeline;
mod storage;
mod vocab;

use std::path::Path;
use std::process::ExitCode;

use config::load_config;
use fetcher::MomoApi;
use pipeline::Pipeline;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("crawl") | None => {
            let page_size = match args.get(2) {
                Some(raw) => match raw.parse::<u32>() {
                    Ok(n) if n >= 1 => n,
                    _ => {
                        error!("pageSize must be a positive integer, got {raw:?}");
                        return ExitCode::FAILURE;
                    }
                },
                None => config.page_size,
            };
            crawl(page_size, Path::new(&config.output_path)).await
        }
        Some("import") => match (args.get(2), args.get(3)) {
            (Some(input), Some(output)) => import(Path::new(input), Path::new(output)),
            _ => usage(),
        },
        Some(_) => usage(),
    }
}

async fn crawl(page_size: u32, output: &Path) -> ExitCode {
    info!("🚀 Crawling thổ địa listings (pageSize = {page_size})...");
    let pipeline = Pipeline::new(MomoApi::new());

    let records = match pipeline.run(page_size).await {
        Ok(records) => records,
        Err(e) => {
            error!("Crawl failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = storage::write_records(output, &records) {
        error!("Output write failed: {e}");
        return ExitCode::FAILURE;
    }
    info!("Done: {} records", records.len());
    ExitCode::SUCCESS
}

fn import(input: &Path, output: &Path) -> ExitCode {
    info!("Importing exported table {}...", input.display());
    match importer::process_table(input, output) {
        Ok(count) => {
            info!("Done: {count} records");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Import failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn usage() -> ExitCode {
    eprintln!("Usage: thodia-crawler crawl [pageSize]");
    eprintln!("       thodia-crawler import <table.json> <output.json>");
    ExitCode::FAILURE
}
