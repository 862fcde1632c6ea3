//! # logweave CLI
//!
//! Command-line interface for the logweave library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use logweave::batch::{ERROR_LOG_NAME, run_batch};
use logweave::cli::Args;
use logweave::core::filter::FilterConfig;
use logweave::discover::discover_json_files;
use logweave::progress::ConsoleProgress;
use logweave::task::TaskContext;
use logweave::theme::load_theme;
use logweave::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // Build filter configuration; bad dates abort before any work starts
    let filter = build_filter(&args)?;

    // Theme, with fallback when the override is unreadable
    let css = load_theme(args.css_file.as_deref());
    if let Some(ref css_file) = args.css_file {
        if !css_file.is_file() {
            println!(
                "⚠️  Could not read {}, using the default theme",
                css_file.display()
            );
        }
    }

    // Setup failures here abort the whole run
    let files = discover_json_files(&args.input_dir)?;
    let output_dir = args.input_dir.join("output_logs");
    fs::create_dir_all(&output_dir)?;

    // Print header
    println!("📦 logweave v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:    {}", args.input_dir.display());
    println!("💾 Output:   {}", output_dir.display());
    println!("🧵 Threads:  {}", args.threads);

    if let Some(ref author) = args.author {
        println!("👤 Author:   {}", author);
    }
    if let Some(ref keyword) = args.keyword {
        println!("🔍 Keyword:  {}", keyword);
    }
    if let Some(ref start) = args.start_date {
        println!("📅 From:     {}", start);
    }
    if let Some(ref end) = args.end_date {
        println!("📅 To:       {}", end);
    }

    println!();
    println!("⏳ Processing {} JSON files...", files.len());

    let ctx = TaskContext {
        filter,
        css,
        output_dir: output_dir.clone(),
    };
    let observer = ConsoleProgress::new(files.len());
    let summary = run_batch(&files, &ctx, args.threads, &observer)?;

    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Output files saved to {}", output_dir.display());
    println!();
    println!("📊 Summary:");
    println!("   Converted:  {} files", summary.converted());
    if summary.failed > 0 {
        println!(
            "   Failed:     {} files (see {})",
            summary.failed,
            output_dir.join(ERROR_LOG_NAME).display()
        );
    }
    println!("   Total time: {:.2}s", total_time.as_secs_f64());

    Ok(())
}

/// Builds the shared filter configuration from the parsed arguments.
fn build_filter(args: &Args) -> Result<FilterConfig> {
    let mut filter = FilterConfig::new();

    if let Some(ref author) = args.author {
        filter = filter.with_author(author);
    }
    if let Some(ref keyword) = args.keyword {
        filter = filter.with_keyword(keyword);
    }
    if let Some(ref start) = args.start_date {
        filter = filter.with_start_date(start)?;
    }
    if let Some(ref end) = args.end_date {
        filter = filter.with_end_date(end)?;
    }

    Ok(filter)
}
