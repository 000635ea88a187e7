pub mod cli;
pub mod config;
pub mod criteria;
pub mod dataset;
pub mod editor;
pub mod engine;
pub mod expression;
pub mod session;
pub mod view;

use crate::expression::{FilterExpression, print_criteria_warnings, to_criteria};
use anyhow::{Context, anyhow};
use std::collections::BTreeSet;
use std::io::BufReader;

pub use cli::{Cli, ColorMode, Commands, OutputFormat, cli_parse};
pub use criteria::{DateRange, FilterCriteria, PriceRange};
pub use dataset::{Record, load_records};
pub use editor::{DraftField, FilterEditor};
pub use engine::FilterEngine;
pub use session::Session;

/// Build a FilterCriteria from the --filter expression
fn build_criteria(filter_expr: Option<&str>) -> anyhow::Result<FilterCriteria> {
    if let Some(expr_str) = filter_expr {
        let expr = FilterExpression::parse(expr_str)
            .map_err(|e| anyhow!("Invalid filter expression: {}", e))?;
        let criteria = to_criteria(&expr).map_err(|e| anyhow!("Invalid filter expression: {}", e))?;
        print_criteria_warnings(&criteria);
        Ok(criteria)
    } else {
        Ok(FilterCriteria::default())
    }
}

fn list_preview(values: &BTreeSet<String>, max_items: usize) -> String {
    let mut preview: Vec<String> = values.iter().take(max_items).cloned().collect();
    if values.len() > max_items {
        preview.push(format!("... +{} more", values.len() - max_items));
    }
    preview.join(", ")
}

fn write_output_file(path: &std::path::Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write output file '{}'", path.display()))
}

fn print_dataset_info(records: &[Record]) {
    println!("Records: {}", records.len());
    if records.is_empty() {
        return;
    }

    let categories: BTreeSet<String> = records.iter().map(|r| r.category.clone()).collect();
    let subcategories: BTreeSet<String> = records.iter().map(|r| r.subcategory.clone()).collect();
    println!(
        "Categories ({}): {}",
        categories.len(),
        list_preview(&categories, 8)
    );
    println!(
        "Subcategories ({}): {}",
        subcategories.len(),
        list_preview(&subcategories, 8)
    );

    let min_price = records.iter().map(|r| r.price).fold(f64::INFINITY, f64::min);
    let max_price = records
        .iter()
        .map(|r| r.price)
        .fold(f64::NEG_INFINITY, f64::max);
    println!("Price range: ${:.2} - ${:.2}", min_price, max_price);

    let earliest = records.iter().map(|r| r.created_at).min();
    let latest = records.iter().map(|r| r.created_at).max();
    if let (Some(earliest), Some(latest)) = (earliest, latest) {
        println!("Created between: {} and {}", earliest, latest);
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = cli_parse();
    let config = config::load_config(cli.config.as_deref()).context("Failed to load config")?;
    let format = cli.format;
    let output = &cli.output;
    let verbose = cli.verbose;
    let quiet = cli.quiet;

    // Set up color handling based on user preference
    match cli.color {
        ColorMode::Always => {
            colored::control::set_override(true);
        }
        ColorMode::Never => {
            colored::control::set_override(false);
        }
        ColorMode::Auto => {
            // Default behavior - let the terminal decide
        }
    }

    // If in verbose mode, display some diagnostic information
    if verbose > 0 && !quiet {
        eprintln!("Verbosity level: {}", verbose);
        eprintln!("Color mode: {:?}", cli.color);
        if let Some(file) = &cli.file {
            eprintln!("Dataset file: {}", file.display());
        }
        if let Some(filter_expr) = &cli.filter {
            eprintln!("Filter: {}", filter_expr);
        }
        eprintln!("Config profile: {}", config.profile_name);
        if let Some(config_path) = &cli.config {
            eprintln!("Config file: {}", config_path.display());
        }
    }

    let criteria = build_criteria(cli.filter.as_deref())?;
    let records = load_records(cli.file.as_deref())?;

    match &cli.command {
        Commands::View { page, page_size } => {
            let mut engine = FilterEngine::new();
            engine.apply_criteria(criteria);
            let visible = engine.derive_visible(&records);

            let mut pager = view::Pager::new(page_size.unwrap_or(config.display.page_size));
            pager.jump(*page, visible.len());

            match format {
                OutputFormat::Text => {
                    let text =
                        view::render_page(&visible, engine.criteria(), &pager, &config.display);
                    print!("{text}");
                    if let Some(path) = output {
                        write_output_file(path, &text)?;
                    }
                }
                OutputFormat::Json => {
                    let json = view::records_to_json(&visible)
                        .context("Failed to serialize visible records")?;
                    println!("{}", json);
                    if let Some(path) = output {
                        write_output_file(path, &json)?;
                    }
                }
            }

            if !quiet && format == OutputFormat::Text {
                if let Some(filter_expr) = &cli.filter {
                    if visible.is_empty() {
                        println!("\nNo records match the filter: {}", filter_expr);
                    } else {
                        println!(
                            "\nShowing {} of {} records after applying filter: {}",
                            visible.len(),
                            records.len(),
                            filter_expr
                        );
                    }
                }
            }
        }
        Commands::Browse => {
            let mut session = Session::new(&records, &config);
            session.apply_criteria(criteria);

            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            session.run(BufReader::new(stdin.lock()), &mut stdout)?;
        }
        Commands::Info => {
            let mut engine = FilterEngine::new();
            engine.apply_criteria(criteria);
            let visible: Vec<Record> = engine
                .derive_visible(&records)
                .into_iter()
                .cloned()
                .collect();

            print_dataset_info(&visible);

            if let Some(filter_expr) = &cli.filter {
                if visible.is_empty() {
                    println!("\nNo records match the filter: {}", filter_expr);
                } else {
                    println!(
                        "\nShowing {} of {} records after applying filter: {}",
                        visible.len(),
                        records.len(),
                        filter_expr
                    );
                }
            }
        }
    }

    Ok(())
}
