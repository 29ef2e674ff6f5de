//! Subcommand entry points.

use anyhow::Result;

use panel_ingest::SdmxQuery;
use panel_model::sources::{FX_PAIRS, SDMX_SOURCES, TRADE_FLOWS_FILE, USD_INDEXES, YIELD_SERIES};
use panel_report::{print_report, yield_countries};

use crate::cli::RunArgs;
use crate::pipeline::{coverage_entries, run_pipeline, RunOptions};

/// `macropanel run`: build every table, print the coverage report.
pub fn run_panel(args: &RunArgs) -> Result<()> {
    let options = RunOptions {
        data_dir: args.data_dir.clone(),
        start_period: args.start_period.clone(),
        offline: args.offline,
    };
    let tables = run_pipeline(&options)?;
    let coverage = coverage_entries(&tables);
    let countries = yield_countries(&tables.yields.levels);
    print_report(&coverage, &tables.unit_mult_missing, &countries);
    Ok(())
}

/// `macropanel sources`: list the configured files and remote queries.
pub fn run_sources() -> Result<()> {
    println!("FX spot pairs ({}):", FX_PAIRS.len());
    for spec in FX_PAIRS {
        let role = if spec.in_usd_panel {
            "panel"
        } else {
            "series only"
        };
        println!("- {} -> {} ({role})", spec.file, spec.country);
    }
    println!("USD index files ({}):", USD_INDEXES.len());
    for spec in USD_INDEXES {
        println!("- {} -> {}", spec.file, spec.label);
    }
    println!("Yield series ({}):", YIELD_SERIES.len());
    for spec in YIELD_SERIES {
        println!("- {} -> {}", spec.file, spec.country);
    }
    println!("Local tables:");
    println!("- {TRADE_FLOWS_FILE}");
    println!("SDMX queries ({}):", SDMX_SOURCES.len());
    for spec in SDMX_SOURCES {
        println!(
            "- {} ({}): {}",
            spec.name,
            spec.freq.sdmx_code(),
            SdmxQuery::new(*spec, "1995").url()
        );
    }
    Ok(())
}
