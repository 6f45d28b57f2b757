use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::info_span;

use dosage_cli::pipeline::{compile_request, load_config, load_units, read_request};
use dosage_compile::{CompileContext, SCHEMAS, SummaryRenderer};

use crate::cli::{CompileArgs, UnitsArgs};

pub fn run_compile(args: &CompileArgs) -> Result<()> {
    let span = info_span!("compile", request = %args.request.display());
    let _guard = span.enter();

    let units = load_units(args.units.as_deref())?;
    let config = load_config(args.config.as_deref())?;
    let ctx = CompileContext::new(&units, &config);

    let request = read_request(&args.request)?;
    let output = compile_request(&request, &ctx)?;

    println!("{}", output.to_json()?);
    if args.text {
        println!();
        println!("{}", output.render_text(&SummaryRenderer));
    }
    Ok(())
}

pub fn run_schemas() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Schema", "Description"]);
    apply_table_style(&mut table);
    for (name, description) in SCHEMAS {
        table.add_row(vec![name, description]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_units(args: &UnitsArgs) -> Result<()> {
    let units = load_units(args.units.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["Code", "Label"]);
    apply_table_style(&mut table);
    for (code, label) in units.iter() {
        table.add_row(vec![code, label]);
    }
    println!("{table}");
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}
