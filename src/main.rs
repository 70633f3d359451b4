use anyhow::{bail, Result};
use std::env;

use card_atlas::entities::{
    ResultCard, ResultCardType, ResultCycle, ResultFaction, ResultFormat, ResultPool,
    ResultPrinting, ResultRestriction, ResultRuling, ResultSet, ResultSettype, ResultSide,
    ResultSnapshot, ResultSubtype,
};
use card_atlas::{build, load_sorted, refresh, save, Layout, Stores};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let root = args.get(2).map(String::as_str).unwrap_or(".");
    let layout = Layout::new(root);

    match args.get(1).map(String::as_str) {
        Some("merge") => run_merge(&layout)?,
        Some("collect") => run_collect(&layout)?,
        None => {
            run_merge(&layout)?;
            run_collect(&layout)?;
        }
        Some(other) => bail!("unknown command '{other}' (expected 'merge' or 'collect')"),
    }

    Ok(())
}

/// Pass 1: merge every kind's oracle/locale pair into its result table.
fn run_merge(layout: &Layout) -> Result<()> {
    println!("📦 Merging bilingual source tables...");
    println!("  ✓ {:>4} sides", refresh::<ResultSide>(layout)?);
    println!("  ✓ {:>4} factions", refresh::<ResultFaction>(layout)?);
    println!("  ✓ {:>4} types", refresh::<ResultCardType>(layout)?);
    println!("  ✓ {:>4} subtypes", refresh::<ResultSubtype>(layout)?);
    println!("  ✓ {:>4} settypes", refresh::<ResultSettype>(layout)?);
    println!("  ✓ {:>4} cycles", refresh::<ResultCycle>(layout)?);
    println!("  ✓ {:>4} sets", refresh::<ResultSet>(layout)?);
    println!("  ✓ {:>4} formats", refresh::<ResultFormat>(layout)?);
    println!("  ✓ {:>4} snapshots", refresh::<ResultSnapshot>(layout)?);
    println!("  ✓ {:>4} pools", refresh::<ResultPool>(layout)?);
    println!("  ✓ {:>4} restrictions", refresh::<ResultRestriction>(layout)?);
    println!("  ✓ {:>4} rulings", refresh::<ResultRuling>(layout)?);
    println!("  ✓ {:>4} cards", refresh::<ResultCard>(layout)?);
    println!("  ✓ {:>4} printings", refresh::<ResultPrinting>(layout)?);
    Ok(())
}

/// Pass 2: join the result tables and write the flat collection export.
fn run_collect(layout: &Layout) -> Result<()> {
    println!("🃏 Building collection export...");
    let printings = load_sorted::<ResultPrinting>(layout)?;
    let stores = Stores::load(layout)?;
    let rows = build(&stores, &printings)?;
    save(&layout.export_file(), &rows)?;
    println!("✓ Saved {} cards", rows.len());
    Ok(())
}
