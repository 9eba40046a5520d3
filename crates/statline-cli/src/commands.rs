//! Subcommand implementations.

use anyhow::Result;
use comfy_table::Table;
use tracing::info;

use statline_client::catalog::MAX_DESCRIPTION_LENGTH;
use statline_client::{OdataClient, short_description};

use crate::cli::{DatasetArgs, SearchArgs, ShowArgs};
use crate::render::{apply_table_style, frame_table};

fn client(base_url: Option<&str>) -> Result<OdataClient> {
    match base_url {
        Some(url) => OdataClient::with_base_url(url),
        None => OdataClient::new(),
    }
}

pub fn run_search(args: &SearchArgs, base_url: Option<&str>) -> Result<()> {
    let client = client(base_url)?;
    let hits = client.search(&args.keyword)?;
    if hits.is_empty() {
        println!("No datasets matched `{}`.", args.keyword);
        return Ok(());
    }
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec!["Identifier", "Title", "Score", "Description"]);
    for hit in &hits {
        table.add_row(vec![
            hit.summary.identifier.clone(),
            hit.summary.title.clone(),
            format!("{:.2}", hit.score),
            short_description(&hit.summary.description, MAX_DESCRIPTION_LENGTH),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_info(args: &DatasetArgs, base_url: Option<&str>) -> Result<()> {
    let client = client(base_url)?;
    let dataset = client.dataset(&args.identifier)?;
    let descriptor = dataset.descriptor();
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Identifier", &descriptor.identifier]);
    table.add_row(vec!["Title", &descriptor.title]);
    table.add_row(vec!["Language", &descriptor.language]);
    table.add_row(vec!["Catalog", &descriptor.catalog]);
    table.add_row(vec!["Version", &descriptor.version]);
    table.add_row(vec!["Type", &descriptor.dataset_type]);
    table.add_row(vec![
        "Observations".to_string(),
        descriptor.observation_count.to_string(),
    ]);
    table.add_row(vec![
        "Modified".to_string(),
        descriptor.modified.to_rfc3339(),
    ]);
    table.add_row(vec![
        "Released".to_string(),
        descriptor.release_date.to_rfc3339(),
    ]);
    println!("{table}");
    println!(
        "{}",
        short_description(&descriptor.description, MAX_DESCRIPTION_LENGTH)
    );
    Ok(())
}

pub fn run_show(args: &ShowArgs, base_url: Option<&str>) -> Result<()> {
    let client = client(base_url)?;
    let dataset = client.dataset(&args.identifier)?;
    let df = if args.raw {
        dataset.raw_table()?
    } else {
        dataset.cleaned_table()?
    };
    info!(
        identifier = %args.identifier,
        rows = df.height(),
        columns = df.width(),
        raw = args.raw,
        "fetched table"
    );
    println!("{}", frame_table(&df, args.limit));
    if df.height() > args.limit {
        println!("({} of {} rows shown)", args.limit, df.height());
    }
    Ok(())
}

pub fn run_meta(args: &DatasetArgs, base_url: Option<&str>) -> Result<()> {
    let client = client(base_url)?;
    let metadata = client.fetch_metadata(&args.identifier)?;
    if metadata.is_empty() {
        println!("No metadata categories for `{}`.", args.identifier);
        return Ok(());
    }
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec!["Category", "Codes", "Example"]);
    for (category, items) in &metadata {
        let example = items
            .first()
            .map(|item| format!("{} = {}", item.identifier, item.label()))
            .unwrap_or_default();
        table.add_row(vec![category.clone(), items.len().to_string(), example]);
    }
    println!("{table}");
    Ok(())
}
