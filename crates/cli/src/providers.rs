use crate::CliResult;
use appctx_core::ResolverConfig;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ProviderRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
}

pub fn run(config: &ResolverConfig) -> CliResult {
    let discovery = appctx_runtime::build_discovery(config);
    let handles = discovery.discover()?;

    if handles.is_empty() {
        println!("No providers discovered.");
        return Ok(());
    }

    let rows: Vec<ProviderRow> = handles
        .into_iter()
        .enumerate()
        .map(|(idx, handle)| ProviderRow {
            position: idx + 1,
            id: handle.info.id,
            name: handle.info.name,
            description: handle.info.description.unwrap_or_default(),
        })
        .collect();

    println!("{}", Table::new(rows));
    Ok(())
}
