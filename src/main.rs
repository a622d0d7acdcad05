use std::io;
use std::path::Path;

use anyhow::Context;

use planet_images::catalog::Catalog;
use planet_images::config::{CONFIG_FILE, Config};
use planet_images::download::client::ReqwestClient;
use planet_images::download::manager::Fetcher;
use planet_images::download::outcome::StatusWriter;
use planet_images::logging;

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = Config::load_from_file(CONFIG_FILE);
    let catalog = Catalog::planets().context("built-in image table is invalid")?;
    let client = ReqwestClient::new().context("failed to build HTTP client")?;

    let fetcher = Fetcher::new(client, &config);
    let mut status = StatusWriter::new(io::stdout().lock());
    let run = fetcher.run_with(&catalog, Path::new("."), |report| {
        if let Err(err) = status.entry(report) {
            tracing::warn!("failed to write status line: {err}");
        }
    });
    status.finish(&run).context("failed to write summary")?;

    // Only `on_error = "abort"` can stop a run; it exits non-zero like an unhandled fault.
    if let Some(cause) = run.abort_cause() {
        anyhow::bail!("run aborted at {}: {}", cause.entry.filename, cause.outcome);
    }
    Ok(())
}
