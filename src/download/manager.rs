use std::path::Path;

use crate::catalog::Catalog;
use crate::config::{Config, ErrorPolicy};
use crate::download::client::HttpClient;
use crate::download::outcome::{EntryReport, RunReport};
use crate::download::single::download_entry;

/// Downloads every catalog entry, one at a time, in catalog order.
pub struct Fetcher<C> {
    client: C,
    policy: ErrorPolicy,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C, config: &Config) -> Self {
        Self {
            client,
            policy: config.on_error,
        }
    }

    pub fn with_policy(client: C, policy: ErrorPolicy) -> Self {
        Self { client, policy }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn run(&self, catalog: &Catalog, dest_dir: &Path) -> RunReport {
        self.run_with(catalog, dest_dir, |_| {})
    }

    /// Like `run`, but hands each report to `on_entry` as soon as it is known.
    pub fn run_with<F>(&self, catalog: &Catalog, dest_dir: &Path, mut on_entry: F) -> RunReport
    where
        F: FnMut(&EntryReport),
    {
        let mut run = RunReport::default();

        for entry in catalog.iter() {
            let outcome = download_entry(&self.client, entry, dest_dir);
            let stop = outcome.is_fault() && self.policy == ErrorPolicy::Abort;

            let report = EntryReport {
                entry: entry.clone(),
                outcome,
            };
            on_entry(&report);
            run.reports.push(report);

            if stop {
                tracing::error!(
                    file = %entry.filename,
                    remaining = catalog.len() - run.reports.len(),
                    "aborting run"
                );
                run.aborted = true;
                break;
            }
        }

        tracing::debug!(succeeded = run.succeeded(), failed = run.failed(), "run finished");
        run
    }
}
