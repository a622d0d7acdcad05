use std::path::Path;

use crate::catalog::ImageEntry;
use crate::download::client::HttpClient;
use crate::download::file::write_body_to_file;
use crate::download::outcome::EntryOutcome;

/// GET one entry and, on 200, write the body to `dest_dir/filename`.
/// Any other status leaves the destination file untouched.
pub fn download_entry<C: HttpClient + ?Sized>(
    client: &C,
    entry: &ImageEntry,
    dest_dir: &Path,
) -> EntryOutcome {
    let response = match client.get(&entry.url) {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(file = %entry.filename, url = %entry.url, "request failed: {err}");
            return EntryOutcome::Transport(err.to_string());
        }
    };

    if response.status != 200 {
        tracing::warn!(file = %entry.filename, url = %entry.url, status = response.status, "unexpected status");
        return EntryOutcome::HttpStatus(response.status);
    }

    let path = dest_dir.join(&entry.filename);
    match write_body_to_file(&response.body, &path) {
        Ok(bytes) => {
            tracing::info!(file = %entry.filename, bytes, "saved");
            EntryOutcome::Saved { path, bytes }
        }
        Err(err) => {
            tracing::warn!(file = %entry.filename, "write failed: {err}");
            EntryOutcome::Filesystem(err.to_string())
        }
    }
}
