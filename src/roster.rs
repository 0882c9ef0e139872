use crate::model::{ROSTER_HEADER, RosterRow, SubmissionName};
use anyhow::{Context, Result, anyhow};
use csv::{Terminator, WriterBuilder};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSummary {
    pub output_path: PathBuf,
    pub rows: usize,
    pub late: usize,
}

/// Base names of the immediate entries of `source_dir`, sorted by name.
/// Hidden entries (leading `.`) are skipped.
pub fn list_entry_names<P: AsRef<Path>>(source_dir: P) -> Result<Vec<String>> {
    let source_dir = source_dir.as_ref();
    let entries = fs::read_dir(source_dir)
        .with_context(|| format!("failed to read directory {}", source_dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list {}", source_dir.display()))?;
        let name = entry
            .file_name()
            .into_string()
            .map_err(|raw| anyhow!("entry name {:?} is not valid UTF-8", raw))?;
        if name.starts_with('.') {
            debug!(%name, "skipping hidden entry");
            continue;
        }
        names.push(name);
    }
    names.sort();
    info!(dir = %source_dir.display(), entries = names.len(), "listed submissions");
    Ok(names)
}

/// Parses every name, stopping at the first malformed one.
pub fn parse_entries(names: &[String]) -> Result<Vec<SubmissionName>> {
    let mut parsed = Vec::with_capacity(names.len());
    for name in names {
        let submission = SubmissionName::parse(name)
            .with_context(|| format!("cannot build a roster row from `{}`", name))?;
        if submission.late && submission.marker_altered_fields(name) {
            warn!(
                %name,
                display_name = %submission.display_name,
                platform_id = %submission.platform_id,
                "late marker removal changed the name or id"
            );
        }
        debug!(%name, display_name = %submission.display_name, platform_id = %submission.platform_id, late = submission.late);
        parsed.push(submission);
    }
    Ok(parsed)
}

/// Writes the header followed by one record per row.
pub fn write_roster<W: Write>(rows: &[RosterRow], writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    wtr.write_record(ROSTER_HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Lists and parses `source_dir` before the output is opened, so a failed
/// run leaves any existing file at `output_path` untouched.
pub fn build_roster<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    output_path: Q,
) -> Result<RosterSummary> {
    let output_path = output_path.as_ref();
    let names = list_entry_names(source_dir)?;
    let submissions = parse_entries(&names)?;
    let late = submissions.iter().filter(|s| s.late).count();
    let rows: Vec<RosterRow> = submissions.into_iter().map(RosterRow::from).collect();

    let file = File::create(output_path)
        .with_context(|| format!("failed to create {}", output_path.display()))?;
    write_roster(&rows, file)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    info!(path = %output_path.display(), rows = rows.len(), late, "roster written");
    Ok(RosterSummary {
        output_path: output_path.to_path_buf(),
        rows: rows.len(),
        late,
    })
}
