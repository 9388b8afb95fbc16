//! Command-line interface for filling clock face placeholders in HTML documents

use crate::io::configuration::{
    COMPLETION_MESSAGE, DEFAULT_DOCUMENT, DEFAULT_IMAGE_LIST, HTML_EXTENSION,
};
use crate::io::document::{read_document, write_document};
use crate::io::error::{Result, file_access};
use crate::io::image_list::load_image_list;
use crate::io::progress::ProgressManager;
use crate::substitution::filter::ImageSubsets;
use crate::substitution::substitutor::substitute;
use clap::Parser;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "clockface")]
#[command(
    author,
    version,
    about = "Replace numbered image placeholders in HTML with images from a list"
)]
/// Command-line arguments for the placeholder substitution tool
pub struct Cli {
    /// HTML document, or directory of HTML documents, rewritten in place
    #[arg(value_name = "TARGET", default_value = DEFAULT_DOCUMENT)]
    pub target: PathBuf,

    /// Image list with one path per line
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_IMAGE_LIST)]
    pub list: PathBuf,

    /// Report substitutions without writing any document
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress progress and completion output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if documents should be written back
    pub const fn should_write(&self) -> bool {
        !self.dry_run
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Totals over every document of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Documents read and substituted
    pub documents: usize,
    /// Documents written back to disk
    pub written: usize,
    /// Slots filled, summed over documents
    pub slots_filled: usize,
    /// Placeholder occurrences replaced, summed over documents
    pub occurrences: usize,
}

/// Orchestrates loading, substituting and rewriting documents
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Substitute placeholders in every target document
    ///
    /// All documents are read and substituted before the first write, so a
    /// failed read leaves every file untouched.
    ///
    /// # Errors
    ///
    /// Returns `FileAccess` if the image list, a document or the target
    /// directory cannot be read, or if a document cannot be written
    pub fn process(&mut self) -> Result<ProcessSummary> {
        let images = load_image_list(&self.cli.list)?;
        let subsets = ImageSubsets::from_images(&images);
        debug!(
            "{} hand image(s), {} additional image(s)",
            subsets.hand.len(),
            subsets.additional.len()
        );

        let documents = self.collect_documents()?;
        let mut summary = ProcessSummary::default();

        if let Some(ref pm) = self.progress_manager {
            pm.initialize(documents.len());
        }

        let mut pending = Vec::with_capacity(documents.len());
        for path in documents {
            if let Some(ref pm) = self.progress_manager {
                pm.start_document(&path);
            }

            let html = read_document(&path)?;
            let substitution = substitute(&html, &subsets);
            let report = &substitution.report;
            if report.is_unchanged() {
                info!("{}: unchanged, no placeholder matched", path.display());
            } else {
                info!(
                    "{}: {} slot(s) filled, {} occurrence(s) replaced, {} slot(s) without image",
                    path.display(),
                    report.filled.len(),
                    report.occurrences,
                    report.unavailable.len()
                );
            }

            summary.documents += 1;
            summary.slots_filled += report.filled.len();
            summary.occurrences += report.occurrences;
            pending.push((path, substitution.html));

            if let Some(ref pm) = self.progress_manager {
                pm.complete_document();
            }
        }

        if self.cli.should_write() {
            for (path, html) in &pending {
                write_document(path, html).inspect_err(|err| {
                    warn!(
                        "Stopped at {} with {} of {} document(s) already written",
                        err.path().display(),
                        summary.written,
                        pending.len()
                    );
                })?;
                summary.written += 1;
            }
        } else {
            info!("Dry run, {} document(s) left unchanged", pending.len());
        }

        if let Some(ref pm) = self.progress_manager {
            debug!("{} document(s) substituted", pm.completed());
            pm.finish();
        }

        info!(
            "Processed {} document(s): {} slot(s) filled, {} occurrence(s) replaced",
            summary.documents, summary.slots_filled, summary.occurrences
        );
        self.report_completion();

        Ok(summary)
    }

    // Allow print for the completion message users expect on success
    #[allow(clippy::print_stdout)]
    fn report_completion(&self) {
        if !self.cli.quiet {
            println!("{COMPLETION_MESSAGE}");
        }
    }

    fn collect_documents(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if !target.is_dir() {
            return Ok(vec![target.clone()]);
        }

        let mut documents = Vec::new();
        let entries = std::fs::read_dir(target).map_err(file_access(target, "list directory"))?;
        for entry in entries {
            let path = entry.map_err(file_access(target, "list directory"))?.path();
            if path.is_file() && Self::is_html(&path) {
                documents.push(path);
            }
        }
        documents.sort();

        if documents.is_empty() {
            warn!("No HTML documents found in {}", target.display());
        }
        Ok(documents)
    }

    fn is_html(path: &Path) -> bool {
        path.extension().and_then(|s| s.to_str()) == Some(HTML_EXTENSION)
    }
}
