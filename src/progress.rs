use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Transient status output on stderr while the import graph is built.
///
/// Nothing written here is part of the report; stdout stays clean.
pub struct ProgressReporter {
    term: Term,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            current_bar: None,
        }
    }

    /// Only report progress when a human is watching stderr
    pub fn for_terminal() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    fn create_spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(SPINNER_FRAMES),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_resolution(&mut self, root: &str) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} Resolving imports of {}...",
            style("🔍").cyan(),
            style(root).bold()
        );
        let spinner = self.create_spinner("Working ...");
        self.current_bar = Some(spinner);
    }

    /// Called once per package visit, revisits included
    pub fn visiting(&self, import_path: &str, visits: usize) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!(
                "Working ... {} {}",
                style(visits).yellow(),
                style(import_path).dim()
            ));
        }
    }

    pub fn finish_resolution(&mut self, packages: usize, visits: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        eprintln!(
            "{} Found {} internal {} in {} {}",
            style("✓").green(),
            style(packages).yellow().bold(),
            pluralize("package", packages),
            visits,
            pluralize("visit", visits)
        );
    }

    /// Clear the spinner without a summary, e.g. after a failed lookup
    pub fn abandon(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
    }
}
