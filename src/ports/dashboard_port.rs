//! Dashboard rendering port trait.

use crate::domain::error::QuoteboardError;
use crate::domain::load_state::LoadState;

/// Port for turning a load result into a dashboard.
pub trait DashboardPort {
    fn render(&self, state: &LoadState) -> Result<String, QuoteboardError>;

    /// Default implementation: renders, creates parent directories, writes.
    fn write(&self, state: &LoadState, output_path: &str) -> Result<(), QuoteboardError> {
        let html = self.render(state)?;
        let path = std::path::Path::new(output_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, html)?;
        Ok(())
    }
}
