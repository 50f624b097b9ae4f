//! Parallel rendering of many top-level actors.
//!
//! Every export is rendered in its own session on the rayon pool. The
//! package's instantiation cache is shared, so a sub-object referenced by
//! several actors is decoded once.
//!
//! # Example
//!
//! ```ignore
//! let t3d = T3d::new(&pkg);
//! let ids: Vec<_> = pkg.exports().map(|e| e.id).collect();
//! for (id, result) in ids.iter().zip(t3d.render_batch(&ids)) {
//!     match result {
//!         Ok(text) => println!("{text}"),
//!         Err(e) => eprintln!("{id}: {e}"),
//!     }
//! }
//! ```

use rayon::prelude::*;

use crate::model::EntryId;
use crate::package::Package;
use crate::t3d::{RenderError, T3d};

impl<P: Package + Sync + ?Sized> T3d<'_, P> {
    /// Render each export in parallel, one result per input, in input order.
    pub fn render_batch(&self, ids: &[EntryId]) -> Vec<Result<String, RenderError>> {
        if ids.is_empty() {
            return vec![];
        }

        tracing::debug!(count = ids.len(), "rendering actor batch");
        ids.par_iter()
            .map(|id| self.render_export(*id, 0))
            .collect()
    }

    /// Render exports in parallel and join them into one document.
    ///
    /// Fails with the first error in input order.
    pub fn render_batch_document(&self, ids: &[EntryId]) -> Result<String, RenderError> {
        let blocks = self
            .render_batch(ids)
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(blocks.join(self.config().line_ending.as_str()))
    }
}
