//! Process-wide memoization of compiled renderers, keyed by shape.
//!
//! Lookups take a shared read lock. The first request for a shape installs an
//! indirection renderer under the write lock, compiles the real renderer with
//! no lock held, publishes it through the indirection, and finally swaps it
//! into the table. Recursive shapes resolve to the indirection while their own
//! compilation is still running, which is what keeps the classifier from
//! recursing forever on a type that mentions itself.
//!
//! The table is never evicted: its size is bounded by the number of distinct
//! types the program encodes, not by the number of encode calls.

use crate::session::Session;
use crate::shape::ShapeId;
use crate::{Error, Result};
use once_cell::sync::{Lazy, OnceCell};
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// A compiled procedure writing values of one shape into a session.
///
/// Only ever invoked with a value of the shape it was compiled for.
pub(crate) type Renderer = Arc<dyn Fn(&mut Session, &dyn Any) -> Result<()> + Send + Sync>;

static RENDERERS: Lazy<RwLock<HashMap<TypeId, Renderer>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Returns the renderer for `shape`, compiling it on first use.
pub(crate) fn renderer(shape: ShapeId) -> Renderer {
    if let Some(found) = RENDERERS.read().get(&shape.type_id()) {
        return Arc::clone(found);
    }

    let ready: Arc<OnceCell<Renderer>> = Arc::new(OnceCell::new());
    {
        let mut table = RENDERERS.write();
        // Another caller may have installed it between the two locks.
        if let Some(found) = table.get(&shape.type_id()) {
            return Arc::clone(found);
        }
        let pending = Arc::clone(&ready);
        let indirect: Renderer =
            Arc::new(move |session: &mut Session, value: &dyn Any| (pending.wait())(session, value));
        table.insert(shape.type_id(), indirect);
        trace!(shape = shape.name(), "installed indirect renderer");
    }

    let mut guard = Pending {
        shape,
        ready: Arc::clone(&ready),
        finished: false,
    };
    let built = shape.compile();
    guard.finished = true;

    // Only this call installed the indirection, so the cell is still empty.
    let _ = ready.set(Arc::clone(&built));
    RENDERERS.write().insert(shape.type_id(), Arc::clone(&built));
    debug!(shape = shape.name(), "compiled renderer");
    built
}

/// Withdraws the indirection of a shape whose `Edn::shape` panicked.
///
/// Renderers that already captured the indirection fail with
/// [`Error::UnsupportedType`] instead of waiting on it forever. The next
/// request for the shape compiles it again.
struct Pending {
    shape: ShapeId,
    ready: Arc<OnceCell<Renderer>>,
    finished: bool,
}

impl Drop for Pending {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let name = self.shape.name();
        let failed: Renderer =
            Arc::new(move |_: &mut Session, _: &dyn Any| Err(Error::unsupported_type(name)));
        let _ = self.ready.set(failed);
        RENDERERS.write().remove(&self.shape.type_id());
        warn!(shape = name, "compiling renderer panicked, withdrew indirection");
    }
}

/// Number of shapes with a renderer, pending or final.
#[cfg(test)]
pub(crate) fn len() -> usize {
    RENDERERS.read().len()
}

#[cfg(test)]
pub(crate) fn contains(shape: ShapeId) -> bool {
    RENDERERS.read().contains_key(&shape.type_id())
}
