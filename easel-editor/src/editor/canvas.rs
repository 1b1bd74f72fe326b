// Boundary between the editor and whatever owns the actual canvas.
// The history only ever sees opaque snapshots; a CanvasHost produces and consumes them.

use anyhow::Context;
use easel_model::Design;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Serialized state of the whole canvas at one point in time.
///
/// Opaque to the editor: never parsed or validated here. Cloning is cheap and
/// the contents can't change once created.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CanvasSnapshot(Arc<str>);

impl CanvasSnapshot {
    pub fn new(serialized: impl Into<Arc<str>>) -> Self {
        Self(serialized.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Snapshots can be megabytes of JSON; keep logs readable
impl fmt::Debug for CanvasSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CanvasSnapshot({} bytes)", self.0.len())
    }
}

impl fmt::Display for CanvasSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanvasSnapshot {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for CanvasSnapshot {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for CanvasSnapshot {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Something that can dump its full state into a snapshot and load it back.
pub trait CanvasHost {
    fn serialize(&self) -> anyhow::Result<CanvasSnapshot>;

    fn restore(&mut self, snapshot: &CanvasSnapshot) -> anyhow::Result<()>;
}

// A design's JSON is its snapshot
impl CanvasHost for Design {
    fn serialize(&self) -> anyhow::Result<CanvasSnapshot> {
        let json = self.to_json()?;
        trace!(design = %self.id, bytes = json.len(), "serialized design");
        Ok(CanvasSnapshot::from(json))
    }

    fn restore(&mut self, snapshot: &CanvasSnapshot) -> anyhow::Result<()> {
        let restored = Design::from_json(snapshot.as_str())
            .with_context(|| format!("restore design from {:?}", snapshot))?;
        debug!(
            design = %restored.id,
            elements = restored.elements.len(),
            "restored design from snapshot"
        );
        *self = restored;
        Ok(())
    }
}
