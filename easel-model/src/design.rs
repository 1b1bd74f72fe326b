//! The design aggregate: canvas dimensions, background and the ordered list of
//! elements. A design serialized to JSON is what the editor hands to the undo
//! history as a snapshot.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, trace, warn};
use uuid::Uuid;

use crate::element::DesignElement;

/// Milliseconds since the Unix epoch, 0 if the clock is before it.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub id: Uuid,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub background_color: String,
    /// Back-to-front paint order.
    pub elements: Vec<DesignElement>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Design {
    /// Empty design on a white background.
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        let now = now_millis();
        let design = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            width,
            height,
            background_color: "#ffffff".into(),
            elements: vec![],
            created_at: now,
            updated_at: now,
        };
        debug!(id = %design.id, width, height, "created design");
        design
    }

    fn touch(&mut self) {
        // Never move backwards, even if the wall clock does
        self.updated_at = now_millis().max(self.updated_at);
    }

    /// Append an element on top of the others.
    pub fn add_element(&mut self, element: impl Into<DesignElement>) {
        let element = element.into();
        trace!(design = %self.id, element = element.id(), kind = element.kind(), "adding element");
        self.elements.push(element);
        self.touch();
    }

    pub fn element(&self, id: &str) -> Option<&DesignElement> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Replace the element `id` with `edit(element)`.
    ///
    /// `edit` is typically one of the transform functions, e.g.
    /// `design.update_element("e1", |e| rotate_element(e, 90.0))`.
    /// Returns false if no element has that id.
    pub fn update_element<F>(&mut self, id: &str, edit: F) -> bool
    where
        F: FnOnce(&DesignElement) -> DesignElement,
    {
        let Some(slot) = self.elements.iter_mut().find(|e| e.id() == id) else {
            warn!(design = %self.id, element = id, "update requested for unknown element");
            return false;
        };

        *slot = edit(&*slot);
        self.touch();
        true
    }

    /// Remove and return the element `id`.
    pub fn remove_element(&mut self, id: &str) -> Option<DesignElement> {
        let index = self.elements.iter().position(|e| e.id() == id)?;
        let removed = self.elements.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("serialize design to json")
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("parse design json")
    }
}
