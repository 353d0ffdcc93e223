//! Run-scoped mutable state
//!
//! One `Context` lives for one sanitization run. The enclosing tag loop
//! updates the positional fields; validators read them and may annotate
//! the accumulators (the ID validator records every ID it accepts so
//! duplicates within the run are rejected).

use std::collections::HashSet;

/// Mutable auxiliary state threaded through a sanitization run.
#[derive(Debug, Clone, Default)]
pub struct Context {
	tag: Option<String>,
	depth: usize,
	seen_ids: HashSet<String>,
}

impl Context {
	pub fn new() -> Self {
		Self::default()
	}

	/// Name of the tag currently being processed, if any.
	pub fn tag(&self) -> Option<&str> {
		self.tag.as_deref()
	}

	pub fn depth(&self) -> usize {
		self.depth
	}

	/// Called by the tag loop when it descends into a tag.
	pub fn enter_tag(&mut self, name: impl Into<String>) {
		self.tag = Some(name.into());
		self.depth += 1;
	}

	/// Called by the tag loop when it leaves the current tag.
	pub fn leave_tag(&mut self) {
		self.depth = self.depth.saturating_sub(1);
		self.tag = None;
	}

	/// Records an accepted ID. Returns `false` when the ID was already
	/// seen in this run.
	pub fn register_id(&mut self, id: &str) -> bool {
		self.seen_ids.insert(id.to_string())
	}

	pub fn has_id(&self, id: &str) -> bool {
		self.seen_ids.contains(id)
	}
}
