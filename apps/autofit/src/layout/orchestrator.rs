//! Fit orchestrator: owns the fitting state and reacts to state changes.
//!
//! # Triggers
//! Every public setter is a trigger. Each one runs the full
//! recompute-and-apply sequence synchronously before returning:
//! 1. Available space = bounds minus padding. Width <= 0 means the host has not
//!    been laid out yet; the trigger is skipped without touching the cache.
//! 2. Bounds, constraint, measurer and cache-setting triggers clear the cache.
//!    Text edits do not.
//! 3. Cache lookup (if enabled), otherwise predicate + binary search.
//! 4. The result is stored (if enabled) and handed to the [`SizeSink`]. Applying a
//!    size never goes back through the public setters, so it cannot re-trigger
//!    invalidation.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::layout::cache::{CacheKeyPolicy, SizeCache};
use crate::layout::constraints::{AvailableSpace, Bounds, FitConstraints, LineLimit, Padding};
use crate::layout::measurer::{LayoutMeasurer, LineSpacing};
use crate::layout::predicate::{FitMode, FitPredicate};
use crate::layout::search::binary_search;

/// Host rendering size setter. Receives every size the orchestrator settles on.
pub trait SizeSink {
    fn apply_size(&mut self, size: u32);
}

impl<F: FnMut(u32)> SizeSink for F {
    fn apply_size(&mut self, size: u32) {
        self(size)
    }
}

/// Where a published size came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitSource {
    Cache,
    Search,
}

/// Size published by one recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitOutcome {
    pub size: u32,
    pub source: FitSource,
    /// Predicate evaluations spent (0 on a cache hit).
    pub probes: u32,
}

pub struct FitOrchestrator<M: LayoutMeasurer, S: SizeSink> {
    measurer: M,
    sink: S,
    text: String,
    bounds: Bounds,
    padding: Padding,
    constraints: FitConstraints,
    cache: SizeCache,
    cache_enabled: bool,
}

impl<M: LayoutMeasurer, S: SizeSink> FitOrchestrator<M, S> {
    /// Creates an orchestrator with empty text and zero bounds. Nothing is
    /// published until the host reports a positive width.
    pub fn new(measurer: M, sink: S, constraints: FitConstraints) -> Self {
        if let Err(e) = constraints.validate() {
            warn!("fit constraints violate preconditions: {e}");
        }
        Self {
            measurer,
            sink,
            text: String::new(),
            bounds: Bounds::default(),
            padding: Padding::default(),
            constraints,
            cache: SizeCache::default(),
            cache_enabled: true,
        }
    }

    // ── accessors ───────────────────────────────────────────────────────────

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn constraints(&self) -> &FitConstraints {
        &self.constraints
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn is_cache_enabled(&self) -> bool {
        self.cache_enabled
    }

    pub fn cache(&self) -> &SizeCache {
        &self.cache
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Drawable rectangle for the current bounds and padding.
    pub fn available_space(&self) -> AvailableSpace {
        AvailableSpace::from_bounds(self.bounds, self.padding)
    }

    // ── triggers ────────────────────────────────────────────────────────────

    /// Text edited. The cache is kept.
    pub fn set_text(&mut self, text: impl Into<String>) -> Option<FitOutcome> {
        self.text = text.into();
        self.recompute()
    }

    /// Host view resized. The cache is always cleared; a recompute runs only if
    /// the size actually changed.
    pub fn on_bounds_changed(&mut self, bounds: Bounds) -> Option<FitOutcome> {
        self.cache.clear();
        if bounds == self.bounds {
            return None;
        }
        self.bounds = bounds;
        self.recompute()
    }

    pub fn set_padding(&mut self, padding: Padding) -> Option<FitOutcome> {
        self.padding = padding;
        self.invalidate();
        self.recompute()
    }

    pub fn set_max_size(&mut self, size: u32) -> Option<FitOutcome> {
        self.reconfigure(|c| c.max_size = size)
    }

    pub fn set_min_size(&mut self, size: u32) -> Option<FitOutcome> {
        self.reconfigure(|c| c.min_size = size)
    }

    pub fn set_max_lines(&mut self, max_lines: LineLimit) -> Option<FitOutcome> {
        self.reconfigure(|c| c.max_lines = max_lines)
    }

    /// `true` caps the text at one line; `false` removes the line cap.
    pub fn set_single_line(&mut self, single_line: bool) -> Option<FitOutcome> {
        let max_lines = if single_line {
            LineLimit::Lines(1)
        } else {
            LineLimit::Unlimited
        };
        self.set_max_lines(max_lines)
    }

    pub fn set_line_spacing(&mut self, spacing: LineSpacing) -> Option<FitOutcome> {
        self.reconfigure(|c| c.spacing = spacing)
    }

    pub fn set_cache_enabled(&mut self, enabled: bool) -> Option<FitOutcome> {
        self.cache_enabled = enabled;
        self.invalidate();
        self.recompute()
    }

    pub fn set_cache_policy(&mut self, policy: CacheKeyPolicy) -> Option<FitOutcome> {
        self.cache.set_policy(policy);
        self.invalidate();
        self.recompute()
    }

    /// Swaps the measurer (e.g. after a typeface change) and returns the old one.
    pub fn replace_measurer(&mut self, measurer: M) -> (M, Option<FitOutcome>) {
        let old = std::mem::replace(&mut self.measurer, measurer);
        self.invalidate();
        (old, self.recompute())
    }

    // ── lifecycle ───────────────────────────────────────────────────────────

    /// Drops every cached size.
    pub fn invalidate(&mut self) {
        if !self.cache.is_empty() {
            debug!(entries = self.cache.len(), "size cache invalidated");
        }
        self.cache.clear();
    }

    /// Computes and publishes the size for the current state.
    ///
    /// Returns `None` when the available width is not positive yet.
    pub fn recompute(&mut self) -> Option<FitOutcome> {
        let space = self.available_space();
        if !space.is_measurable() {
            debug!(width = space.width, "available width not positive; skipping fit");
            return None;
        }

        if self.cache_enabled {
            if let Some(size) = self.cache.get(&self.text) {
                debug!(size, "size cache hit");
                self.apply(size);
                return Some(FitOutcome {
                    size,
                    source: FitSource::Cache,
                    probes: 0,
                });
            }
        }

        let mode = FitMode::for_limit(self.constraints.max_lines);
        let predicate = FitPredicate::new(
            &self.measurer,
            &self.text,
            mode,
            self.constraints.spacing,
            space,
        );
        let (start, end_exclusive) = self.constraints.search_range();
        let searched = binary_search(start, end_exclusive, |size| predicate.compare(size));

        debug!(
            size = searched.size,
            probes = searched.probes,
            ?mode,
            width = space.width,
            height = space.height,
            "fitted text size"
        );

        if self.cache_enabled {
            self.cache.insert(&self.text, searched.size);
        }
        self.apply(searched.size);

        Some(FitOutcome {
            size: searched.size,
            source: FitSource::Search,
            probes: searched.probes,
        })
    }

    // ── internals ───────────────────────────────────────────────────────────

    fn reconfigure(&mut self, update: impl FnOnce(&mut FitConstraints)) -> Option<FitOutcome> {
        update(&mut self.constraints);
        if let Err(e) = self.constraints.validate() {
            warn!("fit constraints violate preconditions: {e}");
        }
        self.invalidate();
        self.recompute()
    }

    /// Publishes a size without passing through any public setter.
    fn apply(&mut self, size: u32) {
        self.sink.apply_size(size);
    }
}
