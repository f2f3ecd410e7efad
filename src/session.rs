use image::{Rgb, RgbaImage};
use log::debug;
use std::collections::HashMap;

use crate::error::{LoadError, LoadResult};
use crate::images::compositor::composite;
use crate::images::loader::LoadedImage;
use crate::images::scaler::scale_to_fit;
use crate::layout::{ViewportLayout, bounding_box};
use crate::navigation::{NavigationPolicy, NavigationState};
use crate::render::block_encoder::{RenderedFrame, encode};
use crate::status_bar::{status_text, truncate_to_width};

/// Scaled image and its encoded frame, built together for one terminal size.
///
/// Keeping both in one entry means an index is either fully cached or not
/// cached at all.
#[derive(Debug, Clone)]
pub struct CachedView {
    pub terminal: (u16, u16),
    pub show_status: bool,
    pub scaled: RgbaImage,
    pub frame: RenderedFrame,
}

impl CachedView {
    fn build(
        image: &RgbaImage,
        terminal: (u16, u16),
        show_status: bool,
        background: Rgb<u8>,
    ) -> Self {
        let (terminal_width, terminal_height) = terminal;
        let (max_width, max_height) = bounding_box(terminal_width, terminal_height, show_status);
        let scaled = scale_to_fit(image, max_width, max_height);

        let layout = ViewportLayout::compute(
            terminal_width,
            terminal_height,
            scaled.width(),
            scaled.height(),
            show_status,
        );
        let canvas = composite(&scaled, background);
        let frame = encode(&canvas, layout.origin(), layout.offset_mode);
        debug!(
            "Built frame {}x{} at {:?} (offset: {}) for {terminal_width}x{terminal_height}",
            frame.width,
            frame.height,
            layout.origin(),
            layout.offset_mode
        );

        Self {
            terminal,
            show_status,
            scaled,
            frame,
        }
    }

    fn matches(&self, terminal: (u16, u16), show_status: bool) -> bool {
        self.terminal == terminal && self.show_status == show_status
    }
}

/// All state of one viewing session: the images, where we are, and the
/// per-image render cache.
pub struct Session {
    images: Vec<LoadedImage>,
    nav: NavigationState,
    background: Rgb<u8>,
    cache: HashMap<usize, CachedView>,
}

impl Session {
    pub fn new(
        images: Vec<LoadedImage>,
        policy: NavigationPolicy,
        show_status: bool,
        background: Rgb<u8>,
    ) -> LoadResult<Self> {
        if images.is_empty() {
            return Err(LoadError::EmptyInputSet);
        }
        let nav = NavigationState::new(images.len(), policy, show_status);
        Ok(Self {
            images,
            nav,
            background,
            cache: HashMap::new(),
        })
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn is_cached(&self, index: usize) -> bool {
        self.cache.contains_key(&index)
    }

    pub fn next(&mut self) -> bool {
        self.nav.next()
    }

    pub fn previous(&mut self) -> bool {
        self.nav.previous()
    }

    pub fn toggle_status(&mut self) {
        self.nav.toggle_status();
    }

    /// Record a terminal resize. Caches are dropped lazily on next access.
    pub fn resize(&mut self) {
        self.nav.resize();
    }

    pub fn needs_render(&self) -> bool {
        self.nav.needs_render()
    }

    pub fn mark_rendered(&mut self) {
        self.nav.mark_rendered();
    }

    /// The cached view of the current image for `terminal`, building it if
    /// missing or stale. A pending rescale drops every cached entry first;
    /// only the current image is rebuilt.
    pub fn current_view(&mut self, terminal: (u16, u16)) -> &CachedView {
        if self.nav.take_rescale() && !self.cache.is_empty() {
            debug!("Dropping {} cached frames", self.cache.len());
            self.cache.clear();
        }

        let index = self.nav.index();
        let show_status = self.nav.show_status();
        if self
            .cache
            .get(&index)
            .is_some_and(|view| !view.matches(terminal, show_status))
        {
            self.cache.remove(&index);
        }

        let Self {
            images,
            cache,
            background,
            ..
        } = self;
        cache.entry(index).or_insert_with(|| {
            CachedView::build(&images[index].image, terminal, show_status, *background)
        })
    }

    /// Status bar text for the current image, or `None` while it is hidden.
    pub fn status_line(&mut self, terminal: (u16, u16)) -> Option<String> {
        if !self.nav.show_status() {
            return None;
        }
        let index = self.nav.index();
        let count = self.nav.count();
        let scaled = self.current_view(terminal).scaled.dimensions();
        let current = &self.images[index];
        let text = status_text(
            index,
            count,
            &current.name,
            scaled,
            current.image.dimensions(),
        );
        Some(truncate_to_width(&text, terminal.0))
    }
}
