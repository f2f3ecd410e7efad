use serde::Deserialize;

/// What happens when stepping past either end of the image list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationPolicy {
    /// Stay on the first/last image.
    #[default]
    Clamp,
    /// Jump to the other end.
    Wrap,
}

/// Current position plus the dirty bits driving the render loop.
///
/// `needs_rescale` means every cached frame is stale (terminal resized or
/// status bar toggled). `needs_render` means the screen must be redrawn,
/// possibly from cache.
#[derive(Debug, Clone)]
pub struct NavigationState {
    index: usize,
    count: usize,
    policy: NavigationPolicy,
    show_status: bool,
    needs_render: bool,
    needs_rescale: bool,
}

impl NavigationState {
    /// `count` must be non-zero; a session never holds an empty image list.
    pub fn new(count: usize, policy: NavigationPolicy, show_status: bool) -> Self {
        debug_assert!(count > 0, "navigation over an empty image set");
        Self {
            index: 0,
            count,
            policy,
            show_status,
            needs_render: true,
            needs_rescale: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn policy(&self) -> NavigationPolicy {
        self.policy
    }

    pub fn show_status(&self) -> bool {
        self.show_status
    }

    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    pub fn needs_rescale(&self) -> bool {
        self.needs_rescale
    }

    /// Move to the next image. Returns whether the index changed.
    pub fn next(&mut self) -> bool {
        let target = if self.index + 1 < self.count {
            self.index + 1
        } else {
            match self.policy {
                NavigationPolicy::Clamp => self.index,
                NavigationPolicy::Wrap => 0,
            }
        };
        self.jump_to(target)
    }

    /// Move to the previous image. Returns whether the index changed.
    pub fn previous(&mut self) -> bool {
        let target = if self.index > 0 {
            self.index - 1
        } else {
            match self.policy {
                NavigationPolicy::Clamp => self.index,
                NavigationPolicy::Wrap => self.count - 1,
            }
        };
        self.jump_to(target)
    }

    fn jump_to(&mut self, target: usize) -> bool {
        if target == self.index {
            return false;
        }
        self.index = target;
        self.needs_render = true;
        true
    }

    /// The status bar changes the drawable height, so every frame is stale.
    pub fn toggle_status(&mut self) {
        self.show_status = !self.show_status;
        self.needs_rescale = true;
        self.needs_render = true;
    }

    /// Called from the event handler; recomputation happens in the loop.
    pub fn resize(&mut self) {
        self.needs_rescale = true;
        self.needs_render = true;
    }

    /// Clear the rescale bit, returning whether it was set.
    pub fn take_rescale(&mut self) -> bool {
        std::mem::take(&mut self.needs_rescale)
    }

    pub fn mark_rendered(&mut self) {
        self.needs_render = false;
    }
}
