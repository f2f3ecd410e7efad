pub mod test_helpers {
    use crate::event_source::{Event, KeyCode, KeyModifiers, SimulatedEventSource};
    use crate::images::compositor::DEFAULT_BACKGROUND;
    use crate::images::loader::LoadedImage;
    use crate::navigation::NavigationPolicy;
    use crate::session::Session;
    use image::{Rgba, RgbaImage};
    use std::path::{Path, PathBuf};

    /// Builder for creating test scenarios with simulated user input
    pub struct TestScenarioBuilder {
        script: Vec<Option<Event>>,
    }

    impl Default for TestScenarioBuilder {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TestScenarioBuilder {
        pub fn new() -> Self {
            Self { script: Vec::new() }
        }

        /// Add a character key press
        pub fn press_char(mut self, c: char) -> Self {
            self.script.push(Some(SimulatedEventSource::char_key(c)));
            self
        }

        pub fn press_right(mut self) -> Self {
            self.script.push(Some(SimulatedEventSource::key_event(
                KeyCode::Right,
                KeyModifiers::empty(),
            )));
            self
        }

        pub fn press_left(mut self) -> Self {
            self.script.push(Some(SimulatedEventSource::key_event(
                KeyCode::Left,
                KeyModifiers::empty(),
            )));
            self
        }

        pub fn toggle_status(self) -> Self {
            self.press_char('s')
        }

        /// The terminal changed size
        pub fn resize(mut self, columns: u16, rows: u16) -> Self {
            self.script.push(Some(SimulatedEventSource::resize(columns, rows)));
            self
        }

        /// A poll that times out without input
        pub fn wait(mut self) -> Self {
            self.script.push(None);
            self
        }

        pub fn quit(self) -> Self {
            self.press_char('q')
        }

        pub fn build(self) -> SimulatedEventSource {
            SimulatedEventSource::from_script(self.script)
        }
    }

    pub fn solid_image(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(color))
    }

    /// Session over named images with the default white background.
    pub fn session_with(
        images: Vec<(&str, RgbaImage)>,
        policy: NavigationPolicy,
        show_status: bool,
    ) -> Session {
        let images = images
            .into_iter()
            .map(|(name, image)| LoadedImage::new(name, image))
            .collect();
        Session::new(images, policy, show_status, DEFAULT_BACKGROUND)
            .expect("test session needs at least one image")
    }

    /// Save `image` as a PNG under `dir`
    pub fn write_png(dir: &Path, name: &str, image: &RgbaImage) -> PathBuf {
        let path = dir.join(name);
        image.save(&path).expect("failed to write test image");
        path
    }
}
