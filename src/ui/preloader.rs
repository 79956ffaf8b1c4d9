/// Loading-indicator visibility, shown for the duration of each in-flight
/// search. `show`/`hide` are idempotent; the panels that host a spinner
/// simply read [`visible`](Preloader::visible) when they paint.
#[derive(Debug, Default)]
pub struct Preloader {
    visible: bool,
}

impl Preloader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
}
