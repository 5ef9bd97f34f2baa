/// Current 1-based page of the browse path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page: u32,
}

impl PageState {
    pub fn new() -> Self {
        Self { page: 1 }
    }

    pub fn current(&self) -> u32 {
        self.page
    }

    /// Pages below 1 are clamped; there is no upper bound since the backend does not report a total.
    pub fn set(&mut self, page: u32) -> u32 {
        self.page = page.max(1);
        self.page
    }

    pub fn previous(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    pub fn next(&self) -> u32 {
        self.page.saturating_add(1)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}
