use super::{
    render_channels, render_pagination, Channel, ChannelEntry, ListRequest, PageState,
    PaginationView, RequestSequencer, RequestToken,
};

/// Everything the channel directory view holds between renders.
#[derive(Debug)]
pub struct DirectoryState {
    page: PageState,
    sequencer: RequestSequencer,
    entries: Vec<ChannelEntry>,
    footer_page: u32,
}

/// Outcome of feeding a response back into the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Rendered,
    /// The latest request failed; the list keeps its last rendered content.
    Failed,
    Stale,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self {
            page: PageState::new(),
            sequencer: RequestSequencer::default(),
            entries: Vec::new(),
            footer_page: 1,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.page.current()
    }

    pub fn entries(&self) -> &[ChannelEntry] {
        &self.entries
    }

    pub fn pagination(&self) -> PaginationView {
        render_pagination(self.footer_page)
    }

    pub fn load_channels(&mut self, page: u32) -> (RequestToken, ListRequest) {
        (self.sequencer.issue(), ListRequest::Browse(page))
    }

    pub fn search_channels(&mut self, query: &str) -> (RequestToken, ListRequest) {
        (self.sequencer.issue(), ListRequest::Search(query.to_string()))
    }

    pub fn change_page(&mut self, page: u32) -> (RequestToken, ListRequest) {
        let page = self.page.set(page);

        self.load_channels(page)
    }

    pub fn previous_page(&mut self) -> (RequestToken, ListRequest) {
        self.change_page(self.page.previous())
    }

    pub fn next_page(&mut self) -> (RequestToken, ListRequest) {
        self.change_page(self.page.next())
    }

    pub fn search_input(&mut self, value: &str, min_length: usize) -> (RequestToken, ListRequest) {
        match ListRequest::from_search_input(value, self.page.current(), min_length) {
            ListRequest::Search(query) => self.search_channels(&query),
            ListRequest::Browse(page) => self.load_channels(page),
        }
    }

    /// Replaces the list (and for browse requests the footer) unless a newer request was issued meanwhile.
    pub fn apply(
        &mut self,
        token: RequestToken,
        request: &ListRequest,
        channels: &[Channel],
    ) -> Applied {
        if !self.sequencer.is_latest(token) {
            return Applied::Stale;
        }

        self.entries = render_channels(channels);

        if let Some(page) = request.footer_page() {
            self.footer_page = page;
        }

        Applied::Rendered
    }

    /// Checks a failed response against the latest issued request without touching the list.
    pub fn fail(&self, token: RequestToken) -> Applied {
        match self.sequencer.is_latest(token) {
            true => Applied::Failed,
            false => Applied::Stale,
        }
    }
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(name: &str) -> Channel {
        Channel {
            name: name.into(),
            playing_now: "something".into(),
            url: format!("http://x/{}", name),
        }
    }

    #[test]
    fn short_input_reloads_the_current_page() {
        let mut state = DirectoryState::new();
        state.change_page(3);

        let (_, request) = state.search_input("ja", 2);

        assert_eq!(request, ListRequest::Browse(3));
    }

    #[test]
    fn long_input_searches() {
        let mut state = DirectoryState::new();

        let (_, request) = state.search_input("jazz", 2);

        assert_eq!(request, ListRequest::Search("jazz".into()));
        assert_eq!(request.path(""), "/search?query=jazz");
    }

    #[test]
    fn change_page_back_to_first() {
        let mut state = DirectoryState::new();
        let (token, request) = state.change_page(3);
        state.apply(token, &request, &[channel("a")]);
        assert_eq!(state.pagination().label, "Page 3");
        assert!(!state.pagination().prev_disabled);

        let (token, request) = state.change_page(1);

        assert_eq!(state.current_page(), 1);
        assert_eq!(request, ListRequest::Browse(1));
        assert_eq!(state.apply(token, &request, &[channel("b")]), Applied::Rendered);
        assert_eq!(state.pagination().label, "Page 1");
        assert!(state.pagination().prev_disabled);
    }

    #[test]
    fn search_results_leave_the_footer_alone() {
        let mut state = DirectoryState::new();
        let (token, request) = state.change_page(2);
        state.apply(token, &request, &[channel("a")]);

        let (token, request) = state.search_input("jazz", 2);
        state.apply(token, &request, &[channel("jazz"), channel("jazz2")]);

        assert_eq!(state.entries().len(), 2);
        assert_eq!(state.pagination().label, "Page 2");
    }

    #[test]
    fn slow_older_response_is_dropped() {
        let mut state = DirectoryState::new();
        let (old_token, old_request) = state.search_input("jaz", 2);
        let (new_token, new_request) = state.search_input("jazz", 2);

        assert_eq!(
            state.apply(new_token, &new_request, &[channel("jazz")]),
            Applied::Rendered
        );
        assert_eq!(
            state.apply(old_token, &old_request, &[channel("a"), channel("b")]),
            Applied::Stale
        );
        assert_eq!(state.entries().len(), 1);
        assert_eq!(state.entries()[0].name, "jazz");
    }

    #[test]
    fn only_the_latest_failure_counts() {
        let mut state = DirectoryState::new();
        let (token, request) = state.load_channels(1);
        state.apply(token, &request, &[channel("a")]);
        let (old_token, _) = state.search_input("jaz", 2);
        let (new_token, new_request) = state.search_input("jazz", 2);
        state.apply(new_token, &new_request, &[channel("jazz")]);

        assert_eq!(state.fail(old_token), Applied::Stale);
        assert_eq!(state.fail(new_token), Applied::Failed);
        assert_eq!(state.entries().len(), 1);
        assert_eq!(state.entries()[0].name, "jazz");
    }

    #[test]
    fn empty_response_clears_the_list() {
        let mut state = DirectoryState::new();
        let (token, request) = state.load_channels(1);
        state.apply(token, &request, &[channel("a")]);

        let (token, request) = state.search_input("nothing matches", 2);
        state.apply(token, &request, &[]);

        assert!(state.entries().is_empty());
    }

    #[test]
    fn previous_and_next_move_one_page() {
        let mut state = DirectoryState::new();

        assert_eq!(state.next_page().1, ListRequest::Browse(2));
        assert_eq!(state.next_page().1, ListRequest::Browse(3));
        assert_eq!(state.previous_page().1, ListRequest::Browse(2));
        assert_eq!(state.current_page(), 2);
    }
}
