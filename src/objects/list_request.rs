/// One of the two ways the list area can be filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRequest {
    Browse(u32),
    Search(String),
}

impl ListRequest {
    /// Maps the search field value to a request.
    ///
    /// A value longer than `min_length` searches for exactly that value. Anything shorter (including an
    /// emptied field) falls back to the current browse page. Length counts UTF-16 code units, like the
    /// browser does for `input.value.length`.
    pub fn from_search_input(value: &str, current_page: u32, min_length: usize) -> Self {
        match value.encode_utf16().count() > min_length {
            true => ListRequest::Search(value.to_string()),
            false => ListRequest::Browse(current_page),
        }
    }

    /// Path and query for the request, relative to `api_base`.
    pub fn path(&self, api_base: &str) -> String {
        match self {
            ListRequest::Browse(page) => format!(
                "{}/channels?{}",
                api_base,
                encode_query_pairs(&[("page", &page.to_string())])
            ),
            ListRequest::Search(query) => format!(
                "{}/search?{}",
                api_base,
                encode_query_pairs(&[("query", query)])
            ),
        }
    }

    /// Only browse responses move the pagination footer.
    pub fn footer_page(&self) -> Option<u32> {
        match self {
            ListRequest::Browse(page) => Some(*page),
            ListRequest::Search(_) => None,
        }
    }
}

fn encode_query_pairs(pairs: &[(&str, &str)]) -> String {
    let mut tmp = url::form_urlencoded::Serializer::new(String::new());

    for (key, value) in pairs {
        tmp.append_pair(key, value);
    }

    tmp.finish()
}
