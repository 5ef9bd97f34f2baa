//! Declarative descriptions of what the list and the footer show.
//!
//! The components only translate these into markup, so everything about content and enabled state
//! is decided here.
use super::{ActionKind, Channel, ChannelAction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelEntry {
    pub name: String,
    pub playing_now: String,
    pub actions: Vec<ChannelAction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub label: String,
    pub prev_disabled: bool,
}

pub fn render_channels(channels: &[Channel]) -> Vec<ChannelEntry> {
    channels
        .iter()
        .map(|channel| ChannelEntry {
            name: channel.name.clone(),
            playing_now: channel.playing_now.clone(),
            actions: ActionKind::ALL
                .iter()
                .map(|kind| ChannelAction {
                    kind: *kind,
                    url: channel.url.clone(),
                })
                .collect(),
        })
        .collect()
}

/// The next control is left alone, the client does not know how many pages there are.
pub fn render_pagination(page: u32) -> PaginationView {
    PaginationView {
        label: format!("Page {}", page),
        prev_disabled: page == 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jazz_fm() -> Channel {
        Channel {
            name: "Jazz FM".into(),
            playing_now: "Miles Davis".into(),
            url: "http://x/stream".into(),
        }
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert!(render_channels(&[]).is_empty());
    }

    #[test]
    fn one_block_per_channel_with_three_bound_actions() {
        let entries = render_channels(&[jazz_fm()]);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Jazz FM");
        assert_eq!(entries[0].playing_now, "Miles Davis");
        assert_eq!(
            entries[0]
                .actions
                .iter()
                .map(|a| a.kind)
                .collect::<Vec<_>>(),
            ActionKind::ALL.to_vec()
        );
        assert!(entries[0].actions.iter().all(|a| a.url == "http://x/stream"));
    }

    #[test]
    fn rerender_replaces_previous_entries() {
        let first = render_channels(&[jazz_fm(), jazz_fm()]);
        let second = render_channels(&[]);

        assert_eq!(first.len(), 2);
        assert!(second.is_empty());
    }

    #[test]
    fn keeps_server_order_and_raw_text() {
        let mut other = jazz_fm();
        other.name = "<b>Bold</b>".into();
        let entries = render_channels(&[other, jazz_fm()]);

        assert_eq!(entries[0].name, "<b>Bold</b>");
        assert_eq!(entries[1].name, "Jazz FM");
    }

    #[test]
    fn first_page_disables_previous() {
        assert_eq!(
            render_pagination(1),
            PaginationView {
                label: "Page 1".into(),
                prev_disabled: true
            }
        );
    }

    #[test]
    fn later_pages_enable_previous() {
        for page in [2, 3, 42] {
            let view = render_pagination(page);

            assert_eq!(view.label, format!("Page {}", page));
            assert!(!view.prev_disabled);
        }
    }
}
