use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub playing_now: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_backend_page() {
        let channels: Vec<Channel> = serde_json::from_str(
            r#"[
                {"name": "Jazz FM", "playing_now": "Miles Davis", "url": "http://x/stream", "listeners": 12},
                {"name": "Radio Swiss Classic", "playing_now": "", "url": "http://y/stream"}
            ]"#,
        )
        .unwrap();

        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].name, "Jazz FM");
        assert_eq!(channels[0].playing_now, "Miles Davis");
        assert_eq!(channels[1].url, "http://y/stream");
    }

    #[test]
    fn rejects_records_without_url() {
        let res = serde_json::from_str::<Vec<Channel>>(r#"[{"name": "a", "playing_now": "b"}]"#);

        assert!(res.is_err());
    }
}
