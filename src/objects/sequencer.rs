/// Token handed out for every list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Keeps track of the latest issued list request so that slower, older responses can be dropped.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_request_wins() {
        let mut sequencer = RequestSequencer::default();
        let first = sequencer.issue();
        let second = sequencer.issue();

        assert!(first < second);
        assert!(!sequencer.is_latest(first));
        assert!(sequencer.is_latest(second));
    }

    #[test]
    fn nothing_issued_accepts_nothing() {
        let mut other = RequestSequencer::default();
        let token = other.issue();

        assert!(!RequestSequencer::default().is_latest(token));
    }
}
