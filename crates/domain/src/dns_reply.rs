use super::DnsAnswer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsReply {
    pub authoritative: bool,
    pub answers: Vec<DnsAnswer>,
}

impl DnsReply {
    pub fn new(authoritative: bool) -> Self {
        Self {
            authoritative,
            answers: Vec::new(),
        }
    }

    pub fn with_answer(mut self, answer: Option<DnsAnswer>) -> Self {
        self.answers.extend(answer);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
