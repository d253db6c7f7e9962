use crate::Entry;
use crate::KvCommand;

/// Hands out consecutive log entries carrying `set` commands
pub struct EntryBuilder {
    index: u64,
    term: u64,
}

impl EntryBuilder {
    pub fn new(
        start_index: u64,
        term: u64,
    ) -> Self {
        Self {
            index: start_index,
            term,
        }
    }

    pub fn set(
        self,
        key: &str,
        value: &str,
    ) -> (Self, Entry) {
        let command = KvCommand::set(key, value).encode().expect("encode command");
        self.raw(&command)
    }

    /// Entry with an arbitrary payload, for malformed-command cases
    pub fn raw(
        mut self,
        data: &[u8],
    ) -> (Self, Entry) {
        let entry = Entry::new(self.index, self.term, data.to_vec());
        self.index += 1;
        (self, entry)
    }
}
