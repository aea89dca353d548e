use crate::kind::EventKind;

/// A payload tagged with its event kind and its position in the source that
/// produced it.
///
/// `sequence_id` is `None` until a source stamps the envelope. Ids are scoped
/// to one source: two merged sources both start at 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<P> {
    pub kind: EventKind,
    pub sequence_id: Option<u64>,
    pub payload: P,
}

impl<P> Envelope<P> {
    /// Wraps `payload` without assigning a sequence id.
    pub fn create(kind: EventKind, payload: P) -> Self {
        Self {
            kind,
            sequence_id: None,
            payload,
        }
    }

    pub fn with_sequence_id(mut self, sequence_id: u64) -> Self {
        self.sequence_id = Some(sequence_id);
        self
    }

    pub fn event_name(&self) -> &'static str {
        self.kind.event_name()
    }
}
