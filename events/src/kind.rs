use crate::naming::to_snake_case;
use std::fmt;
use std::sync::OnceLock;

/// The closed set of event kinds a stream can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The input message, as given.
    Echo,
    /// The input message with its characters reversed.
    ReverseEcho,
}

impl EventKind {
    pub const ALL: [EventKind; 2] = [EventKind::Echo, EventKind::ReverseEcho];

    /// The kind's identifier in CapitalizedWords form.
    pub fn declared_name(self) -> &'static str {
        match self {
            EventKind::Echo => "Echo",
            EventKind::ReverseEcho => "ReverseEcho",
        }
    }

    /// The SSE event name for this kind, derived once from `declared_name`
    /// and cached for the life of the process.
    pub fn event_name(self) -> &'static str {
        static EVENT_NAMES: OnceLock<[String; EventKind::ALL.len()]> = OnceLock::new();

        let names = EVENT_NAMES
            .get_or_init(|| EventKind::ALL.map(|kind| to_snake_case(kind.declared_name())));
        names[self.index()].as_str()
    }

    fn index(self) -> usize {
        match self {
            EventKind::Echo => 0,
            EventKind::ReverseEcho => 1,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.event_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_snake_case_of_declared_names() {
        assert_eq!(EventKind::Echo.event_name(), "echo");
        assert_eq!(EventKind::ReverseEcho.event_name(), "reverse_echo");
    }

    #[test]
    fn test_event_name_is_stable_across_calls() {
        let first = EventKind::ReverseEcho.event_name();
        let second = EventKind::ReverseEcho.event_name();
        assert_eq!(first, second);
        // Cached: both calls hand out the same backing string.
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_distinct_kinds_have_distinct_names() {
        assert_ne!(
            EventKind::Echo.event_name(),
            EventKind::ReverseEcho.event_name()
        );
    }

    #[test]
    fn test_all_lists_every_kind_at_its_index() {
        for (i, kind) in EventKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_display_uses_event_name() {
        assert_eq!(EventKind::ReverseEcho.to_string(), "reverse_echo");
    }
}
