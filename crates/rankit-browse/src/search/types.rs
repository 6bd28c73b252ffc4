/// Reply to a search operation.
///
/// `accepted` is false when the operation was silently dropped: a fetch was
/// already loading, or a continuation was requested with no cursor left.
#[derive(Debug, Clone, Copy)]
pub struct SearchAck {
    pub generation: u64,
    pub accepted: bool,
}
