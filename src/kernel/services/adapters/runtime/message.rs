use crate::kernel::services::ports::LookupError;

/// A finished lookup, tagged with the request it answers.
#[derive(Debug)]
pub struct LookupMessage<T> {
    pub request_id: u64,
    pub outcome: Result<Vec<T>, LookupError>,
}
