/// Side effects requested by the store; the widget shell carries them out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<T> {
    StartLookup { request_id: u64, query: String },
    CancelLookup { request_id: u64 },
    ItemSelected(T),
}
