use rocket::serde::Serialize;

/// Body of every record endpoint: the record itself, or a plain JSON string
/// when the request was rejected before reaching the store.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ApiReply<T> {
    Record(T),
    Message(String),
}

impl<T> ApiReply<T> {
    pub fn message(msg: impl Into<String>) -> Self {
        ApiReply::Message(msg.into())
    }
}
