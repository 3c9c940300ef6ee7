use bytes::Bytes;

/// An image received from a client, not yet written anywhere.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub data: Bytes,
}
