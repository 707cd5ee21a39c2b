use std::fmt;

use url::form_urlencoded;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The different kinds of bodies to send.
///
/// *Internal API*
pub(crate) enum Payload {
    Empty,
    /// Url-encoded form, already serialized.
    Form(String),
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Payload::Empty => write!(f, "Empty"),
            Payload::Form(t) => write!(f, "Form({})", t),
        }
    }
}

impl Default for Payload {
    fn default() -> Self {
        Payload::Empty
    }
}

impl Payload {
    /// Encode form pairs as `k=v&k=v`, keeping their order.
    ///
    /// No pairs still gives a form, just an empty one, so a POST always
    /// carries its content headers.
    pub fn form<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator,
        I::Item: std::borrow::Borrow<(K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        Payload::Form(encoded)
    }

    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Payload::Empty => None,
            Payload::Form(_) => Some(FORM_CONTENT_TYPE),
        }
    }

    /// Exact number of bytes [`as_bytes`](Payload::as_bytes) yields.
    pub fn size(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Empty => &[],
            Payload::Form(s) => s.as_bytes(),
        }
    }
}
