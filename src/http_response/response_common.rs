/// Status reply the Reporting API answers mutating calls and failures
/// with: `{"result": "success"|"error", "message": "..."}`.
///
/// The client never inspects this shape itself; bodies come back to the
/// caller unmodified. It is provided so callers with the default `json`
/// format can decode the body without declaring the shape themselves.
#[derive(Debug, serde::Deserialize)]
pub struct StatusReply {
    result: String,
    message: Option<String>,
}

impl StatusReply {
    pub fn result(&self) -> &str { self.result.as_str() }
    pub fn message(&self) -> Option<&str> { self.message.as_deref() }
    pub fn is_error(&self) -> bool { self.result == "error" }
}

#[cfg(test)]
mod tests {
    use super::StatusReply;

    #[test]
    fn decodes_error_reply() {
        let reply: StatusReply =
            serde_json::from_str(r#"{"result":"error","message":"bad login"}"#).unwrap();
        assert!(reply.is_error());
        assert_eq!(reply.message(), Some("bad login"));
    }

    #[test]
    fn decodes_success_reply_without_message() {
        let reply: StatusReply = serde_json::from_str(r#"{"result":"success"}"#).unwrap();
        assert!(!reply.is_error());
        assert_eq!(reply.result(), "success");
        assert_eq!(reply.message(), None);
    }
}
