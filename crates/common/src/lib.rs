//! Pieces shared by every crate in the workspace: log setup and the small
//! JSON bodies that more than one layer needs to agree on.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_body_serializes_to_message_field() {
        let body = types::MessageBody::new("album not found");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "album not found" }));
    }
}
