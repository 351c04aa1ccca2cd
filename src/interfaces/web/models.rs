use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub photos_loaded: usize,
    pub drive_folder: String,
    pub base_url: String,
    pub environment: String,
    pub timestamp: String,
}

/// Photo URL groups sent in the `all-photos` bootstrap message
///
/// `styled` and `merged` are reserved groups and currently always empty.
#[derive(Debug, Default, Serialize)]
pub struct PhotoGroups {
    pub regular: Vec<String>,
    pub styled: Vec<String>,
    pub merged: Vec<String>,
}

impl PhotoGroups {
    pub fn regular(urls: Vec<String>) -> Self {
        Self {
            regular: urls,
            ..Self::default()
        }
    }
}

/// Server-to-client WebSocket messages
#[derive(Debug, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum WireMessage {
    /// Full current snapshot, sent once on connect
    AllPhotos(PhotoGroups),
    /// Proxy URL of a newly detected photo
    NewPhoto(String),
    /// File id of a photo that disappeared from the folder
    PhotoRemoved(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_message_event_names() {
        let msg = WireMessage::NewPhoto("http://localhost:8080/image/f1".to_string());
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["event"], "new-photo");
        assert_eq!(json["data"], "http://localhost:8080/image/f1");

        let msg = WireMessage::PhotoRemoved("f1".to_string());
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["event"], "photo-removed");
        assert_eq!(json["data"], "f1");
    }

    #[test]
    fn test_all_photos_payload_shape() {
        let msg = WireMessage::AllPhotos(PhotoGroups::regular(vec![
            "http://localhost:8080/image/f1".to_string(),
        ]));
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["event"], "all-photos");
        assert_eq!(json["data"]["regular"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"]["styled"].as_array().unwrap().len(), 0);
        assert_eq!(json["data"]["merged"].as_array().unwrap().len(), 0);
    }
}
