use chrono::{DateTime, Utc};
use lambda_runtime::tracing;
use serde::{Deserialize, Serialize};

/// Extensions of files we send notifications for, matched case insensitively
pub const ALLOWED_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".pdf"];

pub const NOTIFICATION_SUBJECT: &str = "DevOps Accelerator - New File Uploaded";

/// Checks the lowercased key against [ALLOWED_EXTENSIONS]
pub fn is_valid_file_type(key: &str) -> bool {
    let key = key.to_lowercase();
    ALLOWED_EXTENSIONS.iter().any(|ext| key.ends_with(ext))
}

/// S3 event keys are form encoded, e.g. `my+photo%281%29.png` for `my photo(1).png`.
/// Falls back to the raw key if it does not decode to utf-8.
pub fn decode_object_key(raw: &str) -> String {
    let plus_decoded = raw.replace('+', " ");
    match urlencoding::decode(&plus_decoded) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            tracing::warn!(error=?e, key=%raw, "unable to decode key");
            raw.to_string()
        }
    }
}

/// The message published for a valid upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadNotification {
    pub subject: &'static str,
    pub message: String,
}

impl UploadNotification {
    pub fn new(key: &str, bucket: &str, uploaded_at: DateTime<Utc>) -> Self {
        let timestamp = uploaded_at.format("%Y-%m-%d %H:%M:%S UTC");
        Self {
            subject: NOTIFICATION_SUBJECT,
            message: format!(
                "A file has been uploaded:\n\nFile: {key}\nTime: {timestamp}\nBucket: {bucket}"
            ),
        }
    }
}

/// The result of handling an upload event.
/// Informational only, nothing consumes it besides the lambda logs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub status_code: u16,
    pub body: String,
}

impl NotificationResponse {
    pub fn processed(key: &str) -> Self {
        Self {
            status_code: 200,
            body: format!("File {key} processed successfully."),
        }
    }

    pub fn unsupported_file_type(key: &str) -> Self {
        Self {
            status_code: 400,
            body: format!("Unsupported file type uploaded: {key}"),
        }
    }

    pub fn unauthorized_bucket(bucket: &str) -> Self {
        Self {
            status_code: 403,
            body: format!("File uploaded to unauthorized bucket: {bucket}"),
        }
    }

    pub fn no_records() -> Self {
        Self {
            status_code: 400,
            body: "Event contained no records".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn it_accepts_allowed_extensions_in_any_case() {
        for key in [
            "a.jpg",
            "a.jpeg",
            "a.png",
            "a.pdf",
            "uuid_Scan.PDF",
            "IMG_0001.JPG",
            "holiday.Jpeg",
        ] {
            assert!(is_valid_file_type(key), "{key}");
        }
    }

    #[test]
    fn it_rejects_everything_else() {
        for key in [
            "a.exe",
            "a.gif",
            "a.png.exe",
            "pdf",
            "apng",
            "a.pdf ",
            "",
        ] {
            assert!(!is_valid_file_type(key), "{key}");
        }
    }

    #[test]
    fn it_decodes_form_encoded_keys() {
        assert_eq!(
            decode_object_key("abc_my+photo%281%29.png"),
            "abc_my photo(1).png"
        );
        assert_eq!(decode_object_key("abc_plain.pdf"), "abc_plain.pdf");
        assert_eq!(decode_object_key("abc_100%25.pdf"), "abc_100%.pdf");
    }

    #[test]
    fn it_keeps_keys_that_are_not_utf8() {
        assert_eq!(decode_object_key("abc_%FF.png"), "abc_%FF.png");
    }

    #[test]
    fn notification_names_key_time_and_bucket() {
        let uploaded_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 3, 7).unwrap();

        let notification = UploadNotification::new("abc_a.pdf", "uploads", uploaded_at);

        assert_eq!(notification.subject, "DevOps Accelerator - New File Uploaded");
        assert_eq!(
            notification.message,
            "A file has been uploaded:\n\nFile: abc_a.pdf\nTime: 2024-05-01 09:03:07 UTC\nBucket: uploads"
        );
    }

    #[test]
    fn response_serializes_like_a_lambda_proxy_result() {
        let response = NotificationResponse::unauthorized_bucket("wrong-bucket");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "statusCode": 403,
                "body": "File uploaded to unauthorized bucket: wrong-bucket"
            })
        );
        assert!(!response.is_success());
        assert!(NotificationResponse::processed("a.png").is_success());
    }
}
