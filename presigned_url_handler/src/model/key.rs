use uuid::Uuid;

/// Builds a fresh object key for `filename` in the format `<uuid v4>_<filename>`
pub fn generate_object_key(filename: &str) -> String {
    format!("{}_{}", Uuid::new_v4(), filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_prefixes_the_filename_with_a_uuid() {
        let key = generate_object_key("photo.png");

        let (id, filename) = key.split_once('_').unwrap();
        assert!(Uuid::parse_str(id).is_ok());
        assert_eq!(filename, "photo.png");
    }

    #[test]
    fn it_keeps_underscores_in_the_filename() {
        let key = generate_object_key("my_scan_final.pdf");
        assert!(key.ends_with("_my_scan_final.pdf"));
        assert_eq!(key.len(), 36 + 1 + "my_scan_final.pdf".len());
    }

    #[test]
    fn keys_are_unique_per_call() {
        assert_ne!(
            generate_object_key("photo.png"),
            generate_object_key("photo.png")
        );
    }
}
