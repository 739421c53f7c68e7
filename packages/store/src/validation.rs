//! Receipt file whitelist.
//!
//! Only images the back office can preview are accepted: `.png`, `.jpg` and
//! `.jpeg`. The check is a boundary filter on the name and the reported MIME
//! type, not content sniffing.

/// Accepted receipt extensions, lowercase.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

const ACCEPTED_MIME_TYPES: [&str; 3] = ["image/png", "image/jpg", "image/jpeg"];

/// Message shown when a receipt is refused.
pub const REJECTED_FILE_MESSAGE: &str =
    "Seuls les fichiers au format .jpg, .jpeg ou .png sont acceptés.";

/// Lowercased extension of `name`, if it has one.
pub fn file_extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Whether a picked file may be uploaded as a receipt.
///
/// The extension must be whitelisted. When the platform reports a MIME type
/// it must be an accepted image type as well; an empty type is ignored.
pub fn is_accepted_file(name: &str, mime: Option<&str>) -> bool {
    let extension_ok = file_extension(name)
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()));
    let mime_ok = match mime.map(str::trim) {
        None | Some("") => true,
        Some(m) => ACCEPTED_MIME_TYPES.contains(&m.to_ascii_lowercase().as_str()),
    };
    extension_ok && mime_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_whitelisted_images() {
        assert!(is_accepted_file("sample.jpg", Some("image/jpg")));
        assert!(is_accepted_file("sample.jpeg", Some("image/jpeg")));
        assert!(is_accepted_file("scan.PNG", None));
        assert!(is_accepted_file("receipt.final.png", Some("")));
    }

    #[test]
    fn test_rejects_other_types() {
        assert!(!is_accepted_file("sample.txt", Some("text/plain")));
        assert!(!is_accepted_file("facture.pdf", None));
        assert!(!is_accepted_file("png", None));
        assert!(!is_accepted_file(".png", None));
        assert!(!is_accepted_file("sample.", None));
    }

    #[test]
    fn test_rejects_mismatched_mime() {
        assert!(!is_accepted_file("sample.png", Some("application/pdf")));
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("a.JpEg").as_deref(), Some("jpeg"));
        assert_eq!(file_extension("noext"), None);
    }
}
