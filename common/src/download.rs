//! 画像ダウンロード用の命名とdata URL変換

/// APIが返すBase64 PNGに付けるdata URLプレフィックス
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// ダウンロード時のファイル名（1始まり）
///
/// ```
/// use pdf_extractor_common::download_file_name;
///
/// assert_eq!(download_file_name(2), "extracted_image_3.png");
/// ```
pub fn download_file_name(index: usize) -> String {
    format!("extracted_image_{}.png", index + 1)
}

/// 表示・リンク用のdata URL
///
/// すでにdata URLの場合はそのまま返す
pub fn image_data_url(image_data: &str) -> String {
    if image_data.starts_with("data:") {
        image_data.to_string()
    } else {
        format!("{}{}", PNG_DATA_URL_PREFIX, image_data)
    }
}

/// data URLならBase64部分を取り出す。プレフィックスなしならそのまま
pub fn strip_data_url(image_data: &str) -> &str {
    if image_data.starts_with("data:") {
        image_data.split_once(',').map(|(_, b64)| b64).unwrap_or("")
    } else {
        image_data
    }
}

/// 画像のalt属性
pub fn image_alt(index: usize) -> String {
    format!("Extracted {}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_file_name_is_one_based() {
        assert_eq!(download_file_name(0), "extracted_image_1.png");
        assert_eq!(download_file_name(2), "extracted_image_3.png");
        assert_eq!(download_file_name(99), "extracted_image_100.png");
    }

    #[test]
    fn test_image_data_url_adds_prefix() {
        assert_eq!(image_data_url("iVBORw0KGgo="), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_image_data_url_keeps_existing_prefix() {
        let url = "data:image/jpeg;base64,/9j/4AAQ";
        assert_eq!(image_data_url(url), url);
    }

    #[test]
    fn test_strip_data_url() {
        assert_eq!(strip_data_url("data:image/png;base64,iVBORw0KGgo="), "iVBORw0KGgo=");
        assert_eq!(strip_data_url("iVBORw0KGgo="), "iVBORw0KGgo=");
        assert_eq!(strip_data_url("data:broken"), "");
    }

    #[test]
    fn test_image_alt() {
        assert_eq!(image_alt(0), "Extracted 1");
    }
}
