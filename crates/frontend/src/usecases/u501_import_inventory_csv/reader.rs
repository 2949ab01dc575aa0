use contracts::usecases::u501_import_inventory_csv::ImportError;
use wasm_bindgen_futures::JsFuture;

/// Read a picked or dropped file as text
pub async fn read_file_text(file: &web_sys::File) -> Result<String, ImportError> {
    let value = JsFuture::from(file.text())
        .await
        .map_err(|e| ImportError::ReadFailure(format!("{:?}", e)))?;

    value
        .as_string()
        .ok_or_else(|| ImportError::ReadFailure("file content is not text".to_string()))
}
