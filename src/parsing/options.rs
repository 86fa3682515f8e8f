//! Processing options sent to MinerU alongside the uploaded file.

use std::fmt;

/// Multipart field carrying the document bytes.
pub const FILE_FIELD: &str = "file";

/// Strategy MinerU uses to extract content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMethod {
    /// Let MinerU decide between text extraction and OCR.
    #[default]
    Auto,
    /// Extract embedded text only.
    Txt,
    /// Force OCR.
    Ocr,
}

impl ParseMethod {
    /// Wire value understood by MinerU.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Txt => "txt",
            Self::Ocr => "ocr",
        }
    }
}

impl fmt::Display for ParseMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form fields controlling a MinerU conversion.
///
/// Only Markdown is requested back; every auxiliary artifact is switched off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Extraction strategy.
    pub parse_method: ParseMethod,
    /// Ask MinerU to dump JSON and Markdown to its output directory.
    pub is_json_md_dump: bool,
    /// Output directory on the MinerU host.
    pub output_dir: String,
    /// Include layout data in the response.
    pub return_layout: bool,
    /// Include document info in the response.
    pub return_info: bool,
    /// Include the content list in the response.
    pub return_content_list: bool,
    /// Include extracted images in the response.
    pub return_images: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            parse_method: ParseMethod::Auto,
            is_json_md_dump: false,
            output_dir: "/output/results".to_string(),
            return_layout: false,
            return_info: false,
            return_content_list: false,
            return_images: false,
        }
    }
}

impl ParseOptions {
    /// Text fields in the order they are appended to the multipart body.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("parse_method", self.parse_method.to_string()),
            ("is_json_md_dump", self.is_json_md_dump.to_string()),
            ("output_dir", self.output_dir.clone()),
            ("return_layout", self.return_layout.to_string()),
            ("return_info", self.return_info.to_string()),
            ("return_content_list", self.return_content_list.to_string()),
            ("return_images", self.return_images.to_string()),
        ]
    }

    /// Every multipart field name sent to MinerU, file part included.
    pub fn field_names(&self) -> Vec<&'static str> {
        std::iter::once(FILE_FIELD)
            .chain(self.text_fields().into_iter().map(|(name, _)| name))
            .collect()
    }
}
