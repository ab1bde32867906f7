//! Payload of the file-attach affordance.
//!
//! The selected file is reported and discarded; nothing is uploaded or kept.

#[cfg(test)]
#[path = "attachment_test.rs"]
mod attachment_test;

/// Metadata of a file picked through the attach button.
#[derive(Clone, Debug, PartialEq)]
pub struct FileSelection {
    pub name: String,
    pub size: f64,
    pub mime: String,
}

impl FileSelection {
    #[cfg(feature = "csr")]
    pub fn from_file(file: &web_sys::File) -> Self {
        Self { name: file.name(), size: file.size(), mime: file.type_() }
    }

    /// One-line description for the console log.
    pub fn describe(&self) -> String {
        let mime = if self.mime.is_empty() { "unknown type" } else { self.mime.as_str() };
        format!("{} ({} bytes, {mime})", self.name, self.size)
    }
}

/// Log a selected file and return the logged line. The selection has no
/// further effect.
pub fn report_selection(selection: &FileSelection) -> String {
    let line = format!("selected file: {}", selection.describe());
    leptos::logging::log!("{line}");
    line
}
