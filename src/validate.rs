use crate::types::FileInfo;

/// Default upload ceiling, matching the server's request limit.
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("File size exceeds {}MB limit. Please choose a smaller file.", .limit / (1024 * 1024))]
    TooLarge { size: u64, limit: u64 },
    #[error("Invalid file type. Allowed types: {}", .allowed.join(", "))]
    DisallowedType { extension: String, allowed: Vec<String> },
}

/// Parsed form of an `<input accept="...">` attribute.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AcceptList(Vec<String>);

impl AcceptList {
    pub fn parse(accept: &str) -> Self {
        if accept.is_empty() {
            return Self::default();
        }
        Self(accept.split(',').map(|t| t.trim().to_string()).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries are compared verbatim; only the file side is lowercased.
    pub fn allows(&self, extension: &str) -> bool {
        self.0.iter().any(|t| t == extension)
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }
}

/// Extension of `name` as `.ext`, lowercased. A name without a dot is
/// treated as all extension.
pub fn dotted_extension(name: &str) -> String {
    let tail = name.rsplit('.').next().unwrap_or(name);
    format!(".{}", tail.to_lowercase())
}

/// Advisory client-side check. Size is checked before type.
pub fn validate_file(file: &FileInfo, accept: &AcceptList, max_bytes: u64) -> Result<(), ValidationError> {
    if file.size > max_bytes {
        return Err(ValidationError::TooLarge { size: file.size, limit: max_bytes });
    }
    if !accept.is_empty() {
        let extension = dotted_extension(&file.name);
        if !accept.allows(&extension) {
            return Err(ValidationError::DisallowedType {
                extension,
                allowed: accept.entries().to_vec(),
            });
        }
    }
    Ok(())
}

/// Result of handling a file selection, whichever way it arrived.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionOutcome {
    /// Nothing selected; leave the zone untouched.
    Empty,
    Accepted { label: String },
    /// The label is still shown, but the input must be cleared.
    Rejected { label: String, error: ValidationError },
}

pub fn selection_label(name: &str) -> String {
    format!("Selected: {name}")
}

pub fn evaluate_selection(first: Option<&FileInfo>, accept: &str, max_bytes: u64) -> SelectionOutcome {
    let Some(file) = first else { return SelectionOutcome::Empty };
    let label = selection_label(&file.name);
    match validate_file(file, &AcceptList::parse(accept), max_bytes) {
        Ok(()) => SelectionOutcome::Accepted { label },
        Err(error) => SelectionOutcome::Rejected { label, error },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64) -> FileInfo {
        FileInfo { name: name.into(), size }
    }

    #[test]
    fn test_oversized_rejected_regardless_of_type() {
        let accept = AcceptList::parse(".pdf,.docx");
        for name in ["resume.pdf", "resume.exe", "noext"] {
            let err = validate_file(&file(name, MAX_UPLOAD_BYTES + 1), &accept, MAX_UPLOAD_BYTES).unwrap_err();
            assert!(matches!(err, ValidationError::TooLarge { .. }), "{name}: {err:?}");
        }
        let err = validate_file(&file("a.csv", MAX_UPLOAD_BYTES + 1), &AcceptList::default(), MAX_UPLOAD_BYTES)
            .unwrap_err();
        assert_eq!(err.to_string(), "File size exceeds 16MB limit. Please choose a smaller file.");
    }

    #[test]
    fn test_exact_limit_is_accepted() {
        assert!(validate_file(&file("a.pdf", MAX_UPLOAD_BYTES), &AcceptList::default(), MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn test_extension_must_be_listed() {
        let accept = AcceptList::parse(".pdf, .docx");
        assert!(validate_file(&file("CV.PDF", 10), &accept, MAX_UPLOAD_BYTES).is_ok());
        assert!(validate_file(&file("cv.final.docx", 10), &accept, MAX_UPLOAD_BYTES).is_ok());

        let err = validate_file(&file("cv.txt", 10), &accept, MAX_UPLOAD_BYTES).unwrap_err();
        assert_eq!(err.to_string(), "Invalid file type. Allowed types: .pdf, .docx");
    }

    #[test]
    fn test_empty_accept_only_checks_size() {
        let accept = AcceptList::parse("");
        assert!(accept.is_empty());
        assert!(validate_file(&file("anything.bin", 1), &accept, MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn test_accept_entries_are_case_sensitive() {
        let accept = AcceptList::parse(".PDF");
        assert!(validate_file(&file("cv.pdf", 1), &accept, MAX_UPLOAD_BYTES).is_err());
    }

    #[test]
    fn test_dotted_extension() {
        assert_eq!(dotted_extension("report.CSV"), ".csv");
        assert_eq!(dotted_extension("archive.tar.gz"), ".gz");
        assert_eq!(dotted_extension("Makefile"), ".makefile");
        assert_eq!(dotted_extension("trailing."), ".");
    }

    #[test]
    fn test_selection_outcomes() {
        assert_eq!(evaluate_selection(None, ".csv", MAX_UPLOAD_BYTES), SelectionOutcome::Empty);

        let ok = file("data.csv", 2048);
        assert_eq!(
            evaluate_selection(Some(&ok), ".csv", MAX_UPLOAD_BYTES),
            SelectionOutcome::Accepted { label: "Selected: data.csv".into() }
        );

        let bad = file("data.xlsx", 2048);
        match evaluate_selection(Some(&bad), ".csv", MAX_UPLOAD_BYTES) {
            SelectionOutcome::Rejected { label, error } => {
                assert_eq!(label, "Selected: data.xlsx");
                assert!(matches!(error, ValidationError::DisallowedType { .. }));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }
}
