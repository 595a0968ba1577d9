//! Path resolution for source and destination files.

use std::path::{Path, PathBuf};

use enczil_core::{decrypted_path, encrypted_path, EnczilError, Operation};

use crate::errors::CliError;

/// Resolve and check the input file.
pub fn resolve_source(file: &str) -> Result<PathBuf, CliError> {
    let path = PathBuf::from(file);
    if !path.exists() {
        return Err(CliError::not_found(
            format!("File not found: {}", path.display()),
            "Hint: Check the path and try again.",
        ));
    }
    if path.is_dir() {
        return Err(CliError::invalid_input(format!(
            "{} is a directory; only single files can be processed",
            path.display()
        )));
    }
    Ok(path)
}

/// Resolve the output path: the explicit `--output`, or the suffix convention.
pub fn resolve_destination(
    source: &Path,
    output: Option<&str>,
    suffix: &str,
    operation: Operation,
) -> Result<PathBuf, CliError> {
    if let Some(path) = output {
        return Ok(PathBuf::from(path));
    }
    let derived = match operation {
        Operation::Encrypt => encrypted_path(source, suffix),
        Operation::Decrypt => decrypted_path(source, suffix),
    };
    derived.map_err(|err| match err {
        EnczilError::Validation(message) if operation == Operation::Decrypt => {
            CliError::invalid_input_with_hint(
                message,
                "Hint: Pass --output to choose where the decrypted file goes.",
            )
        }
        other => CliError::from(other),
    })
}

/// Refuse to replace an existing file unless overwriting is allowed.
pub fn ensure_destination_free(destination: &Path, overwrite: bool) -> Result<(), CliError> {
    if destination.exists() && !overwrite {
        return Err(CliError::invalid_input_with_hint(
            format!("Output file already exists: {}", destination.display()),
            "Hint: Pass --force to overwrite it.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;
    use tempfile::tempdir;

    #[test]
    fn test_missing_source_is_not_found() {
        let err = resolve_source("/definitely/not/here.txt").unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn test_directory_source_is_invalid() {
        let dir = tempdir().unwrap();
        let err = resolve_source(dir.path().to_str().unwrap()).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_destination_defaults() {
        let enc = resolve_destination(Path::new("a/b.txt"), None, ".enc", Operation::Encrypt)
            .unwrap();
        assert_eq!(enc, PathBuf::from("a/b.txt.enc"));

        let dec = resolve_destination(Path::new("a/b.txt.enc"), None, ".enc", Operation::Decrypt)
            .unwrap();
        assert_eq!(dec, PathBuf::from("a/b.txt"));
    }

    #[test]
    fn test_explicit_output_wins() {
        let dest = resolve_destination(
            Path::new("a/b.bin"),
            Some("out/plain.bin"),
            ".enc",
            Operation::Decrypt,
        )
        .unwrap();
        assert_eq!(dest, PathBuf::from("out/plain.bin"));
    }

    #[test]
    fn test_decrypt_without_suffix_needs_output() {
        let err = resolve_destination(Path::new("b.bin"), None, ".enc", Operation::Decrypt)
            .unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
        assert!(err.to_string().contains("--output"));
    }

    #[test]
    fn test_existing_destination_requires_overwrite() {
        let dir = tempdir().unwrap();
        let existing = dir.path().join("taken");
        std::fs::write(&existing, b"x").unwrap();

        assert!(ensure_destination_free(&existing, false).is_err());
        assert!(ensure_destination_free(&existing, true).is_ok());
        assert!(ensure_destination_free(&dir.path().join("free"), false).is_ok());
    }
}
