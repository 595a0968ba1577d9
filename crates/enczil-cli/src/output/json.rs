//! JSON output formatting.

use enczil_core::FileReport;

use crate::commands::HeaderSummary;

/// Convert a file report to JSON for output.
pub fn report_json(report: &FileReport) -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "operation": report.operation,
        "source": report.source,
        "destination": report.destination,
        "bytes_in": report.bytes_in,
        "bytes_out": report.bytes_out,
    })
}

/// Convert a header summary to JSON for output.
pub fn header_json(summary: &HeaderSummary) -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "path": summary.path,
        "file_size": summary.file_size,
        "salt": summary.salt,
        "nonce": summary.nonce,
        "tag": summary.tag,
        "ciphertext_len": summary.ciphertext_len,
        "plaintext_len": {
            "min": summary.plaintext_min,
            "max": summary.plaintext_max,
        },
        "cipher": summary.cipher,
        "kdf": summary.kdf,
        "iterations": summary.iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use enczil_core::Operation;
    use std::path::PathBuf;

    #[test]
    fn test_report_json_fields() {
        let report = FileReport {
            operation: Operation::Encrypt,
            source: PathBuf::from("notes.txt"),
            destination: PathBuf::from("notes.txt.enc"),
            bytes_in: 5,
            bytes_out: 64,
        };
        let value = report_json(&report);
        assert_eq!(value["status"], "ok");
        assert_eq!(value["operation"], "encrypt");
        assert_eq!(value["destination"], "notes.txt.enc");
        assert_eq!(value["bytes_out"], 64);
    }
}
