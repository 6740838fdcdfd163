//! MD5 and SHA-1 digest kernels.

use cipherlab_core::digest::{md5_hex, sha1_hex};
use cipherlab_core::{str_field, KernelResult, Params, Trace};

pub fn run_md5(params: &Params) -> KernelResult {
    digest_trace(str_field(params, "text"), md5_hex)
}

pub fn run_sha1(params: &Params) -> KernelResult {
    digest_trace(str_field(params, "text"), sha1_hex)
}

/// Empty text is allowed; the narration reports length and hex digest.
fn digest_trace(text: &str, digest: fn(&str) -> String) -> KernelResult {
    let digest = digest(text);
    let steps = vec![
        format!("Message length: {} chars", text.chars().count()),
        format!("Digest: {digest}"),
    ];
    Ok(Trace {
        output: digest,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: serde_json::Value) -> Params {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_md5_empty_text() {
        let trace = run_md5(&bag(json!({}))).unwrap();
        assert_eq!(trace.output, "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(trace.steps[0], "Message length: 0 chars");
    }

    #[test]
    fn test_sha1_empty_text() {
        let trace = run_sha1(&bag(json!({"text": ""}))).unwrap();
        assert_eq!(trace.output, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn test_digest_is_over_raw_text_not_normalized() {
        let trace = run_md5(&bag(json!({"text": "abc"}))).unwrap();
        assert_eq!(trace.output, "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(trace.steps[0], "Message length: 3 chars");
    }

    #[test]
    fn test_length_counts_characters() {
        let trace = run_sha1(&bag(json!({"text": "héllo"}))).unwrap();
        assert_eq!(trace.steps[0], "Message length: 5 chars");
    }
}
