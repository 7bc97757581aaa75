//! Rendering translation results for stdout.

use serde::Serialize;
use textcodec_core::{ErrorKind, Format, Translation, TranslationError};

#[derive(Debug, Serialize)]
struct Success<'a> {
    ok: bool,
    #[serde(flatten)]
    translation: &'a Translation,
}

#[derive(Debug, Serialize)]
struct Failure {
    ok: bool,
    kind: ErrorKind,
    error: String,
}

/// One line of output for one translation.
///
/// With `json`, a single JSON object: the flattened `Translation` plus
/// `"ok": true`, or `"ok": false` with the error kind and message.
pub fn render(result: &Result<Translation, TranslationError>, json: bool) -> String {
    if !json {
        return match result {
            Ok(translation) => format!("Translated text: {}", translation.output),
            Err(err) => format!("Error: {err}"),
        };
    }

    let rendered = match result {
        Ok(translation) => serde_json::to_string(&Success {
            ok: true,
            translation,
        }),
        Err(err) => serde_json::to_string(&Failure {
            ok: false,
            kind: err.kind(),
            error: err.to_string(),
        }),
    };
    rendered.unwrap_or_else(|e| format!("{{\"ok\":false,\"error\":\"{e}\"}}"))
}

pub fn render_formats(json: bool) -> String {
    if json {
        serde_json::to_string(&Format::ALL).unwrap_or_default()
    } else {
        Format::ALL
            .iter()
            .map(Format::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textcodec_core::Translator;

    #[test]
    fn plain_success_and_failure() {
        let ok = Translator::new().run("SOS", "TEXT", "MORSE");
        assert_eq!(render(&ok, false), "Translated text: ... --- ...");

        let err = Translator::new().run("x", "TEXT", "FOO");
        assert_eq!(render(&err, false), "Error: invalid format 'FOO'");
    }

    #[test]
    fn json_success_flattens_the_record() {
        let ok = Translator::new().run("E", "TEXT", "MORSE");
        let value: serde_json::Value = serde_json::from_str(&render(&ok, true)).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["source"], "TEXT");
        assert_eq!(value["destination"], "MORSE");
        assert_eq!(value["input"], "E");
        assert_eq!(value["output"], ".");
    }

    #[test]
    fn json_failure_carries_kind() {
        let err = Translator::new().run("1010", "BINARY", "TEXT");
        let value: serde_json::Value = serde_json::from_str(&render(&err, true)).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["kind"], "MALFORMED_INPUT");
    }

    #[test]
    fn formats_listing() {
        assert_eq!(render_formats(false), "TEXT\nBINARY\nMORSE");
        assert_eq!(render_formats(true), "[\"TEXT\",\"BINARY\",\"MORSE\"]");
    }
}
