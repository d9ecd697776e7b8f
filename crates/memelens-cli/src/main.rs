//! memelens-cli: classify meme images from the command line.
//!
//! Feeds each file through the same upload widget logic as the web app
//! (content-type check, submission, badge rendering) against a running
//! classification service, one file at a time.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin memelens-cli -- [OPTIONS] <FILES>...
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use memelens_client::PredictClient;
use memelens_core::{
    BadgeStyle, SelectedFile, Submission, UploadWidget, VisualState, WidgetConfig, data_uri,
};
use serde::Serialize;

/// Content type used when the extension is not a known image format.
const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

/// Classify meme images as political or not.
///
/// Each file is checked and submitted exactly like a file dropped onto
/// the web widget. Exits non-zero if any file is rejected or fails.
#[derive(Parser)]
#[command(name = "memelens-cli", version)]
struct Cli {
    /// Image files to classify (PNG, JPEG, BMP, WebP, GIF).
    #[arg(required_unless_present = "check")]
    files: Vec<PathBuf>,

    /// Base URL of the classification service.
    #[arg(long, default_value = "http://localhost:8000")]
    server: String,

    /// Classification endpoint, relative to `--server` or absolute.
    #[arg(long)]
    endpoint: Option<String>,

    /// Only check that the service is up.
    #[arg(long)]
    check: bool,

    /// Include the preview `data:` URI in the output.
    #[arg(long)]
    preview: bool,

    /// Print one JSON object per file instead of human-readable lines.
    #[arg(long)]
    json: bool,

    /// Full widget config as a JSON string.
    ///
    /// Fields left out keep their defaults. `--endpoint` still overrides
    /// the config's endpoint.
    #[arg(long)]
    config_json: Option<String>,
}

/// Outcome for one file.
#[derive(Debug, Serialize)]
struct Report {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    prediction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<BadgeStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview: Option<String>,
}

impl Report {
    const fn failed(&self) -> bool {
        self.error.is_some()
    }

    fn line(&self) -> String {
        match (&self.prediction, self.style, &self.error) {
            (Some(prediction), Some(style), None) => {
                format!("{}: {prediction} [{}]", self.file, style.class())
            }
            (_, _, Some(error)) => format!("{}: error: {error}", self.file),
            _ => format!("{}: no result", self.file),
        }
    }
}

/// Declared content type for `path`, derived from its extension.
fn content_type_for(path: &Path) -> &'static str {
    image::ImageFormat::from_path(path).map_or(UNKNOWN_CONTENT_TYPE, |f| f.to_mime_type())
}

/// Build the widget config from `--config-json` and `--endpoint`.
fn build_config(cli: &Cli) -> Result<WidgetConfig, String> {
    let mut config = match cli.config_json {
        Some(ref json) => serde_json::from_str(json)
            .map_err(|e| format!("Error parsing --config-json: {e}"))?,
        None => WidgetConfig::default(),
    };
    if let Some(ref endpoint) = cli.endpoint {
        config.endpoint.clone_from(endpoint);
    }
    Ok(config)
}

/// Run one file through the widget and the service.
async fn classify_file(
    widget: &mut UploadWidget<VisualState>,
    client: &PredictClient,
    path: &Path,
    with_preview: bool,
) -> Report {
    let display = path.display().to_string();
    let mut report = Report {
        file: display.clone(),
        prediction: None,
        style: None,
        error: None,
        preview: None,
    };

    let name = path
        .file_name()
        .map_or_else(|| display.clone(), |n| n.to_string_lossy().into_owned());
    let content_type = content_type_for(path);
    if let Err(e) = widget.screen(&name, content_type) {
        report.error = Some(e.to_string());
        return report;
    }

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            report.error = Some(format!("cannot read file: {e}"));
            return report;
        }
    };
    let file = SelectedFile::new(name, content_type, bytes);

    let Submission { token, file } = match widget.accept(file) {
        Ok(submission) => submission,
        Err(e) => {
            report.error = Some(e.to_string());
            return report;
        }
    };

    if with_preview {
        let uri = data_uri(&file);
        report.preview = Some(uri.clone());
        widget.preview_ready(token, uri);
    }

    let outcome = client.classify(&file).await.map_err(|e| e.to_string());
    report.error = outcome.as_ref().err().cloned();
    widget.submission_finished(token, outcome);

    if report.error.is_none() {
        if let Some(ref badge) = widget.target().badge {
            report.prediction = Some(badge.text.clone());
            report.style = Some(badge.style);
        }
    }
    report
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let client = match PredictClient::with_base(&cli.server, &config.endpoint) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.check {
        return match client.health().await {
            Ok(status) => {
                println!("{}: {}", client.health_url(), status.message);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}: {e}", client.health_url());
                ExitCode::FAILURE
            }
        };
    }

    eprintln!("Classifying {} file(s) via {}", cli.files.len(), client.endpoint());

    let mut widget = UploadWidget::new(config, VisualState::default());
    let mut any_failed = false;

    for path in &cli.files {
        let report = classify_file(&mut widget, &client, path, cli.preview).await;
        any_failed |= report.failed();

        if cli.json {
            match serde_json::to_string(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error serializing report: {e}");
                    return ExitCode::FAILURE;
                }
            }
        } else {
            println!("{}", report.line());
            if let Some(ref preview) = report.preview {
                println!("  preview: {preview}");
            }
        }
    }

    if any_failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("memelens-cli").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn content_type_from_extension() {
        assert_eq!(content_type_for(Path::new("a.png")), "image/png");
        assert_eq!(content_type_for(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("a.webp")), "image/webp");
        assert_eq!(content_type_for(Path::new("notes.txt")), UNKNOWN_CONTENT_TYPE);
        assert_eq!(content_type_for(Path::new("no_extension")), UNKNOWN_CONTENT_TYPE);
    }

    #[test]
    fn files_required_without_check() {
        assert!(Cli::try_parse_from(["memelens-cli"]).is_err());
        assert!(cli(&["--check"]).files.is_empty());
    }

    #[test]
    fn endpoint_flag_overrides_config_json() {
        let c = cli(&[
            "--config-json",
            r#"{"endpoint":"/v2/predict","political_label":"Politisch"}"#,
            "--endpoint",
            "/v3/predict",
            "a.png",
        ]);
        let config = build_config(&c).unwrap();
        assert_eq!(config.endpoint, "/v3/predict");
        assert_eq!(config.political_label, "Politisch");
    }

    #[test]
    fn bad_config_json_is_reported() {
        let c = cli(&["--config-json", "{", "a.png"]);
        assert!(build_config(&c).unwrap_err().contains("--config-json"));
    }

    #[test]
    fn report_lines() {
        let ok = Report {
            file: "a.png".into(),
            prediction: Some("Political".into()),
            style: Some(BadgeStyle::Political),
            error: None,
            preview: None,
        };
        assert_eq!(ok.line(), "a.png: Political [political]");
        assert!(!ok.failed());

        let failed = Report {
            file: "b.png".into(),
            prediction: None,
            style: None,
            error: Some("server responded with 500".into()),
            preview: None,
        };
        assert_eq!(failed.line(), "b.png: error: server responded with 500");
        assert!(failed.failed());
    }

    #[test]
    fn report_json_omits_empty_fields() {
        let report = Report {
            file: "a.png".into(),
            prediction: Some("NonPolitical".into()),
            style: Some(BadgeStyle::NonPolitical),
            error: None,
            preview: None,
        };
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"file":"a.png","prediction":"NonPolitical","style":"non-political"}"#
        );
    }

    #[tokio::test]
    async fn non_image_is_rejected_before_reading() {
        // The path does not exist; a read attempt would report "cannot read file".
        let path = std::env::temp_dir().join("memelens-cli-missing").join("notes.txt");
        let client = PredictClient::new("http://127.0.0.1:9/predict").unwrap();
        let mut widget = UploadWidget::new(WidgetConfig::default(), VisualState::default());
        let report = classify_file(&mut widget, &client, &path, false).await;

        let error = report.error.unwrap();
        assert!(error.contains("unsupported file type"), "got {error}");
        assert_eq!(widget.target().alerts.len(), 1);
    }

    #[tokio::test]
    async fn non_image_is_rejected_before_any_request() {
        let dir = std::env::temp_dir().join(format!("memelens-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("notes.txt");
        std::fs::write(&path, b"not an image").unwrap();

        // Nothing listens on port 9; a request would surface as a transport error.
        let client = PredictClient::new("http://127.0.0.1:9/predict").unwrap();
        let mut widget = UploadWidget::new(WidgetConfig::default(), VisualState::default());
        let report = classify_file(&mut widget, &client, &path, false).await;

        let error = report.error.unwrap();
        assert!(error.contains("unsupported file type"), "got {error}");
        assert_eq!(widget.target().alerts.len(), 1);
        assert!(!widget.is_loading());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
