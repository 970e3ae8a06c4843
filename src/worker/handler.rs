//! Worker thread that reads the catalog and sign-in files.
//!
//! Zellij spawns the worker on its own thread. Requests arrive as JSON
//! [`WorkerMessage`]s and every request is answered with exactly one
//! [`WorkerResponse`] posted back to the plugin under the same message name.

use crate::catalog::{CatalogSource, JsonCatalogFile};
use crate::domain::{RecipeExplorerError, Result};
use crate::infrastructure::{display_path, expand_tilde};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker state. Stateless apart from bookkeeping for logs; every request
/// reads its file afresh.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct RecipeWorker {
    #[serde(skip)]
    handled: usize,
}

impl RecipeWorker {
    /// Logs the outcome of an operation and converts it into a response.
    fn respond<T>(
        operation: &str,
        result: Result<T>,
        on_success: impl FnOnce(T) -> WorkerResponse,
        on_failure: impl FnOnce(String) -> WorkerResponse,
    ) -> WorkerResponse {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "worker operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = operation, error = %e, "worker operation failed");
                on_failure(format!("{operation}: {e}"))
            }
        }
    }

    fn handle_load_catalog(path: &str) -> WorkerResponse {
        let source = JsonCatalogFile::new(expand_tilde(path));

        Self::respond(
            "load catalog",
            source.load(),
            |catalog| {
                tracing::debug!(recipe_count = catalog.len(), "catalog ready for plugin");
                WorkerResponse::CatalogLoaded {
                    recipes: catalog.into_recipes(),
                    source: display_path(&source.describe()),
                }
            },
            |message| WorkerResponse::Error { message },
        )
    }

    fn handle_load_sign_in(path: &str) -> WorkerResponse {
        let expanded = expand_tilde(path);
        let result = std::fs::read_to_string(&expanded).map_err(|e| {
            RecipeExplorerError::Markup(format!("cannot read {}: {e}", display_path(&expanded)))
        });

        Self::respond(
            "load sign-in",
            result,
            |markup| WorkerResponse::SignInLoaded { markup },
            |message| WorkerResponse::SignInFailed { message },
        )
    }

    /// Links this thread's spans to the plugin span that sent `message`.
    ///
    /// The returned guard must be held while the message is handled.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(opentelemetry::Context::current().with_remote_span_context(span_context).attach())
    }

    /// Handles one request and produces its response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        self.handled += 1;

        let span = tracing::debug_span!(
            "worker_handle_message",
            message_type = ?message,
            handled = self.handled
        );
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadCatalog { path, .. } => Self::handle_load_catalog(&path),
            WorkerMessage::LoadSignIn { path, .. } => Self::handle_load_sign_in(&path),
        }
    }
}

static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

/// Installs tracing on the worker thread once; it writes to the same trace
/// file as the plugin.
fn init_worker_tracing() {
    if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        crate::observability::init_tracing(&crate::Config::default());
    }
}

fn post_response(name: String, response: &WorkerResponse) {
    match serde_json::to_string(response) {
        Ok(payload) => post_message_to_plugin(PluginMessage {
            name,
            payload,
            worker_name: None,
        }),
        Err(e) => tracing::warn!(error = %e, "failed to serialize worker response"),
    }
}

impl ZellijWorker<'_> for RecipeWorker {
    fn on_message(&mut self, message: String, payload: String) {
        init_worker_tracing();

        let response = match serde_json::from_str::<WorkerMessage>(&payload) {
            Ok(worker_message) => self.handle_message(worker_message),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker message");
                WorkerResponse::Error {
                    message: RecipeExplorerError::Worker(format!("malformed request: {e}")).to_string(),
                }
            }
        };

        post_response(message, &response);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn message_for(path: &std::path::Path, sign_in: bool) -> WorkerMessage {
        let path = path.display().to_string();
        if sign_in {
            WorkerMessage::LoadSignIn { path, trace_context: None }
        } else {
            WorkerMessage::LoadCatalog { path, trace_context: None }
        }
    }

    #[test]
    fn loads_valid_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{"id": 7, "title": "Miso Soup", "category": "Soup", "time": 15, "difficulty": "easy"}]"#,
        )
        .unwrap();

        let mut worker = RecipeWorker::default();
        let response = worker.handle_message(message_for(file.path(), false));

        let WorkerResponse::CatalogLoaded { recipes, source } = response else {
            panic!("expected CatalogLoaded, got {response:?}");
        };
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Miso Soup");
        assert_eq!(source, file.path().display().to_string());
    }

    #[test]
    fn invalid_catalog_is_an_error_response() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{"id": 1, "title": "A", "category": "X", "time": 0, "difficulty": "easy"}]"#,
        )
        .unwrap();

        let mut worker = RecipeWorker::default();
        let response = worker.handle_message(message_for(file.path(), false));
        assert!(
            matches!(&response, WorkerResponse::Error { message } if message.starts_with("load catalog:")),
            "{response:?}"
        );
    }

    #[test]
    fn missing_sign_in_file_fails_softly() {
        let dir = tempfile::tempdir().unwrap();
        let mut worker = RecipeWorker::default();
        let response = worker.handle_message(message_for(&dir.path().join("nope.html"), true));
        assert!(matches!(response, WorkerResponse::SignInFailed { .. }));
    }

    #[test]
    fn sign_in_markup_is_returned_raw() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"<h1>Welcome</h1>").unwrap();

        let mut worker = RecipeWorker::default();
        let response = worker.handle_message(message_for(file.path(), true));
        assert_eq!(
            response,
            WorkerResponse::SignInLoaded {
                markup: "<h1>Welcome</h1>".to_string()
            }
        );
    }
}
