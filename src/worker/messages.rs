//! Request/response protocol between the plugin and its worker thread.
//!
//! The worker performs the file reads the plugin itself should not block on:
//! the recipe catalog JSON and the sign-in markup. Messages carry the
//! requesting span's trace context so worker spans join the same trace.

use crate::domain::Recipe;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when passing messages to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Extracts the OpenTelemetry trace ID and span ID from the active span.
    /// Returns `None` if the current span context is invalid or not sampled.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use recipe_explorer::worker::TraceContext;
    ///
    /// let context = TraceContext::from_current();
    /// if let Some(ctx) = context {
    ///     println!("Trace ID: {}", ctx.trace_id);
    /// }
    /// ```
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            let trace_id_str = format!("{:032x}", span_context.trace_id());
            let parent_span_id_str = format!("{:016x}", span_context.span_id());

            tracing::debug!(
                trace_id = %trace_id_str,
                parent_span_id = %parent_span_id_str,
                "capturing trace context"
            );

            Some(Self {
                trace_id: trace_id_str,
                parent_span_id: parent_span_id_str,
            })
        } else {
            tracing::debug!("span context is not valid");
            None
        }
    }
}

/// Generates `WorkerMessage` constructors that capture the current trace
/// context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_catalog(LoadCatalog { path: String }),
    load_sign_in(LoadSignIn { path: String }),
}

/// Messages sent from the plugin to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read and validate a catalog JSON file.
    LoadCatalog {
        /// Path as configured; `~` is expanded by the worker.
        path: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Read the sign-in markup file.
    LoadSignIn {
        path: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadCatalog { trace_context, .. } | Self::LoadSignIn { trace_context, .. } => {
                trace_context.as_ref()
            }
        }
    }
}

/// Responses sent from the worker back to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The catalog file was read and passed validation.
    CatalogLoaded {
        recipes: Vec<Recipe>,
        /// Description of where the recipes came from, for the status line.
        source: String,
    },

    /// Raw sign-in markup; sanitizing happens on the plugin side.
    SignInLoaded { markup: String },

    /// The sign-in markup could not be read.
    SignInFailed { message: String },

    /// Any other failure, including an invalid catalog.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_serialize_without_empty_trace_context() {
        let message = WorkerMessage::LoadCatalog {
            path: "~/recipes.json".to_string(),
            trace_context: None,
        };
        let json = serde_json::to_string(&message).unwrap();
        assert_eq!(json, r#"{"LoadCatalog":{"path":"~/recipes.json"}}"#);
        assert!(message.trace_context().is_none());
    }

    #[test]
    fn builder_outside_a_span_has_no_context() {
        let message = WorkerMessage::load_sign_in("/tmp/signin.html".to_string());
        assert_eq!(
            message,
            WorkerMessage::LoadSignIn {
                path: "/tmp/signin.html".to_string(),
                trace_context: None,
            }
        );
    }
}
