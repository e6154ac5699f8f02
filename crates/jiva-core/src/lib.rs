pub mod aggregate;
pub mod config;
pub mod error;
pub mod faq;
pub mod loading;
pub mod model;
pub mod query;
pub mod respond;

use aggregate::UnitSummary;
use error::QueryError;
use faq::FaqTable;
use model::Dataset;
use std::panic::{self, AssertUnwindSafe};

/// Structured answer to a query.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<'a> {
    /// Canned methodology answer.
    Faq(&'a str),
    /// Aggregated figures for one unit.
    Summary(UnitSummary),
}

impl Reply<'_> {
    pub fn render(&self) -> String {
        match self {
            Reply::Faq(answer) => answer.to_string(),
            Reply::Summary(summary) => respond::format_summary(summary),
        }
    }
}

/// Display text together with the figures behind it, when there are any.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub text: String,
    pub summary: Option<UnitSummary>,
}

/// Main API entry point: answers free-text questions over an immutable dataset.
///
/// The dataset is never mutated after construction, so one assistant can be
/// shared across threads by reference.
#[derive(Debug, Clone)]
pub struct Assistant {
    dataset: Dataset,
    faq: FaqTable,
}

impl Assistant {
    pub fn new(dataset: Dataset, faq: FaqTable) -> Self {
        Assistant { dataset, faq }
    }

    /// Assistant using the built-in INGRES FAQ.
    pub fn with_default_faq(dataset: Dataset) -> Self {
        Self::new(dataset, config::builtin::default_faq().clone())
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Answer a query: FAQ first, then interpretation and aggregation.
    ///
    /// FAQ answers keep working when the dataset is unavailable. A panic
    /// inside the pipeline comes back as `QueryError::Internal`.
    pub fn answer(&self, query: &str) -> Result<Reply<'_>, QueryError> {
        guarded(query, || self.evaluate(query))
    }

    /// Answer a query as display text. Never fails: every error condition
    /// becomes a message.
    pub fn respond(&self, query: &str) -> String {
        guarded(query, || self.evaluate(query).map(|reply| reply.render()))
            .unwrap_or_else(|e| respond::format_failure(&e))
    }

    /// Like [`Assistant::respond`], but also hands back the summary a data
    /// answer was rendered from.
    pub fn respond_structured(&self, query: &str) -> Response {
        guarded(query, || {
            let reply = self.evaluate(query)?;
            let text = reply.render();
            let summary = match reply {
                Reply::Summary(summary) => Some(summary),
                Reply::Faq(_) => None,
            };
            Ok(Response { text, summary })
        })
        .unwrap_or_else(|e| Response {
            text: respond::format_failure(&e),
            summary: None,
        })
    }

    fn evaluate(&self, query: &str) -> Result<Reply<'_>, QueryError> {
        if let Some(answer) = self.faq.lookup(query) {
            return Ok(Reply::Faq(answer));
        }

        if self.dataset.is_empty() {
            return Err(QueryError::DatasetUnavailable);
        }

        let target = query::interpret(query, &self.dataset)?;
        let summary = aggregate::aggregate(&self.dataset, &target)?;
        Ok(Reply::Summary(summary))
    }
}

fn guarded<T, F>(query: &str, f: F) -> Result<T, QueryError>
where
    F: FnOnce() -> Result<T, QueryError>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            tracing::debug!(query, "query not answered: {e:?}");
            Err(e)
        }
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".into());
            tracing::error!(query, "internal error while answering: {detail}");
            Err(QueryError::Internal)
        }
    }
}
