use crate::domain::error::WorkflowError;
use crate::domain::model::TranslationResult;
use async_trait::async_trait;

/// Trait for translation services
///
/// One implementation per upstream backend. The aggregator only talks to
/// this trait, so providers can be swapped for fakes in tests.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Provider key, matching `services[].name` in the config file
    fn name(&self) -> &str;

    /// Translate a query string into zero or more normalized results
    async fn translate(&self, query: &str) -> Result<Vec<TranslationResult>, WorkflowError>;
}
