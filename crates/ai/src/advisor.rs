use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, warn};

use stocklens_inventory::Product;

use crate::chat::Conversation;
use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::generator::TextGenerator;
use crate::prompt::{analysis_context, analysis_prompt, optimization_context, optimization_prompt};
use crate::result::{Advice, AiError};
use crate::summary::InventoryDigest;

pub const ANALYSIS_EMPTY_FALLBACK: &str = "Unable to generate analysis at this time.";
pub const ANALYSIS_ERROR_FALLBACK: &str =
    "I encountered an error analyzing your inventory. Please check your API key or try again later.";
pub const OPTIMIZATION_EMPTY_FALLBACK: &str = "Unable to generate optimization strategy.";
pub const OPTIMIZATION_ERROR_FALLBACK: &str = "Optimization analysis unavailable.";

/// Natural-language advisor over a product collection.
///
/// Every failure of the generator (error, timeout, blank text) degrades to a
/// fixed fallback message; advisor calls never return an error.
#[derive(Clone)]
pub struct InventoryAdvisor {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl core::fmt::Debug for InventoryAdvisor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InventoryAdvisor")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl InventoryAdvisor {
    pub fn new(generator: impl TextGenerator) -> Self {
        Self::from_arc(Arc::new(generator))
    }

    pub fn from_arc(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Answer a free-form question about the collection.
    pub async fn analyze_inventory(&self, products: &[Product], query: &str) -> Advice {
        let digest = InventoryDigest::from_products(products);
        debug!(
            included = digest.products.len(),
            omitted = digest.omitted,
            "inventory digest prepared"
        );

        let context = analysis_context(&digest);
        let prompt = analysis_prompt(query);
        self.generate_or_fallback(&context, &prompt, ANALYSIS_EMPTY_FALLBACK, ANALYSIS_ERROR_FALLBACK)
            .await
    }

    /// Deep-dive replenishment strategy for one product.
    pub async fn optimize_product(&self, product: &Product) -> Advice {
        let context = optimization_context(product);
        let prompt = optimization_prompt(product);
        self.generate_or_fallback(
            &context,
            &prompt,
            OPTIMIZATION_EMPTY_FALLBACK,
            OPTIMIZATION_ERROR_FALLBACK,
        )
        .await
    }

    /// Post `query` to `conversation`, ask the generator and record the answer.
    ///
    /// Blank queries are ignored and return `None`. The answer is returned even
    /// when a newer question superseded it in the conversation.
    pub async fn chat(
        &self,
        conversation: &mut Conversation,
        products: &[Product],
        query: &str,
    ) -> Option<Advice> {
        let ticket = conversation.submit(query, Utc::now())?;
        let advice = self.analyze_inventory(products, query).await;
        conversation.complete(ticket, &advice, Utc::now());
        Some(advice)
    }

    async fn generate_or_fallback(
        &self,
        context: &str,
        prompt: &str,
        empty_fallback: &str,
        error_fallback: &str,
    ) -> Advice {
        match self.generate(context, prompt).await {
            Ok(text) => Advice::generated(text),
            Err(AiError::EmptyResponse) => {
                warn!("generator returned no text; using fallback");
                Advice::fallback(empty_fallback)
            }
            Err(err) => {
                warn!(error = %err, "generation failed; using fallback");
                Advice::fallback(error_fallback)
            }
        }
    }

    async fn generate(&self, context: &str, prompt: &str) -> Result<String, AiError> {
        let text = tokio::time::timeout(self.timeout, self.generator.generate(context, prompt))
            .await
            .map_err(|_| AiError::Timeout)??;

        if text.trim().is_empty() {
            return Err(AiError::EmptyResponse);
        }
        Ok(text)
    }
}
