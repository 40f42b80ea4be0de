//! Enhance Statements use case
//!
//! Sends both draft statements to the language model in one request and
//! splits the numbered reply back into two enhanced statements.

use crate::config::BehaviorConfig;
use crate::ports::access_gate::AccessGate;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use valuecards_domain::{
    DraftStatements, EnhancedStatements, PromptTemplate, ReplyParseError, ValuesSession,
    parse_enhanced_reply,
};

/// Errors that can occur during enhancement.
///
/// All of them are recoverable: the session keeps its drafts and simply has
/// no enhanced statements.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnhanceError {
    #[error("Enhancement is locked; unlock it with the access secret first")]
    AccessDenied,

    #[error("No draft statements yet; choose Tier 1 values first")]
    NoDrafts,

    #[error("Enhancement timed out after {0:?}")]
    Timeout(Duration),

    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("Could not read the model reply: {0}")]
    MalformedReply(#[from] ReplyParseError),

    #[error("Drafts changed while the request was running; try again")]
    Outdated,
}

/// Use case for rephrasing the two draft statements
pub struct EnhanceStatementsUseCase<G: LlmGateway + 'static, A: AccessGate + ?Sized + 'static> {
    gateway: Arc<G>,
    gate: Arc<A>,
    behavior: BehaviorConfig,
}

impl<G: LlmGateway + 'static, A: AccessGate + ?Sized + 'static> EnhanceStatementsUseCase<G, A> {
    pub fn new(gateway: Arc<G>, gate: Arc<A>) -> Self {
        Self {
            gateway,
            gate,
            behavior: BehaviorConfig::default(),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, drafts: &DraftStatements) -> Result<EnhancedStatements, EnhanceError> {
        self.execute_with_progress(drafts, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        drafts: &DraftStatements,
        progress: &dyn ProgressNotifier,
    ) -> Result<EnhancedStatements, EnhanceError> {
        if !self.gate.is_allowed() {
            warn!("Enhancement requested while the access gate is closed");
            return Err(EnhanceError::AccessDenied);
        }

        info!("Enhancing draft statements with {}", self.gateway.model_name());
        progress.on_enhance_start(self.gateway.model_name());

        let result = self.request(drafts).await;

        progress.on_enhance_complete(result.is_ok());
        match &result {
            Ok(_) => info!("Enhancement succeeded"),
            Err(e) => warn!("Enhancement failed: {}", e),
        }
        result
    }

    /// Enhance the session's current drafts and store the result in it.
    ///
    /// On failure the session is left exactly as it was.
    pub async fn apply(
        &self,
        session: &mut ValuesSession,
        progress: &dyn ProgressNotifier,
    ) -> Result<EnhancedStatements, EnhanceError> {
        let drafts = session.drafts().ok_or(EnhanceError::NoDrafts)?;
        let enhanced = self.execute_with_progress(&drafts, progress).await?;
        if !session.apply_enhancement(drafts, enhanced.clone()) {
            return Err(EnhanceError::Outdated);
        }
        Ok(enhanced)
    }

    async fn request(&self, drafts: &DraftStatements) -> Result<EnhancedStatements, EnhanceError> {
        let prompt = PromptTemplate::enhance_prompt(drafts);
        let call = self
            .gateway
            .complete(PromptTemplate::enhance_system(), &prompt);

        let reply = match self.behavior.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| EnhanceError::Timeout(limit))??,
            None => call.await?,
        };

        debug!("Enhancement reply: {} bytes", reply.len());
        Ok(parse_enhanced_reply(&reply)?)
    }
}
