//! Main duplication engine implementation.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::core::config::TextdupConfig;
use crate::core::errors::Result;
use crate::core::scoring::{DuplicationReport, DuplicationScorer};
use crate::io::documents::read_document_async;
use crate::text::tokenizer::Tokenizer;

/// Main textdup engine: read, tokenize and score document pairs.
#[derive(Debug, Clone)]
pub struct DuplicationEngine {
    scorer: DuplicationScorer,
    tokenizer: Tokenizer,
    config: Arc<TextdupConfig>,
}

impl DuplicationEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: TextdupConfig) -> Result<Self> {
        config.validate()?;

        let scorer = DuplicationScorer::new(config.similarity.clone())?;
        let tokenizer = Tokenizer::new(&config.tokenizer);

        info!(
            hashbits = config.similarity.hashbits,
            ngram_size = config.similarity.ngram_size,
            parallel = config.similarity.parallel,
            "Textdup engine initialized"
        );

        Ok(Self {
            scorer,
            tokenizer,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &TextdupConfig {
        &self.config
    }

    /// Score already-tokenized sequences.
    pub fn compare_tokens<S: AsRef<str>>(
        &self,
        reference: &[S],
        candidate: &[S],
    ) -> Result<DuplicationReport> {
        self.scorer.score(reference, candidate)
    }

    /// Tokenize two texts and score them.
    pub fn compare_texts(&self, reference: &str, candidate: &str) -> Result<DuplicationReport> {
        let reference = self.tokenizer.tokenize(reference);
        let candidate = self.tokenizer.tokenize(candidate);
        self.compare_tokens(&reference, &candidate)
    }

    /// Read both documents concurrently, then tokenize and score them.
    pub async fn compare_files<P, Q>(&self, reference: P, candidate: Q) -> Result<DuplicationReport>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let (reference_path, candidate_path) = (reference.as_ref(), candidate.as_ref());
        info!(
            "Comparing {} against {}",
            candidate_path.display(),
            reference_path.display()
        );

        let (reference_text, candidate_text) = tokio::try_join!(
            read_document_async(reference_path),
            read_document_async(candidate_path)
        )?;

        let report = self.compare_texts(&reference_text, &candidate_text)?;
        info!(final_score = report.final_score, "Comparison complete");
        Ok(report)
    }
}
