// Chunked translation pipeline
//
// The translation backend is an opaque external capability behind the
// `TranslationBackend` trait; `ChunkTranslator` drives it one chunk at a
// time and isolates per-chunk failures.

pub mod google;

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::chunk::split_into_chunks;
use crate::config::TranslateConfig;
use crate::error::Result;
use google::GoogleTranslator;

/// Opaque external translation capability.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Translate `text` from `src_lang` ("auto" for detection) to `dest_lang`.
    async fn translate(&self, text: &str, dest_lang: &str, src_lang: &str) -> Result<String>;
}

/// Sequential per-chunk translation with original-text fallback on failure.
pub struct ChunkTranslator {
    backend: Box<dyn TranslationBackend>,
    config: TranslateConfig,
}

impl ChunkTranslator {
    pub fn new(config: TranslateConfig) -> Self {
        let backend = Box::new(GoogleTranslator::new(&config));
        Self { backend, config }
    }

    /// Swap the backend, used by tests and alternative providers.
    pub fn with_backend(backend: Box<dyn TranslationBackend>, config: TranslateConfig) -> Self {
        Self { backend, config }
    }

    /// Translate a whole document: split into line-aligned chunks, submit
    /// each chunk exactly once in order, and join the results with a blank
    /// line. A failed chunk keeps its original text; failure never aborts
    /// the run.
    pub async fn translate_document(&self, text: &str, dest_lang: &str) -> String {
        let chunks = split_into_chunks(text, self.config.max_chunk_size);
        let total = chunks.len();

        println!("chunks count : {}", total);
        info!("Translating {} chunks to {}", total, dest_lang);

        let pb = ProgressBar::new(total as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"));

        let mut translated = Vec::with_capacity(total);

        for (i, chunk) in chunks.iter().enumerate() {
            pb.println(format!(" chunks translating {} / {}...", i + 1, total));

            match self
                .backend
                .translate(chunk, dest_lang, &self.config.source_lang)
                .await
            {
                Ok(translation) => translated.push(translation),
                Err(e) => {
                    // Keep original text on failure
                    warn!("error when translating chunk {}: {}", i + 1, e);
                    pb.println(format!("error when translating chunk {}: {}", i + 1, e));
                    translated.push(chunk.clone());
                }
            }

            pb.inc(1);
        }

        pb.finish_and_clear();

        translated.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn test_config(max_chunk_size: usize) -> TranslateConfig {
        TranslateConfig {
            endpoint: "http://localhost:0".to_string(),
            source_lang: "auto".to_string(),
            max_chunk_size,
            timeout_secs: None,
        }
    }

    /// Uppercases input, failing on chunks whose index is in `fail_on`.
    struct FakeBackend {
        calls: AtomicUsize,
        fail_on: Vec<usize>,
    }

    impl FakeBackend {
        fn new(fail_on: Vec<usize>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_on,
            }
        }
    }

    #[async_trait]
    impl TranslationBackend for FakeBackend {
        async fn translate(&self, text: &str, _dest: &str, _src: &str) -> Result<String> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail_on.contains(&call) {
                Err(crate::error::SubtranError::Translation(
                    "simulated service failure".to_string(),
                ))
            } else {
                Ok(text.to_uppercase())
            }
        }
    }

    #[tokio::test]
    async fn test_chunks_joined_with_blank_line() {
        let translator = ChunkTranslator::with_backend(
            Box::new(FakeBackend::new(vec![])),
            test_config(10),
        );
        let result = translator.translate_document("ab\ncd\nef\ngh", "fa").await;
        assert_eq!(result, "AB\nCD\nEF\n\nGH");
    }

    #[tokio::test]
    async fn test_failed_chunk_falls_back_to_original() {
        let translator = ChunkTranslator::with_backend(
            Box::new(FakeBackend::new(vec![2])),
            test_config(4),
        );
        // Three chunks: "ab", "cd", "ef"; chunk 2 fails
        let result = translator.translate_document("ab\ncd\nef", "fa").await;
        assert_eq!(result, "AB\n\ncd\n\nEF");
    }

    #[tokio::test]
    async fn test_each_chunk_submitted_exactly_once() {
        let backend = Box::new(FakeBackend::new(vec![1, 2, 3]));
        let translator = ChunkTranslator::with_backend(backend, test_config(4));
        let result = translator.translate_document("ab\ncd\nef", "fa").await;
        // All calls failed once each, no retries, originals preserved
        assert_eq!(result, "ab\n\ncd\n\nef");
    }

    #[tokio::test]
    async fn test_empty_document_produces_empty_output() {
        let translator = ChunkTranslator::with_backend(
            Box::new(FakeBackend::new(vec![])),
            test_config(100),
        );
        let result = translator.translate_document("", "fa").await;
        assert_eq!(result, "");
    }
}
