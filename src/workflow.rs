use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{Result, SubtranError};
use crate::export::{ask_save_path, save_translated_file};
use crate::translate::ChunkTranslator;

pub struct Workflow {
    config: Config,
    translator: ChunkTranslator,
}

impl Workflow {
    pub fn new(config: Config) -> Self {
        let translator = ChunkTranslator::new(config.translate.clone());
        Self { config, translator }
    }

    /// Read the source subtitle file, translate it chunk by chunk, and save
    /// the result to a path chosen interactively.
    ///
    /// An unreadable source file is fatal and surfaces to the caller; a
    /// failed save is reported to the user and swallowed so the run still
    /// completes.
    pub async fn run(&self, source_path: &Path, dest_lang: &str) -> Result<()> {
        println!("processing (get file)...");
        info!("Translating {} to {}", source_path.display(), dest_lang);

        let text = fs::read_to_string(source_path).await.map_err(|e| {
            SubtranError::Source(format!("{}: {}", source_path.display(), e))
        })?;

        let translated = self.translator.translate_document(&text, dest_lang).await;

        let save_path = ask_save_path(source_path, dest_lang, &self.config.export.extension);

        match save_translated_file(&translated, &save_path, dest_lang).await {
            Ok(written) => {
                println!("srt saved in : {}", written.display());
            }
            Err(e) => {
                warn!("Save failed: {}", e);
                println!("sorry. can not save this file ({})", e);
            }
        }

        Ok(())
    }
}
