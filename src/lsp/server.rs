use std::sync::Arc;

use anyhow::Result;
use tokio::io::{stdin, stdout};
use tower_lsp::{LspService, Server};

use crate::lsp::backend::Backend;
use crate::vocab::Vocabulary;
use crate::Config;

/// Start the LSP server
pub async fn serve() -> Result<()> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    // Build the vocabulary once: embedded tables plus any extension files
    // found in the configured directories.
    let vocab = Arc::new(Vocabulary::with_extensions(&config.vocab_dirs));
    log::info!(
        "Loaded vocabulary: {} properties, {} units, {} colors",
        vocab.properties().len(),
        vocab.units().len(),
        vocab.colors().len()
    );

    let (service, socket) =
        LspService::build(move |client| Backend::new(client, vocab.clone())).finish();

    Server::new(stdin(), stdout(), socket).serve(service).await;

    Ok(())
}
