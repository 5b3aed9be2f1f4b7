use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use clarity_application::AnalyzeUseCase;
use clarity_core::analysis::validate_input;
use clarity_core::state::ChatHistoryItem;
use clarity_interaction::build_service;
use colored::Colorize;
use tokio::sync::Mutex;

use super::AppContext;
use crate::render::analysis_report;

pub async fn run(ctx: &AppContext, text: Option<String>, stdin: bool, plain: bool) -> Result<()> {
    let text = match (text, stdin) {
        (Some(text), _) => text,
        (None, true) => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            buffer
        }
        (None, false) => bail!("Pass the text to analyze, or use --stdin"),
    };
    validate_input(&text).map_err(|err| anyhow!(err.user_message()))?;

    submit(ctx, plain, |usecase| async move { usecase.submit(&text).await }).await
}

/// Builds the use case, runs `action` on it and prints the report.
///
/// Failures surface as their user-facing message.
pub async fn submit<F, Fut>(ctx: &AppContext, plain: bool, action: F) -> Result<()>
where
    F: FnOnce(Arc<AnalyzeUseCase>) -> Fut,
    Fut: std::future::Future<Output = clarity_core::Result<ChatHistoryItem>>,
{
    let config = ctx.load_config()?;
    let state = ctx.load_state()?;
    let style = ctx.style(&state, plain);

    let service = build_service(&config.service)?;
    let history = Arc::new(Mutex::new(state.history));
    let usecase = Arc::new(AnalyzeUseCase::new(service, history));

    if let Some(greeting) = state.personalization.greeting() {
        eprintln!("{}", greeting);
    }
    eprintln!("{}", "Analyzing...".dimmed());

    match action(usecase).await {
        Ok(item) => {
            print!("{}", analysis_report(&item.text, &item.analysis, style));
            Ok(())
        }
        Err(err) => {
            tracing::debug!(error = %err, "analysis did not complete");
            Err(anyhow!(err.user_message()))
        }
    }
}
