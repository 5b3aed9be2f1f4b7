use anyhow::{Result, bail};

use super::AppContext;
use crate::render::{analysis_report, history_line};

pub fn list(ctx: &AppContext) -> Result<()> {
    let state = ctx.load_state()?;
    let style = ctx.style(&state, false);

    if state.history.is_empty() {
        println!("No analyses yet in session '{}'.", ctx.session_id);
        return Ok(());
    }

    for item in state.history.items() {
        println!("{}", history_line(item, style));
    }
    Ok(())
}

pub fn show(ctx: &AppContext, id: &str, plain: bool) -> Result<()> {
    let state = ctx.load_state()?;
    let style = ctx.style(&state, plain);

    let Some(item) = state.history.get(id) else {
        bail!("No history item with id '{}'", id);
    };
    println!("{}\n", item.text);
    print!("{}", analysis_report(&item.text, &item.analysis, style));
    Ok(())
}

pub fn clear(ctx: &AppContext) -> Result<()> {
    let mut state = ctx.load_state()?;
    let count = state.history.len();
    state.history.clear()?;
    println!("Cleared {} item(s) from history.", count);
    Ok(())
}
