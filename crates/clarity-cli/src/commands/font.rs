use anyhow::Result;
use clarity_core::state::{FontSizeCell, MAX_FONT_SIZE, MIN_FONT_SIZE};

use super::AppContext;

fn report(cell: &FontSizeCell) {
    let mut notes = Vec::new();
    if !cell.can_increase() {
        notes.push(format!("maximum is {}px", MAX_FONT_SIZE));
    }
    if !cell.can_decrease() {
        notes.push(format!("minimum is {}px", MIN_FONT_SIZE));
    }

    if notes.is_empty() {
        println!("Font size: {}px", cell.size());
    } else {
        println!("Font size: {}px ({})", cell.size(), notes.join(", "));
    }
}

pub fn show(ctx: &AppContext) -> Result<()> {
    let state = ctx.load_state()?;
    report(&state.font_size);
    Ok(())
}

pub fn increase(ctx: &AppContext) -> Result<()> {
    let mut state = ctx.load_state()?;
    state.font_size.increase()?;
    report(&state.font_size);
    Ok(())
}

pub fn decrease(ctx: &AppContext) -> Result<()> {
    let mut state = ctx.load_state()?;
    state.font_size.decrease()?;
    report(&state.font_size);
    Ok(())
}

pub fn reset(ctx: &AppContext) -> Result<()> {
    let mut state = ctx.load_state()?;
    state.font_size.reset()?;
    report(&state.font_size);
    Ok(())
}
