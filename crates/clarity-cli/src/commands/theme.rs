use anyhow::Result;
use clarity_core::state::Theme;

use super::AppContext;

pub fn show(ctx: &AppContext) -> Result<()> {
    let state = ctx.load_state()?;
    println!("{}", state.theme.theme());
    Ok(())
}

pub fn set(ctx: &AppContext, theme: Theme) -> Result<()> {
    let mut state = ctx.load_state()?;
    state.theme.set(theme)?;
    println!("Theme set to {}.", theme);
    Ok(())
}

pub fn cycle(ctx: &AppContext) -> Result<()> {
    let mut state = ctx.load_state()?;
    let theme = state.theme.cycle()?;
    println!("Theme set to {}.", theme);
    Ok(())
}

pub fn toggle(ctx: &AppContext) -> Result<()> {
    let mut state = ctx.load_state()?;
    let theme = state.theme.toggle()?;
    println!("Theme set to {}.", theme);
    Ok(())
}
