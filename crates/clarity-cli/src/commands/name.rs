use anyhow::Result;

use super::AppContext;

pub fn show(ctx: &AppContext) -> Result<()> {
    let state = ctx.load_state()?;
    if state.personalization.has_name() {
        println!("{}", state.personalization.name());
    } else {
        println!("No name set.");
    }
    Ok(())
}

pub fn set(ctx: &AppContext, name: &str) -> Result<()> {
    let mut state = ctx.load_state()?;
    state.personalization.update(name)?;
    match state.personalization.greeting() {
        Some(greeting) => println!("{}", greeting),
        None => println!("Name cleared."),
    }
    Ok(())
}

pub fn clear(ctx: &AppContext) -> Result<()> {
    let mut state = ctx.load_state()?;
    state.personalization.clear()?;
    println!("Name cleared.");
    Ok(())
}

pub fn greet(ctx: &AppContext) -> Result<()> {
    let state = ctx.load_state()?;
    match state.personalization.greeting() {
        Some(greeting) => println!("{}", greeting),
        None => println!("Hello! Set a name with `clarity name set <NAME>`."),
    }
    Ok(())
}
