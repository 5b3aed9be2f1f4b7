use anyhow::Result;
use clarity_core::practice::{PracticeCategory, examples_in};
use colored::Colorize;

use super::AppContext;
use super::analyze::submit;

pub fn list(category: Option<PracticeCategory>) {
    for example in examples_in(category) {
        println!(
            "{}  {}",
            example.id.bold(),
            format!("({})", example.category).dimmed()
        );
        println!("  {}", example.text);
        println!("  {}", example.description.italic());
        println!("  {} {}", "hint:".dimmed(), example.hint);
        println!();
    }
    println!("Analyze one with `clarity examples try <ID>`.");
}

pub async fn try_example(ctx: &AppContext, id: &str, plain: bool) -> Result<()> {
    let id = id.to_string();
    submit(ctx, plain, |usecase| async move {
        usecase.submit_example(&id).await
    })
    .await
}
