use anyhow::Result;
use clarity_infrastructure::end_session;

use super::AppContext;

pub fn end(ctx: &AppContext) -> Result<()> {
    if end_session(&ctx.paths, &ctx.session_id)? {
        println!("Session '{}' ended. Theme is kept.", ctx.session_id);
    } else {
        println!("Session '{}' had nothing stored.", ctx.session_id);
    }
    Ok(())
}
