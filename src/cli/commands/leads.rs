use crate::cli::commands::open_db;
use crate::config::Config;
use crate::db::leads;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let all = leads::list_leads(&pool.conn)?;

    if all.is_empty() {
        info("No sales leads recorded.");
        return Ok(());
    }

    println!();
    for lead in &all {
        println!(
            "   #{:<4} {}  [{}]  demo {}  → {}",
            lead.id, lead.company_name, lead.status, lead.demo_date, lead.assigned_to
        );
        if !lead.demo_notes.is_empty() {
            println!("         {}", lead.demo_notes);
        }
    }
    println!();
    Ok(())
}
