use talentui::TalentUI;

type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
    let records = TalentUI::new().run()?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
