use super::Session;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::open()?;
    let achievements = session.tracker.achievements();

    if json {
        println!("{}", serde_json::to_string_pretty(achievements)?);
        return Ok(());
    }
    for a in achievements {
        let status = if a.unlocked { "unlocked" } else { "locked" };
        println!(
            "{} {} - {} [{} {}] ({status})",
            a.icon,
            a.name,
            a.description,
            a.kind.label(),
            a.requirement
        );
    }
    Ok(())
}
