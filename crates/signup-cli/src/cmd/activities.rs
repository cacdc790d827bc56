use crate::output::{print_json, print_table};
use anyhow::Result;
use signup_core::seed;
use std::path::Path;

pub fn run(seed_path: Option<&Path>, json: bool) -> Result<()> {
    let directory = seed::resolve(seed_path)?;

    if json {
        return print_json(&directory);
    }

    let rows = directory
        .iter()
        .map(|(name, a)| {
            vec![
                name.clone(),
                a.schedule.clone(),
                format!("{}/{}", a.participants.len(), a.max_participants),
                a.spots_left().to_string(),
            ]
        })
        .collect();
    print_table(&["ACTIVITY", "SCHEDULE", "ENROLLED", "SPOTS LEFT"], rows);
    Ok(())
}
