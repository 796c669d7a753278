//! List the gesture dictionary.

use handsign_landmark_model::gesture::GESTURE_DICTIONARY;

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&GESTURE_DICTIONARY[..])?);
        return Ok(());
    }

    println!("Gestures:");
    for info in GESTURE_DICTIONARY.iter() {
        println!("  {:<13} {:<12} {}", info.id, info.name, info.description);
    }
    Ok(())
}
