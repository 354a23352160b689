// menu.rs — The interactive session loop.
//
// Mirrors the classic five-option menu: view, create, record, score,
// save-and-exit. Bad input never aborts the session; the user lands back
// at the menu. The tracker API is 0-based, so every number shown to or
// read from the user is shifted by one here and nowhere else.

use quest_tracker::{GoalSpec, SaveFile, TrackerError, TrackerService};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub fn run(tracker: &mut TrackerService, save_file: &SaveFile) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        println!();
        println!("Quest — goal tracker");
        println!("1. View goals");
        println!("2. Create new goal");
        println!("3. Record event");
        println!("4. View score");
        println!("5. Save and exit");

        let choice = match prompt(&mut editor, "Choose an option: ")? {
            Some(line) => line,
            None => {
                println!("Exiting without saving.");
                return Ok(());
            }
        };

        match choice.trim() {
            "1" => view_goals(tracker),
            "2" => create_goal(tracker, &mut editor)?,
            "3" => record_event(tracker, &mut editor)?,
            "4" => view_score(tracker),
            "5" => {
                tracker.save(save_file)?;
                println!("Saved to {}", save_file.path().display());
                return Ok(());
            }
            _ => println!("Invalid option. Please try again."),
        }
    }
}

/// Read one line. `None` means the user hit Ctrl-C or Ctrl-D.
fn prompt(editor: &mut DefaultEditor, text: &str) -> anyhow::Result<Option<String>> {
    match editor.readline(text) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Read one integer. `None` on Ctrl-C/Ctrl-D or unparsable input (the
/// latter after telling the user).
fn prompt_i64(editor: &mut DefaultEditor, text: &str) -> anyhow::Result<Option<i64>> {
    let line = match prompt(editor, text)? {
        Some(line) => line,
        None => return Ok(None),
    };
    match line.trim().parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            println!("That is not a number.");
            Ok(None)
        }
    }
}

fn view_goals(tracker: &TrackerService) {
    if tracker.is_empty() {
        println!("No goals yet.");
        return;
    }
    println!();
    println!("Your goals:");
    for (index, progress, name) in tracker.list() {
        println!("{}. {} - {}", index + 1, progress, name);
    }
}

fn create_goal(tracker: &mut TrackerService, editor: &mut DefaultEditor) -> anyhow::Result<()> {
    let Some(kind) = prompt(editor, "Goal type (1. Simple, 2. Eternal, 3. Checklist): ")? else {
        return Ok(());
    };
    let Some(name) = prompt(editor, "Goal name: ")? else {
        return Ok(());
    };
    let Some(description) = prompt(editor, "Description: ")? else {
        return Ok(());
    };
    let Some(points) = prompt_i64(editor, "Points per event: ")? else {
        return Ok(());
    };

    let spec = match kind.trim() {
        "1" => GoalSpec::Simple {
            name,
            description,
            points,
        },
        "2" => GoalSpec::Eternal {
            name,
            description,
            points,
        },
        "3" => {
            let Some(target) = prompt_i64(editor, "Target count: ")? else {
                return Ok(());
            };
            let Some(bonus) = prompt_i64(editor, "Bonus points on completion: ")? else {
                return Ok(());
            };
            GoalSpec::Checklist {
                name,
                description,
                points,
                target,
                bonus,
            }
        }
        _ => {
            println!("Invalid goal type.");
            return Ok(());
        }
    };

    match tracker.create_goal(spec) {
        Ok(index) => println!("Goal {} created.", index + 1),
        Err(e) => println!("Could not create goal: {}", e),
    }
    Ok(())
}

fn record_event(tracker: &mut TrackerService, editor: &mut DefaultEditor) -> anyhow::Result<()> {
    if tracker.is_empty() {
        println!("No goals yet.");
        return Ok(());
    }
    view_goals(tracker);

    let Some(number) = prompt_i64(editor, "Which goal did you accomplish? ")? else {
        return Ok(());
    };
    if number < 1 {
        println!("Invalid goal number.");
        return Ok(());
    }

    match tracker.record_event((number - 1) as usize) {
        Ok(outcome) => {
            if outcome.points_earned > 0 {
                println!("Event recorded! You earned {} points.", outcome.points_earned);
            } else {
                println!("Event recorded, but that goal is already complete.");
            }
            println!(
                "Your total score: {} points (level {})",
                outcome.score.total, outcome.score.level
            );
        }
        Err(e @ TrackerError::IndexOutOfRange { .. }) => println!("{}", e),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn view_score(tracker: &TrackerService) {
    let score = tracker.score();
    println!();
    println!("Your total score: {} points", score.total);
    println!("Your level: {}", score.level);
}
