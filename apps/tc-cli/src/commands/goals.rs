// goals.rs — Goals subcommands: show, set, edit, context, clear.

use clap::Subcommand;
use tc_goals::GoalsSummary;

use crate::app::App;

#[derive(Subcommand)]
pub enum GoalsCommands {
    /// Show the stored goals.
    Show {
        /// Print the raw JSON record.
        #[arg(long)]
        json: bool,
    },
    /// Define goals for the first time (replaces anything stored).
    Set {
        /// A therapy focus area (repeatable, order is kept).
        #[arg(long = "focus")]
        focus_areas: Vec<String>,
        /// A desired change (repeatable, order is kept).
        #[arg(long = "change")]
        desired_changes: Vec<String>,
    },
    /// Edit existing goals (full replacement, not a merge).
    Edit {
        #[arg(long = "focus")]
        focus_areas: Vec<String>,
        #[arg(long = "change")]
        desired_changes: Vec<String>,
    },
    /// Print the prompt-context sentence for the stored goals.
    Context,
    /// Remove the stored goals.
    Clear,
}

pub async fn execute(cmd: &GoalsCommands, app: &App) -> anyhow::Result<()> {
    match cmd {
        GoalsCommands::Show { json } => show_goals(app, *json).await,
        GoalsCommands::Set {
            focus_areas,
            desired_changes,
        } => set_goals(app, focus_areas, desired_changes, false).await,
        GoalsCommands::Edit {
            focus_areas,
            desired_changes,
        } => set_goals(app, focus_areas, desired_changes, true).await,
        GoalsCommands::Context => {
            println!("{}", app.goals.context_fragment().await?);
            Ok(())
        }
        GoalsCommands::Clear => {
            app.goals.clear().await?;
            println!("Goals cleared.");
            Ok(())
        }
    }
}

async fn show_goals(app: &App, json: bool) -> anyhow::Result<()> {
    let Some(summary) = app.goals.load().await? else {
        println!("No goals defined yet.");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_summary(&summary));
    }
    Ok(())
}

async fn set_goals(
    app: &App,
    focus_areas: &[String],
    desired_changes: &[String],
    editing: bool,
) -> anyhow::Result<()> {
    let focus_areas = clean(focus_areas);
    let desired_changes = clean(desired_changes);

    let summary = if editing {
        app.goals.update(focus_areas, desired_changes).await?
    } else {
        app.goals.save(focus_areas, desired_changes).await?
    };

    println!(
        "Goals {}: {} focus area(s), {} desired change(s).",
        if editing { "updated" } else { "saved" },
        summary.focus_areas.len(),
        summary.desired_changes.len()
    );
    Ok(())
}

/// Trim entries and drop blank ones, keeping order and duplicates.
fn clean(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn render_summary(summary: &GoalsSummary) -> String {
    let mut out = String::new();
    out.push_str("Focus areas:\n");
    if summary.focus_areas.is_empty() {
        out.push_str("  (none)\n");
    }
    for area in &summary.focus_areas {
        out.push_str(&format!("  - {}\n", area));
    }
    out.push_str("Desired changes:\n");
    if summary.desired_changes.is_empty() {
        out.push_str("  (none)\n");
    }
    for change in &summary.desired_changes {
        out.push_str(&format!("  - {}\n", change));
    }
    out.push_str(&format!("Created:  {}\n", summary.created_date.to_rfc3339()));
    out.push_str(&format!("Updated:  {}\n", summary.last_updated.to_rfc3339()));
    out
}
