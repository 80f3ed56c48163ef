use crate::commands::{ai, helpers};
use crate::context::SessionContext;
use crate::error::Result;
use crate::intent::{self, ActionableTodo};
use crate::model::Model;
use crate::session::{self, HostCommand, StdioMode};
use crate::todo::TaskEntry;
use indicatif::ProgressBar;
use std::time::Duration;

/// Tools-dir script whose output is the remote (GitHub) issue list.
const CHECK_SCRIPT: &str = "check-todos.sh";
/// Tools-dir script that pulls todos from external sources.
const SYNC_SCRIPT: &str = "sync-todos.sh";

/// `todos [list|add|execute|actions|sync] ...`
///
/// Any other first word is taken as the start of a task to add.
pub fn execute(ctx: &SessionContext, action: Option<&str>, args: &[String]) -> Result<()> {
    println!("📋 Todo Management");

    match action.unwrap_or("list") {
        "list" => list(ctx),
        "add" => add(ctx, &args.join(" ")),
        "execute" => run(ctx, args),
        "actions" => actions(ctx),
        "sync" => sync(ctx),
        other => {
            let task = std::iter::once(other.to_string())
                .chain(args.iter().cloned())
                .collect::<Vec<_>>()
                .join(" ");
            add(ctx, &task)
        }
    }
}

fn list(ctx: &SessionContext) -> Result<()> {
    let script = ctx.paths.tools_dir().join(CHECK_SCRIPT);
    if script.is_file() {
        println!("--- GitHub Issues ---");
        let command = HostCommand::new("bash", [script.to_string_lossy()]);
        match session::run_checked(&command, StdioMode::Capture) {
            Ok(outcome) => match outcome.stdout.filter(|s| !s.is_empty()) {
                Some(issues) => println!("{}", issues),
                None => println!("No open issues on GitHub."),
            },
            Err(e) => {
                println!("❌ Error fetching GitHub issues: {}", e);
                println!("💡 Make sure GitHub CLI is installed and authenticated.");
            }
        }
    }

    println!("--- Local Tasks (todo.md) ---");
    let pending = ctx.todo_store()?.list_pending()?;
    if pending.is_empty() {
        println!("No tasks found in todo.md.");
    } else {
        for line in pending {
            println!("{}", line);
        }
    }
    Ok(())
}

/// Append a task, attaching an action when one can be derived.
pub fn add(ctx: &SessionContext, task: &str) -> Result<()> {
    let task = task.trim();
    if task.is_empty() {
        println!("💡 Please provide a task description. Usage: todos add <your task here>");
        return Ok(());
    }

    let model = ctx.model();
    let local_ready = model == Model::Local && ctx.model_store().has_local_model();
    let entry = TaskEntry::compose(task, model, local_ready);

    ctx.todo_store()?.append(&entry.line())?;

    match &entry {
        TaskEntry::Structured { task } => println!("✅ Added structured task: \"{}\"", task),
        TaskEntry::Annotated {
            description,
            action,
        } => {
            println!("✅ Added task: \"{}\"", description);
            println!("   └─ With intent: @{}", action);
        }
        TaskEntry::Suggested {
            task,
            action,
            source,
        } => {
            println!("✅ Added task: \"{}\"", task);
            println!(
                "   └─ Suggested by {}: @action: {}",
                source.as_str().to_uppercase(),
                action
            );
        }
        TaskEntry::Plain { task } => {
            println!("✅ Added task: \"{}\"", task);
            println!("💡 Add @action: for automatic execution");
        }
    }
    Ok(())
}

fn actions(ctx: &SessionContext) -> Result<()> {
    let todos = ctx.todo_store()?.actionable()?;
    if todos.is_empty() {
        println!("No actionable todos found in todo.md.");
        return Ok(());
    }

    println!("\nActionable Todos:");
    for todo in &todos {
        println!("- {}", todo.task);
        println!("  └─ @{} {}", todo.verb, todo.target);
    }
    Ok(())
}

/// Parse a selection such as `all`, `2`, or `1,3 4` against `count` items.
///
/// Numbers are 1-based. Returns `None` for anything out of range or not a
/// number, and duplicates are dropped while keeping first-seen order.
pub fn parse_selection(words: &[String], count: usize) -> Option<Vec<usize>> {
    let tokens: Vec<&str> = words
        .iter()
        .flat_map(|w| w.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return Some(Vec::new());
    }
    if tokens.len() == 1 && tokens[0].eq_ignore_ascii_case("all") {
        return Some((0..count).collect());
    }

    let mut picked = Vec::new();
    for token in tokens {
        let n: usize = token.parse().ok()?;
        if n == 0 || n > count {
            return None;
        }
        if !picked.contains(&(n - 1)) {
            picked.push(n - 1);
        }
    }
    Some(picked)
}

fn run(ctx: &SessionContext, args: &[String]) -> Result<()> {
    let todos = ctx.todo_store()?.actionable()?;
    if todos.is_empty() {
        println!("No actionable todos found in todo.md.");
        return Ok(());
    }

    let words: Vec<String> = if args.is_empty() {
        for (i, todo) in todos.iter().enumerate() {
            println!("  {}. {}  (@{} {})", i + 1, todo.task, todo.verb, todo.target);
        }
        vec![helpers::prompt_line(
            "Select todos to execute (e.g. 1,3 or 'all'; empty to cancel): ",
        )?]
    } else {
        args.to_vec()
    };

    let Some(selection) = parse_selection(&words, todos.len()) else {
        println!("❌ Invalid selection. Use numbers between 1 and {} or 'all'.", todos.len());
        return Ok(());
    };
    if selection.is_empty() {
        println!("Nothing selected.");
        return Ok(());
    }

    for index in selection {
        execute_one(ctx, &todos[index]);
    }
    Ok(())
}

fn execute_one(ctx: &SessionContext, todo: &ActionableTodo) {
    println!("\n▶️ Executing intent: @{} {}", todo.verb, todo.target);

    let result = todo
        .intent()
        .and_then(|intent| intent::run_intent(&intent, ctx.platform, &ctx.paths.tools_dir()));

    match result {
        Ok(_) => println!("✅ Execution successful"),
        Err(e) => {
            println!("❌ Error executing intent: @{} {}: {}", todo.verb, todo.target, e);
            analyze_failure(ctx, todo, &e.to_string());
        }
    }
}

/// Hand a failed intent to the current model's CLI, when there is one.
fn analyze_failure(ctx: &SessionContext, todo: &ActionableTodo, error: &str) {
    let model = ctx.model();
    if !ai::cli_available(model) {
        return;
    }

    println!("\n🤖 AI is analyzing the error...");
    let prompt = format!(
        "My goal was to execute the intent \"@{} {}\". It failed with the following error: {}. \
         Please analyze this error and provide a step-by-step solution.",
        todo.verb, todo.target, error
    );
    if let Err(e) = ai::start_session(model, Some(&prompt)) {
        println!("❌ Could not start {} session: {}", model, e);
    }
}

fn sync(ctx: &SessionContext) -> Result<()> {
    let script = ctx.paths.tools_dir().join(SYNC_SCRIPT);
    if !script.is_file() {
        println!(
            "💡 Nothing to sync. Add {} to {} to pull todos from other sources.",
            SYNC_SCRIPT,
            ctx.paths.tools_dir().display()
        );
        return Ok(());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("🔄 Syncing todos from all sources...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = session::run_checked(
        &HostCommand::new("bash", [script.to_string_lossy()]),
        StdioMode::Capture,
    );
    spinner.finish_and_clear();

    let outcome = result?;
    if let Some(out) = outcome.stdout.filter(|s| !s.is_empty()) {
        println!("{}", out);
    }
    println!("✅ Todos synced successfully");
    Ok(())
}
