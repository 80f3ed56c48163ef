//! The interactive `c9ai>` shell.

pub mod route;

pub use route::{classify, Builtin, Route};

use crate::commands::{ai, analytics, config, help, models, natural, shell, switch, todos, tools};
use crate::context::SessionContext;
use crate::error::{C9aiError, Result};
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::{Config, Editor};

const PROMPT: &str = "c9ai> ";

/// What the loop does after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Handle one line. Errors are reported here and never end the loop.
pub fn dispatch(ctx: &mut SessionContext, line: &str) -> Flow {
    let route = classify(line);
    tracing::debug!(?route, "dispatch");

    let result = match route {
        Route::Empty => Ok(()),
        Route::Exit => return Flow::Exit,
        Route::ChangeDir(dir) => shell::change_dir(dir.as_deref()),
        Route::Shell(command) => {
            shell::run(&command);
            Ok(())
        }
        Route::AiSession(model) => ai::session(model),
        Route::Builtin(builtin, args) => run_builtin(ctx, builtin, &args),
        Route::NaturalLanguage(text) => natural::execute(ctx, &text),
    };

    if let Err(e) = result {
        report(&e);
    }
    Flow::Continue
}

fn run_builtin(ctx: &mut SessionContext, builtin: Builtin, args: &[String]) -> Result<()> {
    match builtin {
        Builtin::Ask(model) => {
            let (prompt, autonomous) = split_autonomous(args);
            ai::execute(ctx, model, &prompt, autonomous)
        }
        Builtin::Switch => switch::execute(ctx, args.first().map(String::as_str)),
        Builtin::Todos => todos::execute(
            ctx,
            args.first().map(String::as_str),
            args.get(1..).unwrap_or_default(),
        ),
        Builtin::Add => todos::add(ctx, &args.join(" ")),
        Builtin::Analytics => analytics::execute(ctx),
        Builtin::Tools => tools::execute(ctx),
        Builtin::Models => models::execute(
            ctx,
            args.first().map(String::as_str),
            args.get(1).map(String::as_str),
        ),
        Builtin::Config => config::execute(ctx),
        Builtin::Help => {
            help::execute();
            Ok(())
        }
        Builtin::Logo => {
            help::banner();
            Ok(())
        }
    }
}

/// Pull `-a`/`--autonomous` out of a prompt's words.
pub fn split_autonomous(args: &[String]) -> (String, bool) {
    let mut autonomous = false;
    let mut words = Vec::with_capacity(args.len());
    for arg in args {
        match arg.as_str() {
            "-a" | "--autonomous" => autonomous = true,
            _ => words.push(arg.as_str()),
        }
    }
    (words.join(" "), autonomous)
}

fn report(err: &C9aiError) {
    eprintln!("❌ Error executing command: {}", err);
    match err {
        C9aiError::ToolNotInstalled(_) => {
            eprintln!("💡 Install it and make sure it is on your PATH, then try again.");
        }
        C9aiError::InvalidModel(_) => {
            eprintln!("💡 Usage: switch <claude|gemini|local>");
        }
        C9aiError::UnknownCatalogModel(_) => {
            eprintln!("💡 Run 'models list' to see what can be installed.");
        }
        _ => {}
    }
}

fn print_welcome(ctx: &SessionContext) {
    help::banner();
    println!(
        "Current AI: {}  |  Type 'help' for commands, 'exit' to quit.",
        ctx.model().as_str().to_uppercase()
    );
    println!("  @claude / @gemini    interactive session");
    println!("  !<command>           run a shell command");
    println!("  todos, tools, models, switch, config, analytics\n");
}

/// Read and dispatch lines until `exit`, end of input, or a second Ctrl-C.
pub fn run(ctx: &mut SessionContext) -> Result<()> {
    print_welcome(ctx);

    let config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .build();
    let history_path = ctx.paths.history_file();

    let mut rl: Editor<(), FileHistory> = Editor::with_config(config)?;
    if rl.load_history(&history_path).is_err() {
        tracing::debug!("no history at {}", history_path.display());
    }

    let mut interrupted = false;
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                interrupted = false;
                if dispatch(ctx, &line) == Flow::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                if interrupted {
                    break;
                }
                interrupted = true;
                println!("^C (press again to exit)");
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                tracing::warn!("line editor failed: {}", e);
                break;
            }
        }
    }

    if let Err(e) = rl.save_history(&history_path) {
        tracing::warn!("Could not save history to {}: {}", history_path.display(), e);
    }
    println!("👋 Thanks for using C9 AI!");
    Ok(())
}
