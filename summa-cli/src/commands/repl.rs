//! The `summa repl` command.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use summa_common::Letter;
use summa_diagnostic::emit;
use summa_eval::{Environment, evaluate};
use summa_parser::parse;

pub fn run() -> Result<(), String> {
    println!("summa REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for help, :quit to exit");
    println!();

    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;

    // Bindings persist across the whole session.
    let mut env = Environment::new();

    loop {
        let readline = rl.readline("summa> ");
        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Handle REPL commands
                if line.starts_with(':') {
                    if !command(line, &mut env) {
                        break;
                    }
                    continue;
                }

                let (tree, diagnostics) = parse(line);
                for diag in &diagnostics {
                    emit(line, "<repl>", diag);
                }

                // Best effort even after diagnostics: the recovered
                // tree evaluates, possibly to NaN.
                println!("{}", evaluate(&tree, Some(&env)));
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Execute a `:` command. Returns false when the REPL should exit.
fn command(line: &str, env: &mut Environment) -> bool {
    let mut words = line.splitn(3, char::is_whitespace);
    let head = words.next().unwrap_or_default();

    match head {
        ":quit" | ":q" => return false,
        ":help" | ":h" => {
            println!("Commands:");
            println!("  :help, :h        Show this help");
            println!("  :quit, :q        Exit the REPL");
            println!("  :env             Show current bindings");
            println!("  :set NAME EXPR   Bind a variable, e.g. `:set x 1.5`");
            println!("  :ast EXPR        Show the expression tree");
        }
        ":env" => {
            let mut any = false;
            for (name, value) in env.bindings() {
                println!("  {name} = {value}");
                any = true;
            }
            if !any {
                println!("(no bindings)");
            }
        }
        ":set" => set(words.next(), words.next(), env),
        ":ast" => match line.strip_prefix(":ast").map(str::trim) {
            Some(rest) if !rest.is_empty() => {
                let (tree, diagnostics) = parse(rest);
                for diag in &diagnostics {
                    emit(rest, "<repl>", diag);
                }
                println!("{tree:?}");
            }
            _ => println!("usage: :ast EXPR"),
        },
        _ => println!("Unknown command: {}", line),
    }

    true
}

/// Bind a variable to the value of an expression. Binding NaN unbinds.
fn set(name: Option<&str>, expr: Option<&str>, env: &mut Environment) {
    let name = name.and_then(|word| {
        let mut chars = word.chars();
        match (chars.next().and_then(Letter::new), chars.next()) {
            (Some(letter), None) => Some(letter),
            _ => None,
        }
    });

    let (Some(name), Some(expr)) = (name, expr) else {
        println!("usage: :set NAME EXPR (NAME is a single letter)");
        return;
    };

    let (tree, diagnostics) = parse(expr);
    for diag in &diagnostics {
        emit(expr, "<repl>", diag);
    }

    let value = evaluate(&tree, Some(env));
    env.set(name, value);
    println!("{name} = {value}");
}
