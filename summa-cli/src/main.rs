//! summa CLI - the summa expression command line interface.
//! summa CLI - summa 表达式的命令行界面。

mod commands;
mod output;

use clap::{Parser, Subcommand};

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "summa")]
#[command(author, version, about = "summa - evaluate and sum arithmetic expressions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression. / 求值表达式。
    Eval {
        /// The expression to evaluate. / 要求值的表达式。
        expr: String,

        /// Print the simplified expression instead of its value.
        /// 打印化简后的表达式而不是其值。
        #[arg(long)]
        simplify: bool,

        /// Print the expression tree. / 打印表达式树。
        #[arg(long)]
        ast: bool,
    },

    /// Sum an expression over an integer range of `i`. / 对 `i` 的整数区间求和。
    Sum {
        /// First value of the index (inclusive). / 下标的起始值（含）。
        lower_bound: i64,

        /// Last value of the index (inclusive). / 下标的结束值（含）。
        upper_bound: i64,

        /// The summand, usually mentioning `i`. / 被加项，通常含 `i`。
        summand: String,
    },

    /// Start an interactive REPL. / 启动交互式 REPL。
    Repl,
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eval {
            expr,
            simplify,
            ast,
        } => commands::eval::run(&expr, simplify, ast, cli.verbose),
        Commands::Sum {
            lower_bound,
            upper_bound,
            summand,
        } => commands::sum::run(lower_bound, upper_bound, &summand, cli.verbose),
        Commands::Repl => commands::repl::run(),
    };

    if let Err(e) = result {
        if !cli.quiet {
            output::error(&e);
        }
        std::process::exit(1);
    }
}
