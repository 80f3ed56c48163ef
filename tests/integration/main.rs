mod cli_tests;
mod repl_tests;
