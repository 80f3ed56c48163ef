use crate::commands::helpers;

pub const VERSION: &str = env!("C9AI_VERSION");

const BANNER: &str = r"
🌟 ============================================ 🌟
    ____  ___    _    ___
   / ___|/ _ \  / \  |_ _|
  | |   | (_) |/ _ \  | |
  | |___|\__, / ___ \ | |
   \____| /_/_/   \_\___|

  Autonomous AI-Powered Productivity System
  🤖 Claude CLI    ✨ Gemini CLI    🚀 Tool Use
🌟 ============================================ 🌟";

pub fn banner() {
    println!("{}", BANNER);
    println!("  v{}\n", VERSION);
}

pub fn execute() {
    helpers::heading("📖 C9 AI Help", 20);

    println!("\n🤖 Interactive AI Sessions:");
    println!("  @claude             - Start an interactive session with Claude");
    println!("  @gemini             - Start an interactive session with Gemini");
    println!("  claude <prompt>     - Start a Claude session with a prompt (-a: autonomous)");
    println!("  gemini <prompt>     - Start a Gemini session with a prompt (-a: autonomous)");

    println!("\n📋 Productivity:");
    println!("  todos [action]      - Manage todos (list, add, actions, execute, sync)");
    println!("  add <task>          - Shortcut for 'todos add'");
    println!("  analytics           - View productivity insights");

    println!("\n🔧 System:");
    println!("  ! <command>         - Execute any shell command (e.g., !ls -l)");
    println!("  !cd <dir>           - Change the shell's working directory");
    println!("  switch <model>      - Switch default AI model (claude|gemini|local)");
    println!("  models [action]     - Manage local models (list, install, remove, status)");
    println!("  tools               - List available tools");
    println!("  config              - Show configuration");
    println!("  help                - Show this help");
    println!("  exit, quit          - Leave the shell");
}
