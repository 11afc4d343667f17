#![forbid(unsafe_code)]

//! Static text printed by the shell.

pub const WELCOME: &str = "Welcome to the portfolio terminal.";

pub const BANNER: &[&str] = &[
    r" ____            _    __       _ _       ",
    r"|  _ \ ___  _ __| |_ / _| ___ | (_) ___  ",
    r"| |_) / _ \| '__| __| |_ / _ \| | |/ _ \ ",
    r"|  __/ (_) | |  | |_|  _| (_) | | | (_) |",
    r"|_|   \___/|_|   \__|_|  \___/|_|_|\___/ ",
];

pub const DISCLAIMER: &str =
    "This is a simulated shell. Nothing typed here touches a real system.";

pub const SYSTEM_INFO: &[&str] = &[
    "System information:",
    "  OS:           PortfolioOS 4.2.0 (wasm32)",
    "  Kernel:       rainshell 0.1.0",
    "  Uptime:       42 days, 4:20",
    "  Memory usage: 13%",
    "  Processes:    7",
];

pub const HELP_HEADER: &str = "Available commands:";

/// One description per help entry.
pub const HELP_ENTRIES: &[&str] = &[
    "  help                     show this list",
    "  whoami                   print who you are talking to",
    "  ls projects              list featured projects",
    "  cd projects              open the projects page",
    "  cd resume | cd contact   open the resume or contact page",
    "  clear                    clear the screen",
];

pub const IDENTITY: &str = "guest: a visitor exploring this portfolio";

pub const PROJECTS: &[&str] = &[
    "drwxr-xr-x  rainshell/        digital rain and a fake shell in WebAssembly",
    "drwxr-xr-x  tile-engine/      GPU tile renderer for retro games",
    "drwxr-xr-x  kv-log/           append-only key-value store with compaction",
    "drwxr-xr-x  dotfiles/         editor and shell configuration",
];
