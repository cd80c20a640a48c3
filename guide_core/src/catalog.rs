//! Built-in command catalog.
//!
//! A fixed table of predefined macOS shell commands, compiled in and shared
//! read-only for the life of the process. Entries keep their table order, and
//! the matcher reports hits in that order.

use regex::Regex;
use serde::Serialize;

/// One predefined command: a short task label, the literal command text, and
/// a human-readable description.
///
/// `command` may embed `{placeholder}` segments (e.g. `brew install
/// {app_name}`) that the operator fills in by hand before running it. The
/// catalog never substitutes or executes anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandEntry {
    pub task: &'static str,
    pub command: &'static str,
    pub description: &'static str,
}

impl CommandEntry {
    /// Placeholder names embedded in this entry's command text, in order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        placeholders(self.command)
    }
}

/// The full catalog, in display order.
pub fn catalog() -> &'static [CommandEntry] {
    CATALOG
}

/// Extract `{name}` placeholder names from a command string, in order of
/// appearance. Listing only; substitution is left to the operator.
pub fn placeholders(command: &str) -> Vec<&str> {
    let placeholder_re = Regex::new(r"\{(\w+)\}").unwrap();

    placeholder_re
        .captures_iter(command)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

static CATALOG: &[CommandEntry] = &[
    // System Management
    CommandEntry {
        task: "show system info",
        command: "system_profiler SPHardwareDataType",
        description: "Displays detailed system hardware information",
    },
    CommandEntry {
        task: "check storage space",
        command: "df -h",
        description: "Shows available disk space in human-readable format",
    },
    CommandEntry {
        task: "show memory usage",
        command: "top -l 1 -s 0 | grep PhysMem",
        description: "Displays current memory usage statistics",
    },
    CommandEntry {
        task: "show cpu info",
        command: "sysctl -n machdep.cpu.brand_string",
        description: "Shows CPU model information",
    },
    CommandEntry {
        task: "show battery status",
        command: "pmset -g batt",
        description: "Displays battery status and power information",
    },
    // Package Management
    CommandEntry {
        task: "install homebrew",
        command: r#"/bin/bash -c "$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)""#,
        description: "Installs Homebrew package manager",
    },
    CommandEntry {
        task: "update homebrew",
        command: "brew update && brew upgrade",
        description: "Updates Homebrew and all installed packages",
    },
    CommandEntry {
        task: "install application",
        command: "brew install {app_name}",
        description: "Installs an application using Homebrew",
    },
    CommandEntry {
        task: "uninstall application",
        command: "brew uninstall {app_name}",
        description: "Removes an application installed via Homebrew",
    },
    // File Operations
    CommandEntry {
        task: "list files",
        command: "ls -la",
        description: "Lists all files including hidden ones with detailed information",
    },
    CommandEntry {
        task: "find file",
        command: "find . -name '{filename}'",
        description: "Searches for files by name in current directory and subdirectories",
    },
    CommandEntry {
        task: "search file content",
        command: "grep -r '{search_term}' .",
        description: "Searches for text within files in current directory and subdirectories",
    },
    CommandEntry {
        task: "change directory",
        command: "cd {directory_path}",
        description: "Changes current directory",
    },
    CommandEntry {
        task: "create directory",
        command: "mkdir -p {directory_name}",
        description: "Creates a new directory (including parent directories if needed)",
    },
    CommandEntry {
        task: "remove file",
        command: "rm {file_name}",
        description: "Removes a file",
    },
    CommandEntry {
        task: "remove directory",
        command: "rm -rf {directory_name}",
        description: "Removes a directory and its contents",
    },
    CommandEntry {
        task: "copy file",
        command: "cp {source} {destination}",
        description: "Copies a file from source to destination",
    },
    CommandEntry {
        task: "move file",
        command: "mv {source} {destination}",
        description: "Moves or renames a file",
    },
    // Network
    CommandEntry {
        task: "show ip address",
        command: "ifconfig | grep 'inet '",
        description: "Displays all IP addresses for network interfaces",
    },
    CommandEntry {
        task: "test internet connection",
        command: "ping -c 4 google.com",
        description: "Tests internet connectivity by pinging Google",
    },
    CommandEntry {
        task: "show wifi networks",
        command: "/System/Library/PrivateFrameworks/Apple80211.framework/Versions/Current/Resources/airport -s",
        description: "Lists available WiFi networks",
    },
    CommandEntry {
        task: "show network ports",
        command: "lsof -i -P | grep LISTEN",
        description: "Shows all open network ports and listening services",
    },
    // Development Tools
    CommandEntry {
        task: "install git",
        command: "brew install git",
        description: "Installs Git version control system",
    },
    CommandEntry {
        task: "install node",
        command: "brew install node",
        description: "Installs Node.js and npm",
    },
    CommandEntry {
        task: "install python",
        command: "brew install python",
        description: "Installs Python 3",
    },
    CommandEntry {
        task: "install vscode",
        command: "brew install --cask visual-studio-code",
        description: "Installs Visual Studio Code editor",
    },
    // System Maintenance
    CommandEntry {
        task: "clear dns cache",
        command: "sudo dscacheutil -flushcache; sudo killall -HUP mDNSResponder",
        description: "Clears DNS cache to resolve network issues",
    },
    CommandEntry {
        task: "repair disk permissions",
        command: "sudo diskutil repairPermissions /",
        description: "Repairs disk permissions",
    },
    CommandEntry {
        task: "show hidden files",
        command: "defaults write com.apple.finder AppleShowAllFiles YES && killall Finder",
        description: "Shows hidden files in Finder",
    },
    CommandEntry {
        task: "hide hidden files",
        command: "defaults write com.apple.finder AppleShowAllFiles NO && killall Finder",
        description: "Hides hidden files in Finder",
    },
    // Performance & Monitoring
    CommandEntry {
        task: "show running processes",
        command: "ps aux",
        description: "Lists all running processes with detailed information",
    },
    CommandEntry {
        task: "kill process",
        command: "kill -9 {process_id}",
        description: "Force quits a process using its ID",
    },
    CommandEntry {
        task: "monitor system",
        command: "top",
        description: "Shows real-time system statistics and processes",
    },
];
