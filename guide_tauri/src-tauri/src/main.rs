#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

mod commands;
mod structured_log;

use commands::{
    command_placeholders, copy_command, get_capabilities, get_suggestions, search_commands,
};
use std::io::Write;
use std::panic;
use tauri::{Manager, Menu, MenuItem, Submenu};

// App version info command
#[tauri::command]
fn get_app_version() -> serde_json::Value {
    serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "name": "TermGuide",
        "build": if cfg!(debug_assertions) { "debug" } else { "release" },
        "target": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
    })
}

// Custom panic hook for crash reporting
fn setup_panic_handler() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        // Write crash log to file
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let crash_log_path = format!("{}/.termguide/crash.log", home);
        let _ = std::fs::create_dir_all(format!("{}/.termguide", home));

        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&crash_log_path)
        {
            let timestamp = chrono::Utc::now().to_rfc3339();
            let crash_report = format!(
                "\n=== CRASH REPORT ===\n\
                Timestamp: {}\n\
                Location: {}\n\
                Message: {}\n\
                Version: {}\n\
                OS: {} ({})\n\
                ====================\n",
                timestamp,
                location,
                message,
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS,
                std::env::consts::ARCH
            );
            let _ = file.write_all(crash_report.as_bytes());
            eprintln!("[CRASH] Panic logged to {}", crash_log_path);
        }

        default_hook(panic_info);
    }));
}

fn main() {
    setup_panic_handler();

    // Create menu with DevTools option
    let menu = Menu::new().add_submenu(Submenu::new(
        "View",
        Menu::new()
            .add_native_item(MenuItem::Copy)
            .add_native_item(MenuItem::Paste)
            .add_native_item(MenuItem::SelectAll)
            .add_native_item(MenuItem::Separator)
            .add_item(
                tauri::CustomMenuItem::new("devtools".to_string(), "Toggle DevTools")
                    .accelerator("CmdOrCtrl+Shift+I"),
            ),
    ));

    tauri::Builder::default()
        .menu(menu)
        .on_menu_event(|event| match event.menu_item_id() {
            "devtools" => {
                #[cfg(debug_assertions)]
                event.window().open_devtools();
            }
            _ => {}
        })
        .setup(|app| {
            // Get the main window and set focus
            if let Some(window) = app.get_window("main") {
                let _ = window.set_focus();
            }

            structured_log::init_default();
            eprintln!(
                "[STARTUP] TermGuide ready ({} catalog entries)",
                guide_core::catalog().len()
            );

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            get_app_version,
            search_commands,
            get_suggestions,
            get_capabilities,
            command_placeholders,
            copy_command,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Tauri application");
}
