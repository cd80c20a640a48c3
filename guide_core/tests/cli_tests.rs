// End-to-end checks for the guide_cli binary.

use assert_cmd::Command;

fn guide_cli() -> Command {
    Command::cargo_bin("guide_cli").expect("guide_cli binary")
}

#[test]
fn version_prints_name_and_version() {
    guide_cli()
        .arg("version")
        .assert()
        .success()
        .stdout("guide_cli v1.0.0\nTermGuide command catalog lookup\n");
}

#[test]
fn suggest_prints_six_example_queries() {
    guide_cli().arg("suggest").assert().success().stdout(
        "show system info\n\
         check storage space\n\
         install homebrew\n\
         show ip address\n\
         install development tools\n\
         monitor system performance\n",
    );
}

#[test]
fn json_search_emits_one_line_per_match() {
    guide_cli()
        .args(["search", "--json", "check", "storage", "space"])
        .assert()
        .success()
        .stdout(
            "{\"command\":\"df -h\",\"description\":\"Shows available disk space in human-readable format\"}\n",
        );
}

#[test]
fn json_search_with_no_match_emits_nothing() {
    guide_cli()
        .args(["search", "--json", "zzzznonexistent"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn search_card_lists_placeholders() {
    guide_cli()
        .args(["search", "uninstall"])
        .assert()
        .success()
        .stdout(
            "$ brew uninstall {app_name}\n\
             \x20   Removes an application installed via Homebrew\n\
             \x20   fill in: app_name\n\
             \n\
             1 match(es)\n",
        );
}

#[test]
fn no_match_falls_back_to_overview() {
    guide_cli()
        .args(["search", "zzzznonexistent"])
        .assert()
        .success()
        .stdout(
            "No matching commands.\n\
             \n\
             TermGuide can help you with:\n\
             \n\
             System Management\n\
             \x20 - System information\n\
             \x20 - Disk space and memory\n\
             \x20 - CPU and battery status\n\
             \n\
             Development Tools\n\
             \x20 - Installing programming languages\n\
             \x20 - Setting up development environments\n\
             \x20 - Version control systems\n\
             \n\
             Network Operations\n\
             \x20 - Network diagnostics\n\
             \x20 - WiFi management\n\
             \x20 - IP configuration\n\
             \n\
             File Operations\n\
             \x20 - File management\n\
             \x20 - Directory operations\n\
             \x20 - Search and navigation\n",
        );
}
