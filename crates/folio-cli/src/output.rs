//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use folio_core::{ConfigStore, ProjectCategory, ProjectRecord, ProjectStatus};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Print per-category visibility.
pub fn print_sections_table(store: &ConfigStore) {
    println!("{}", "Sections".bold());
    println!("{:<12} {:<10} {:<8} {:<8}", "Category", "Visible", "Active", "Total");
    println!("{}", "─".repeat(40));

    for category in ProjectCategory::ALL {
        let visible = if store.is_category_visible(category) {
            "yes".green()
        } else {
            "no".dimmed()
        };
        println!(
            "{:<12} {:<10} {:<8} {:<8}",
            category.as_str(),
            visible,
            store.get_active_projects(category).len(),
            store.projects(category).len()
        );
    }
}

/// Print the projects of one category.
pub fn print_projects_table(category: ProjectCategory, projects: &[ProjectRecord]) {
    println!("{}", category.display_name().cyan().bold());

    if projects.is_empty() {
        println!("{}", "No projects.".dimmed());
        return;
    }

    println!("{} {} {}", pad_right("Title", 30), pad_right("Label", 16), "Status");
    println!("{}", "─".repeat(60));

    for project in projects {
        println!(
            "{} {} {}",
            pad_right(&truncate_visual(project.title(), 28), 30),
            pad_right(&truncate_visual(project.label(), 14), 16),
            status_colored(project.status())
        );
    }
}

fn status_colored(status: ProjectStatus) -> ColoredString {
    match status {
        ProjectStatus::Active => status.as_str().green(),
        ProjectStatus::ComingSoon => status.as_str().yellow(),
        ProjectStatus::Inactive => status.as_str().dimmed(),
    }
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_visual() {
        assert_eq!(truncate_visual("short", 10), "short");
        assert_eq!(truncate_visual("a very long project title", 10), "a very l..");
        assert_eq!(truncate_visual("⚡⚡⚡⚡⚡⚡", 6), "⚡⚡..");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("abcdef", 4), "abcdef");
    }
}
