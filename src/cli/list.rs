//! `todo list` command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use super::open_store;
use crate::i18n::{self, Language};
use crate::task::{TaskLists, TaskStatus};

#[derive(Args)]
pub struct ListArgs {
    /// Only show pending tasks
    #[arg(long, conflicts_with = "completed")]
    pending: bool,

    /// Only show resolved tasks
    #[arg(long)]
    completed: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl ListArgs {
    fn sections(&self) -> Vec<TaskStatus> {
        match (self.pending, self.completed) {
            (true, _) => vec![TaskStatus::Pending],
            (_, true) => vec![TaskStatus::Completed],
            _ => vec![TaskStatus::Pending, TaskStatus::Completed],
        }
    }
}

#[derive(Serialize)]
struct ListJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pending: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed: Option<&'a [String]>,
}

pub fn run(file: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let (config, store) = open_store(file)?;
    let sections = args.sections();

    if args.json {
        let json = ListJson {
            pending: sections
                .contains(&TaskStatus::Pending)
                .then(|| store.pending()),
            completed: sections
                .contains(&TaskStatus::Completed)
                .then(|| store.completed()),
        };
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    print!("{}", render_sections(config.language, store.lists(), &sections));
    Ok(())
}

fn section_title(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => i18n::PENDING_TASKS,
        TaskStatus::Completed => i18n::RESOLVED_TASKS,
    }
}

fn render_sections(language: Language, lists: &TaskLists, sections: &[TaskStatus]) -> String {
    let mut output = String::new();

    for (i, status) in sections.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let tasks = lists.list(*status);
        output.push_str(&language.counted(section_title(*status), tasks.len()));
        output.push('\n');

        if tasks.is_empty() {
            output.push_str(&format!("  ({})\n", language.tr(i18n::NO_TASKS)));
            continue;
        }

        let check = match status {
            TaskStatus::Pending => "[ ]",
            TaskStatus::Completed => "[x]",
        };
        for task in tasks {
            output.push_str(&format!("  {} {}\n", check, task));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskLists {
        TaskLists {
            pending: vec!["Write report".to_string(), "Call Bob".to_string()],
            completed: vec!["Buy milk".to_string()],
        }
    }

    fn args(pending: bool, completed: bool) -> ListArgs {
        ListArgs {
            pending,
            completed,
            json: false,
        }
    }

    #[test]
    fn test_sections_default_to_both() {
        assert_eq!(
            args(false, false).sections(),
            vec![TaskStatus::Pending, TaskStatus::Completed]
        );
        assert_eq!(args(true, false).sections(), vec![TaskStatus::Pending]);
        assert_eq!(args(false, true).sections(), vec![TaskStatus::Completed]);
    }

    #[test]
    fn test_render_both_sections() {
        let out = render_sections(
            Language::En,
            &sample(),
            &[TaskStatus::Pending, TaskStatus::Completed],
        );
        assert_eq!(
            out,
            "Pending Tasks (2)\n  [ ] Write report\n  [ ] Call Bob\n\n\
             Resolved Tasks (1)\n  [x] Buy milk\n"
        );
    }

    #[test]
    fn test_render_localized_empty_section() {
        let out = render_sections(Language::De, &TaskLists::new(), &[TaskStatus::Completed]);
        assert_eq!(out, "Erledigte Aufgaben (0)\n  (Keine Aufgaben)\n");
    }

    #[test]
    fn test_json_shape() {
        let lists = sample();
        let json = ListJson {
            pending: Some(lists.pending.as_slice()),
            completed: None,
        };
        let value: serde_json::Value = serde_json::to_value(&json).unwrap();
        assert_eq!(value["pending"][1], "Call Bob");
        assert!(value.get("completed").is_none());
    }
}
