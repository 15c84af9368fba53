//! Display-string localization
//!
//! Labels are looked up by their English text. Anything without an entry for
//! the current language is shown as the key itself.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const ADD_TASK: &str = "Add Task";
pub const EDIT: &str = "Edit";
pub const DELETE: &str = "Delete";
pub const PENDING_TASKS: &str = "Pending Tasks";
pub const RESOLVED_TASKS: &str = "Resolved Tasks";
pub const EDIT_TASK: &str = "Edit Task";
pub const EDIT_PROMPT: &str = "Edit the task:";
pub const MUST_ENTER_TASK: &str = "You must enter a task.";
pub const NO_LINE_BREAKS: &str = "Task text cannot contain line breaks.";
pub const WARNING: &str = "Warning";
pub const DELETE_TASK: &str = "Delete Task";
pub const DELETE_CONFIRM: &str = "Delete this task?";
pub const NO_TASKS: &str = "No tasks";
pub const LANGUAGE: &str = "Language";

/// Every label the interface looks up
pub const LABELS: [&str; 14] = [
    ADD_TASK,
    EDIT,
    DELETE,
    PENDING_TASKS,
    RESOLVED_TASKS,
    EDIT_TASK,
    EDIT_PROMPT,
    MUST_ENTER_TASK,
    NO_LINE_BREAKS,
    WARNING,
    DELETE_TASK,
    DELETE_CONFIRM,
    NO_TASKS,
    LANGUAGE,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Es,
    It,
    De,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Fr,
        Language::Es,
        Language::It,
        Language::De,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::It => "it",
            Language::De => "de",
        }
    }

    /// Menu name, always in English
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "French",
            Language::Es => "Spanish",
            Language::It => "Italian",
            Language::De => "German",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    pub fn tr<'a>(&self, key: &'a str) -> &'a str {
        translate(*self, key)
    }

    /// `"<label> (<count>)"`, used for list headers
    pub fn counted(&self, key: &str, count: usize) -> String {
        format!("{} ({})", self.tr(key), count)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

pub fn supported_codes() -> String {
    Language::ALL
        .iter()
        .map(|l| l.code())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn translate(language: Language, key: &str) -> &str {
    lookup(language, key).unwrap_or(key)
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    let text = match (language, key) {
        (Language::En, _) => return None,

        (Language::Fr, ADD_TASK) => "Ajouter Tâche",
        (Language::Fr, EDIT) => "Modifier",
        (Language::Fr, DELETE) => "Supprimer",
        (Language::Fr, PENDING_TASKS) => "Tâches en attente",
        (Language::Fr, RESOLVED_TASKS) => "Tâches résolues",
        (Language::Fr, EDIT_TASK) => "Modifier la tâche",
        (Language::Fr, EDIT_PROMPT) => "Modifiez la tâche:",
        (Language::Fr, MUST_ENTER_TASK) => "Vous devez entrer une tâche.",
        (Language::Fr, NO_LINE_BREAKS) => "Une tâche ne peut pas contenir de saut de ligne.",
        (Language::Fr, WARNING) => "Avertissement",
        (Language::Fr, DELETE_TASK) => "Supprimer la tâche",
        (Language::Fr, DELETE_CONFIRM) => "Supprimer cette tâche ?",
        (Language::Fr, NO_TASKS) => "Aucune tâche",
        (Language::Fr, LANGUAGE) => "Langue",

        (Language::Es, ADD_TASK) => "Añadir tarea",
        (Language::Es, EDIT) => "Editar",
        (Language::Es, DELETE) => "Eliminar",
        (Language::Es, PENDING_TASKS) => "Tareas pendientes",
        (Language::Es, RESOLVED_TASKS) => "Tareas resueltas",
        (Language::Es, EDIT_TASK) => "Editar tarea",
        (Language::Es, EDIT_PROMPT) => "Edita la tarea:",
        (Language::Es, MUST_ENTER_TASK) => "Debes ingresar una tarea.",
        (Language::Es, NO_LINE_BREAKS) => "Una tarea no puede contener saltos de línea.",
        (Language::Es, WARNING) => "Advertencia",
        (Language::Es, DELETE_TASK) => "Eliminar tarea",
        (Language::Es, DELETE_CONFIRM) => "¿Eliminar esta tarea?",
        (Language::Es, NO_TASKS) => "No hay tareas",
        (Language::Es, LANGUAGE) => "Idioma",

        (Language::It, ADD_TASK) => "Aggiungi compito",
        (Language::It, EDIT) => "Modifica",
        (Language::It, DELETE) => "Elimina",
        (Language::It, PENDING_TASKS) => "Compiti in sospeso",
        (Language::It, RESOLVED_TASKS) => "Compiti risolti",
        (Language::It, EDIT_TASK) => "Modifica compito",
        (Language::It, EDIT_PROMPT) => "Modifica il compito:",
        (Language::It, MUST_ENTER_TASK) => "Devi inserire un compito.",
        (Language::It, NO_LINE_BREAKS) => "Un compito non può contenere interruzioni di riga.",
        (Language::It, WARNING) => "Avviso",
        (Language::It, DELETE_TASK) => "Elimina compito",
        (Language::It, DELETE_CONFIRM) => "Eliminare questo compito?",
        (Language::It, NO_TASKS) => "Nessun compito",
        (Language::It, LANGUAGE) => "Lingua",

        (Language::De, ADD_TASK) => "Aufgabe hinzufügen",
        (Language::De, EDIT) => "Bearbeiten",
        (Language::De, DELETE) => "Löschen",
        (Language::De, PENDING_TASKS) => "Ausstehende Aufgaben",
        (Language::De, RESOLVED_TASKS) => "Erledigte Aufgaben",
        (Language::De, EDIT_TASK) => "Aufgabe bearbeiten",
        (Language::De, EDIT_PROMPT) => "Bearbeiten Sie die Aufgabe:",
        (Language::De, MUST_ENTER_TASK) => "Sie müssen eine Aufgabe eingeben.",
        (Language::De, NO_LINE_BREAKS) => "Eine Aufgabe darf keine Zeilenumbrüche enthalten.",
        (Language::De, WARNING) => "Warnung",
        (Language::De, DELETE_TASK) => "Aufgabe löschen",
        (Language::De, DELETE_CONFIRM) => "Diese Aufgabe löschen?",
        (Language::De, NO_TASKS) => "Keine Aufgaben",
        (Language::De, LANGUAGE) => "Sprache",

        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGINAL_LABELS: [&str; 8] = [
        ADD_TASK,
        EDIT,
        DELETE,
        PENDING_TASKS,
        RESOLVED_TASKS,
        EDIT_TASK,
        EDIT_PROMPT,
        MUST_ENTER_TASK,
    ];

    #[test]
    fn test_english_is_identity() {
        for key in ORIGINAL_LABELS {
            assert_eq!(translate(Language::En, key), key);
        }
    }

    #[test]
    fn test_every_label_translated_in_every_language() {
        for lang in Language::ALL {
            if lang == Language::En {
                continue;
            }
            for key in ORIGINAL_LABELS {
                assert!(
                    lookup(lang, key).is_some(),
                    "missing {} translation for '{}'",
                    lang.code(),
                    key
                );
            }
        }
    }

    #[test]
    fn test_extra_labels_translated() {
        for lang in [Language::Fr, Language::Es, Language::It, Language::De] {
            for key in LABELS {
                assert_ne!(lang.tr(key), key, "{} has no '{}'", lang.code(), key);
            }
        }
    }

    #[test]
    fn test_known_translations() {
        assert_eq!(Language::Fr.tr(ADD_TASK), "Ajouter Tâche");
        assert_eq!(Language::Es.tr(PENDING_TASKS), "Tareas pendientes");
        assert_eq!(Language::It.tr(RESOLVED_TASKS), "Compiti risolti");
        assert_eq!(Language::De.tr(DELETE), "Löschen");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(Language::Fr.tr("Quit"), "Quit");
        assert_eq!(translate(Language::De, "something else"), "something else");
    }

    #[test]
    fn test_counted() {
        assert_eq!(Language::En.counted(PENDING_TASKS, 3), "Pending Tasks (3)");
        assert_eq!(
            Language::Fr.counted(RESOLVED_TASKS, 0),
            "Tâches résolues (0)"
        );
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!(Language::parse("fr"), Some(Language::Fr));
        assert_eq!(Language::parse(" DE "), Some(Language::De));
        assert_eq!(Language::parse("pt"), None);
        for lang in Language::ALL {
            assert_eq!(Language::parse(lang.code()), Some(lang));
        }
    }

    #[test]
    fn test_supported_codes() {
        assert_eq!(supported_codes(), "en, fr, es, it, de");
    }

    #[test]
    fn test_serde_uses_code() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            language: Language,
        }
        let out = toml::to_string(&Wrapper {
            language: Language::It,
        })
        .unwrap();
        assert_eq!(out.trim(), r#"language = "it""#);

        let back: Wrapper = toml::from_str(r#"language = "es""#).unwrap();
        assert_eq!(back.language, Language::Es);
    }
}
