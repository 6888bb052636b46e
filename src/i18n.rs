//! Localized question templates.
//!
//! Each language carries one template per task type, written in the
//! `${...}` placeholder syntax understood by `practice_engine::template`.
//! English is the reference table; [`task_template`] falls back to the
//! English string (with a diagnostic) should a language ever lack a key, so
//! lookups never fail.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::practice_engine::models::TaskType;

/// Supported question languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
    Fr,
    Es,
    Ru,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::De,
        Language::Fr,
        Language::Es,
        Language::Ru,
    ];

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::Ru => "ru",
        }
    }

    /// Resolve a locale code, tolerating region subtags (`"de-AT"` → `De`)
    /// and case. Unsupported codes fall back to English.
    pub fn from_code(code: &str) -> Language {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or(code)
            .to_ascii_lowercase();
        match Language::ALL.into_iter().find(|l| l.code() == primary) {
            Some(lang) => lang,
            None => {
                debug!(code, "unsupported language code, falling back to English");
                Language::En
            }
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Question template for `task` in `language`.
///
/// Falls back to English (and logs) if the language's table has no entry;
/// the English table is complete by construction, so this never fails.
pub fn task_template(language: Language, task: TaskType) -> &'static str {
    match template_for(language, task) {
        Some(template) => template,
        None => {
            warn!(
                language = %language,
                task = %task,
                "missing question template, falling back to English"
            );
            english_template(task)
        }
    }
}

fn template_for(language: Language, task: TaskType) -> Option<&'static str> {
    match language {
        Language::En => Some(english_template(task)),
        Language::De => german_template(task),
        Language::Fr => french_template(task),
        Language::Es => spanish_template(task),
        Language::Ru => russian_template(task),
    }
}

fn english_template(task: TaskType) -> &'static str {
    match task {
        TaskType::Addition => "What is ${num1} + ${num2}?",
        TaskType::Subtraction => "What is ${num1} - ${num2}?",
        TaskType::Multiplication => "What is ${num1} × ${num2}?",
        TaskType::Division => "What is ${dividend} ÷ ${divisor}?",
        TaskType::Fractions => {
            "What is ${num1}/${den1} + ${num2}/${den2}? Give your answer in lowest terms."
        }
        TaskType::Decimals => "What is ${num1} + ${num2}?",
        TaskType::Percentages => "What is ${percentage}% of ${number}?",
        TaskType::Proportions => "Complete the proportion: ${a}:${b} = ${c}:?",
        TaskType::Ratios => {
            "Share a total of ${total} in the ratio ${ratio1}:${ratio2}. How big is the first part?"
        }
        TaskType::Expressions => "What is the value of ${a} × ${b} + ${c}?",
        TaskType::Equations => "Solve for x: ${a}x + ${b} = ${rhs}",
        TaskType::Inequalities => {
            "What is the smallest whole number x with ${a}x + ${b} >= ${rhs}?"
        }
        TaskType::Systems => "Solve the system: x + y = ${a} and x - y = ${b}",
        TaskType::Polynomials => {
            "Evaluate ${a}x² ${b >= 0 ? \"+\" : \"\"}${b}x ${c >= 0 ? \"+\" : \"\"}${c} for x = ${x}"
        }
    }
}

fn german_template(task: TaskType) -> Option<&'static str> {
    Some(match task {
        TaskType::Addition => "Wie viel ist ${num1} + ${num2}?",
        TaskType::Subtraction => "Wie viel ist ${num1} - ${num2}?",
        TaskType::Multiplication => "Wie viel ist ${num1} × ${num2}?",
        TaskType::Division => "Wie viel ist ${dividend} ÷ ${divisor}?",
        TaskType::Fractions => {
            "Wie viel ist ${num1}/${den1} + ${num2}/${den2}? Gib das Ergebnis vollständig gekürzt an."
        }
        TaskType::Decimals => "Wie viel ist ${num1} + ${num2}?",
        TaskType::Percentages => "Wie viel sind ${percentage}% von ${number}?",
        TaskType::Proportions => "Vervollständige die Proportion: ${a}:${b} = ${c}:?",
        TaskType::Ratios => {
            "Teile insgesamt ${total} im Verhältnis ${ratio1}:${ratio2}. Wie groß ist der erste Teil?"
        }
        TaskType::Expressions => "Was ist der Wert von ${a} × ${b} + ${c}?",
        TaskType::Equations => "Löse nach x auf: ${a}x + ${b} = ${rhs}",
        TaskType::Inequalities => {
            "Was ist die kleinste ganze Zahl x mit ${a}x + ${b} >= ${rhs}?"
        }
        TaskType::Systems => "Löse das Gleichungssystem: x + y = ${a} und x - y = ${b}",
        TaskType::Polynomials => {
            "Berechne ${a}x² ${b >= 0 ? \"+\" : \"\"}${b}x ${c >= 0 ? \"+\" : \"\"}${c} für x = ${x}"
        }
    })
}

fn french_template(task: TaskType) -> Option<&'static str> {
    Some(match task {
        TaskType::Addition => "Combien font ${num1} + ${num2} ?",
        TaskType::Subtraction => "Combien font ${num1} - ${num2} ?",
        TaskType::Multiplication => "Combien font ${num1} × ${num2} ?",
        TaskType::Division => "Combien font ${dividend} ÷ ${divisor} ?",
        TaskType::Fractions => {
            "Combien font ${num1}/${den1} + ${num2}/${den2} ? Donne le résultat sous forme irréductible."
        }
        TaskType::Decimals => "Combien font ${num1} + ${num2} ?",
        TaskType::Percentages => "Combien font ${percentage}% de ${number} ?",
        TaskType::Proportions => "Complète la proportion : ${a}:${b} = ${c}:?",
        TaskType::Ratios => {
            "Partage un total de ${total} selon le rapport ${ratio1}:${ratio2}. Quelle est la première part ?"
        }
        TaskType::Expressions => "Quelle est la valeur de ${a} × ${b} + ${c} ?",
        TaskType::Equations => "Résous pour x : ${a}x + ${b} = ${rhs}",
        TaskType::Inequalities => {
            "Quel est le plus petit nombre entier x tel que ${a}x + ${b} >= ${rhs} ?"
        }
        TaskType::Systems => "Résous le système : x + y = ${a} et x - y = ${b}",
        TaskType::Polynomials => {
            "Calcule ${a}x² ${b >= 0 ? \"+\" : \"\"}${b}x ${c >= 0 ? \"+\" : \"\"}${c} pour x = ${x}"
        }
    })
}

fn spanish_template(task: TaskType) -> Option<&'static str> {
    Some(match task {
        TaskType::Addition => "¿Cuánto es ${num1} + ${num2}?",
        TaskType::Subtraction => "¿Cuánto es ${num1} - ${num2}?",
        TaskType::Multiplication => "¿Cuánto es ${num1} × ${num2}?",
        TaskType::Division => "¿Cuánto es ${dividend} ÷ ${divisor}?",
        TaskType::Fractions => {
            "¿Cuánto es ${num1}/${den1} + ${num2}/${den2}? Da el resultado en su forma irreducible."
        }
        TaskType::Decimals => "¿Cuánto es ${num1} + ${num2}?",
        TaskType::Percentages => "¿Cuánto es el ${percentage}% de ${number}?",
        TaskType::Proportions => "Completa la proporción: ${a}:${b} = ${c}:?",
        TaskType::Ratios => {
            "Reparte un total de ${total} en la razón ${ratio1}:${ratio2}. ¿Cuánto vale la primera parte?"
        }
        TaskType::Expressions => "¿Cuál es el valor de ${a} × ${b} + ${c}?",
        TaskType::Equations => "Resuelve para x: ${a}x + ${b} = ${rhs}",
        TaskType::Inequalities => {
            "¿Cuál es el menor número entero x con ${a}x + ${b} >= ${rhs}?"
        }
        TaskType::Systems => "Resuelve el sistema: x + y = ${a} y x - y = ${b}",
        TaskType::Polynomials => {
            "Evalúa ${a}x² ${b >= 0 ? \"+\" : \"\"}${b}x ${c >= 0 ? \"+\" : \"\"}${c} para x = ${x}"
        }
    })
}

fn russian_template(task: TaskType) -> Option<&'static str> {
    Some(match task {
        TaskType::Addition => "Сколько будет ${num1} + ${num2}?",
        TaskType::Subtraction => "Сколько будет ${num1} - ${num2}?",
        TaskType::Multiplication => "Сколько будет ${num1} × ${num2}?",
        TaskType::Division => "Сколько будет ${dividend} ÷ ${divisor}?",
        TaskType::Fractions => {
            "Сколько будет ${num1}/${den1} + ${num2}/${den2}? Ответ запиши несократимой дробью."
        }
        TaskType::Decimals => "Сколько будет ${num1} + ${num2}?",
        TaskType::Percentages => "Сколько будет ${percentage}% от ${number}?",
        TaskType::Proportions => "Дополни пропорцию: ${a}:${b} = ${c}:?",
        TaskType::Ratios => {
            "Раздели ${total} в отношении ${ratio1}:${ratio2}. Чему равна первая часть?"
        }
        TaskType::Expressions => "Чему равно значение ${a} × ${b} + ${c}?",
        TaskType::Equations => "Реши уравнение: ${a}x + ${b} = ${rhs}",
        TaskType::Inequalities => {
            "Какое наименьшее целое число x удовлетворяет ${a}x + ${b} >= ${rhs}?"
        }
        TaskType::Systems => "Реши систему: x + y = ${a} и x - y = ${b}",
        TaskType::Polynomials => {
            "Вычисли ${a}x² ${b >= 0 ? \"+\" : \"\"}${b}x ${c >= 0 ? \"+\" : \"\"}${c} при x = ${x}"
        }
    })
}
