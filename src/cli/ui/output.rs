use console::style;

use crate::types::{ArticleStructure, GenerationStep};

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }

    /// Human-readable outline: title, numbered sections with roles, nested H3s
    pub fn outline(&self, structure: &ArticleStructure) {
        self.header(&structure.title);
        println!();
        for (i, section) in structure.sections.iter().enumerate() {
            println!(
                "{:>2}. {} {}",
                i + 1,
                section.h2,
                style(format!("[{}]", section.role)).dim()
            );
            for h3 in &section.h3 {
                println!("      {} {}", style("-").dim(), h3);
            }
        }
    }

    pub fn step(&self, step: &GenerationStep) {
        let budget = step
            .target_words
            .map(|w| format!(" (~{} words)", w))
            .unwrap_or_default();
        println!(
            "{} {}{}",
            style(format!("[{}]", step.index + 1)).cyan(),
            style(&step.h2).bold(),
            style(budget).dim()
        );
        println!("    {}", step.content);
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
