use colored::Colorize;

use crate::error::Result;
use crate::tour::Transcript;

pub fn render_text(transcripts: &[Transcript], color: bool) -> String {
    let mut out = String::new();
    for (index, transcript) in transcripts.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let heading = format!("## {}", transcript.title);
        if color {
            out.push_str(&heading.bold().cyan().to_string());
        } else {
            out.push_str(&heading);
        }
        out.push('\n');

        for step in &transcript.steps {
            if color {
                out.push_str(&format!(
                    "{} {} {}\n",
                    step.source,
                    "=>".dimmed(),
                    step.value.green()
                ));
            } else {
                out.push_str(&format!("{} => {}\n", step.source, step.value));
            }
        }
    }
    out
}

pub fn render_json(transcripts: &[Transcript]) -> Result<String> {
    Ok(serde_json::to_string_pretty(transcripts)?)
}
