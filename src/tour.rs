//! Tour pages
//!
//! Replays each page of the tour and records every snippet next to the value
//! it produced, the way a playground shows results beside each line.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::TourError;
use crate::extensions::AbsoluteValue;
use crate::generics::{any_common_elements, make_array, show_common_elements, OptionalValue};
use crate::protocols::{
    adjust_all, describe_all, ExampleProtocol, SimpleClass, SimpleEnumeration, SimpleStructure,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Page {
    Generics,
    ProtocolsAndExtensions,
}

impl Page {
    pub fn all() -> Vec<Page> {
        vec![Page::Generics, Page::ProtocolsAndExtensions]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Generics => "Generics",
            Page::ProtocolsAndExtensions => "Protocols and Extensions",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Generics => write!(f, "generics"),
            Page::ProtocolsAndExtensions => write!(f, "protocols-and-extensions"),
        }
    }
}

impl FromStr for Page {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "generics" => Ok(Page::Generics),
            "protocols" | "protocols-and-extensions" => Ok(Page::ProtocolsAndExtensions),
            _ => Err(TourError::UnknownPage(s.to_string())),
        }
    }
}

impl TryFrom<String> for Page {
    type Error = TourError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub source: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub page: Page,
    pub title: String,
    pub steps: Vec<Step>,
}

#[derive(Default)]
struct Recorder {
    steps: Vec<Step>,
}

impl Recorder {
    // `stringify!` keeps the line breaks of multi-line calls; a step's source
    // is always a single line.
    fn push(&mut self, source: &str, value: &dyn fmt::Debug) {
        let step = Step {
            source: source.split_whitespace().join(" "),
            value: format!("{:?}", value),
        };
        debug!(source = %step.source, value = %step.value, "step");
        self.steps.push(step);
    }
}

// Records the expression's source text alongside its Debug rendering.
macro_rules! record {
    ($recorder:expr, $value:expr) => {{
        let value = $value;
        $recorder.push(stringify!($value), &value);
    }};
}

pub fn run_page(page: Page) -> Transcript {
    let mut recorder = Recorder::default();
    match page {
        Page::Generics => generics_page(&mut recorder),
        Page::ProtocolsAndExtensions => protocols_page(&mut recorder),
    }
    info!(page = %page, steps = recorder.steps.len(), "replayed page");

    Transcript {
        page,
        title: page.title().to_string(),
        steps: recorder.steps,
    }
}

pub fn run_pages(pages: &[Page]) -> Vec<Transcript> {
    pages.iter().map(|page| run_page(*page)).collect()
}

fn generics_page(rec: &mut Recorder) {
    record!(rec, make_array("knock", 4));

    let mut possible_integer: OptionalValue<i32> = OptionalValue::None;
    record!(rec, possible_integer);
    possible_integer = OptionalValue::Some(100);
    record!(rec, possible_integer);

    record!(rec, any_common_elements([1, 2, 3], [3]));
    record!(rec, show_common_elements([1, 2, 3, 4, 5], [4, 7, 3]));
    record!(
        rec,
        show_common_elements(
            ["apple", "banana", "orange", "peach"],
            ["orange", "pear", "apple"]
        )
    );
}

fn protocols_page(rec: &mut Recorder) {
    let mut a = SimpleClass::new();
    a.adjust();
    record!(rec, a.simple_description());

    let mut b = SimpleStructure::new();
    b.adjust();
    record!(rec, b.simple_description());

    let mut c = SimpleEnumeration::Basic;
    record!(rec, c.simple_description());
    c.adjust();
    record!(rec, c.simple_description());

    record!(rec, 7_i32.simple_description());
    let mut seven: i32 = 7;
    record!(rec, seven.simple_description());
    seven.adjust();
    record!(rec, seven.simple_description());

    let mut double: f64 = -12.34;
    record!(rec, double.simple_description());
    record!(rec, double.absolute_value());
    double.adjust();
    record!(rec, double.absolute_value().simple_description());

    let protocol_value: &dyn ExampleProtocol = &a;
    record!(rec, protocol_value.simple_description());
    // `another_property` is not part of ExampleProtocol, so this does not compile:
    // record!(rec, protocol_value.another_property());

    let mut values: Vec<Box<dyn ExampleProtocol>> = vec![
        Box::new(SimpleStructure::new()),
        Box::new(SimpleEnumeration::Basic),
        Box::new(7_i32),
        Box::new(-12.34_f64),
    ];
    adjust_all(&mut values);
    record!(rec, describe_all(&values));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(transcript: &Transcript) -> Vec<&str> {
        transcript.steps.iter().map(|s| s.value.as_str()).collect()
    }

    #[test]
    fn test_page_from_str() {
        assert_eq!("generics".parse::<Page>().unwrap(), Page::Generics);
        assert_eq!("Protocols".parse::<Page>().unwrap(), Page::ProtocolsAndExtensions);
        assert_eq!(
            "protocols-and-extensions".parse::<Page>().unwrap(),
            Page::ProtocolsAndExtensions
        );
        assert!(matches!(
            "closures".parse::<Page>(),
            Err(TourError::UnknownPage(name)) if name == "closures"
        ));
    }

    #[test]
    fn test_page_display_round_trips() {
        for page in Page::all() {
            assert_eq!(page.to_string().parse::<Page>().unwrap(), page);
        }
    }

    #[test]
    fn test_generics_transcript() {
        let transcript = run_page(Page::Generics);
        assert_eq!(transcript.title, "Generics");
        assert_eq!(
            values(&transcript),
            vec![
                r#"["knock", "knock", "knock", "knock"]"#,
                "None",
                "Some(100)",
                "true",
                "[3, 4]",
                r#"["apple", "orange"]"#,
            ]
        );
        assert!(transcript.steps[0].source.contains("make_array"));
    }

    #[test]
    fn test_protocols_transcript() {
        let transcript = run_page(Page::ProtocolsAndExtensions);
        assert_eq!(
            values(&transcript),
            vec![
                r#""A very simple class.  Now 100% adjusted.""#,
                r#""A simple structure (adjusted)""#,
                r#""A simple Enumeration""#,
                r#""A simple Enumeration [adjusted]""#,
                r#""The number 7""#,
                r#""The number 7""#,
                r#""The number 49""#,
                r#""The number -12.34""#,
                "12.34",
                r#""The number 12.0""#,
                r#""A very simple class.  Now 100% adjusted.""#,
                r#"["A simple structure (adjusted)", "A simple Enumeration [adjusted]", "The number 49", "The number -12.0"]"#,
            ]
        );
    }

    #[test]
    fn test_step_sources_are_single_line() {
        for page in Page::all() {
            let transcript = run_page(page);
            for step in &transcript.steps {
                assert!(!step.source.contains('\n'), "multi-line source: {:?}", step.source);
            }
        }

        let generics = run_page(Page::Generics);
        let last = generics.steps.last().unwrap();
        assert!(last.source.starts_with("show_common_elements(["));
    }

    #[test]
    fn test_run_pages_keeps_order() {
        let transcripts = run_pages(&[Page::ProtocolsAndExtensions, Page::Generics]);
        let pages: Vec<Page> = transcripts.iter().map(|t| t.page).collect();
        assert_eq!(pages, vec![Page::ProtocolsAndExtensions, Page::Generics]);
    }
}
