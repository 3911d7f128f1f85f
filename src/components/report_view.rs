use leptos::prelude::*;

use crate::commands::AttendanceReport;

const NO_PRESENT: &str = "No one from the roster is here.";
const NO_ABSENT: &str = "Everyone is here! \u{1F389}";
const NO_DETECTED: &str = "Could not read any participants.";

#[derive(Clone, Copy)]
enum Tag {
    Present,
    Absent,
    Detected,
}

impl Tag {
    fn class(self) -> &'static str {
        match self {
            Tag::Present => "name-tag present",
            Tag::Absent => "name-tag absent",
            Tag::Detected => "name-tag",
        }
    }
}

/// Placeholder text to show instead of an empty name list.
fn placeholder(names: &[String], empty_text: &'static str) -> Option<&'static str> {
    names.is_empty().then_some(empty_text)
}

fn name_list(names: Vec<String>, tag: Tag, empty_text: &'static str) -> AnyView {
    match placeholder(&names, empty_text) {
        Some(text) => view! { <span class="no-data">{text}</span> }.into_any(),
        None => names
            .into_iter()
            .map(|name| view! { <span class={tag.class()}>{name}</span> })
            .collect_view()
            .into_any(),
    }
}

#[component]
pub fn ReportView(report: AttendanceReport) -> impl IntoView {
    let AttendanceReport {
        roster,
        present,
        absent,
        detected,
        rate,
    } = report;

    let summary = [
        ("Team members", format!("{}", roster.len())),
        ("Present", format!("{}", present.len())),
        ("Absent", format!("{}", absent.len())),
        ("Attendance", format!("{}%", rate)),
    ];

    view! {
        <div class="results">
            <section class="summary">
                {summary
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="summary-item">
                                <span class="label">{label}</span>
                                <span class="value">{value}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="report-section">
                <h3>"Present"</h3>
                <div class="name-list">{name_list(present, Tag::Present, NO_PRESENT)}</div>
            </section>

            <section class="report-section">
                <h3>"Absent"</h3>
                <div class="name-list">{name_list(absent, Tag::Absent, NO_ABSENT)}</div>
            </section>

            <section class="report-section">
                <h3>"Everyone in the meeting"</h3>
                <div class="name-list">{name_list(detected, Tag::Detected, NO_DETECTED)}</div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_only_for_empty_lists() {
        let absent = vec!["X".to_string()];
        assert_eq!(placeholder(&absent, NO_ABSENT), None);
        assert_eq!(placeholder(&[], NO_DETECTED), Some(NO_DETECTED));
    }
}
