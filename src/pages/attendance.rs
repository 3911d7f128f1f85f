use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

use crate::commands::{self, AttendanceReport};
use crate::components::report_view::ReportView;
use crate::components::status_line::{StatusHandle, StatusKind, StatusLine};

/// Ctrl+Enter, or Cmd+Enter on macOS, runs a check from the roster input.
fn is_check_shortcut(ctrl: bool, meta: bool, key: &str) -> bool {
    (ctrl || meta) && key == "Enter"
}

#[component]
pub fn AttendancePage() -> impl IntoView {
    let (roster, set_roster) = signal(String::new());
    let (meeting_url, set_meeting_url) = signal(String::new());
    let (checking, set_checking) = signal(false);
    let (report, set_report) = signal::<Option<AttendanceReport>>(None);
    let status = StatusHandle::new();

    // Restore the saved roster on mount; failures are logged by the backend
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(Some(saved)) = commands::load_roster().await {
                set_roster.set(saved);
            }
        });
    });

    let save_roster = move |_| {
        let text = roster.get_untracked();
        spawn_local(async move {
            match commands::save_roster(&text).await {
                Ok(()) => status.show("Team roster saved.", StatusKind::Success),
                Err(e) => status.show(e, StatusKind::Error),
            }
        });
    };

    let open_meeting = move |_| {
        let url = meeting_url.get_untracked();
        spawn_local(async move {
            match commands::open_meeting(&url).await {
                Ok(_) => status.show(
                    "Meeting opened. Open the People panel before checking.",
                    StatusKind::Info,
                ),
                Err(e) => status.show(e, StatusKind::Error),
            }
        });
    };

    // Previous results stay on screen when a check fails
    let run_check = move || {
        if checking.get_untracked() {
            return;
        }
        let text = roster.get_untracked();
        set_checking.set(true);
        status.show("Checking attendance...", StatusKind::Info);
        spawn_local(async move {
            match commands::run_attendance_check(&text).await {
                Ok(r) => {
                    set_report.set(Some(r));
                    status.show("Attendance check complete.", StatusKind::Success);
                }
                Err(e) => status.show(e, StatusKind::Error),
            }
            set_checking.set(false);
        });
    };

    let on_roster_keydown = move |ev: KeyboardEvent| {
        if is_check_shortcut(ev.ctrl_key(), ev.meta_key(), &ev.key()) {
            ev.prevent_default();
            run_check();
        }
    };

    view! {
        <div class="page attendance-page">
            <section class="meeting-section">
                <label for="meeting-url">"Meeting link"</label>
                <div class="input-row">
                    <input
                        id="meeting-url"
                        type="url"
                        class="input"
                        placeholder="https://meet.google.com/abc-defg-hij"
                        prop:value=move || meeting_url.get()
                        on:input=move |ev| {
                            set_meeting_url.set(event_target_value(&ev));
                        }
                    />
                    <button class="btn" on:click=open_meeting>"Open"</button>
                </div>
            </section>

            <section class="roster-section">
                <label for="team-members">"Team roster (one name per line)"</label>
                <textarea
                    id="team-members"
                    class="input roster-input"
                    rows="8"
                    placeholder="Alice Kim\nBob Lee"
                    prop:value=move || roster.get()
                    on:input=move |ev| {
                        set_roster.set(event_target_value(&ev));
                    }
                    on:keydown=on_roster_keydown
                ></textarea>
                <div class="button-row">
                    <button class="btn btn-save" on:click=save_roster>"Save roster"</button>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| run_check()
                        disabled=move || checking.get()
                    >
                        {move || if checking.get() { "Checking..." } else { "Check attendance" }}
                    </button>
                </div>
                <p class="hint">"Ctrl+Enter in the roster runs a check."</p>
            </section>

            <StatusLine handle=status />

            {move || report.get().map(|r| view! { <ReportView report=r /> })}
        </div>
    }
}
