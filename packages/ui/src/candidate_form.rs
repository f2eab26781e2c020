//! Candidate registration form.

use api::ApiClient;
use chrono::Local;
use dioxus::prelude::*;
use tracker_core::{
    CandidateId, Department, MAX_RESUME_BYTES, RegistrationForm, ResumeFile, normalize_phone,
};

use crate::browser;

/// Props for CandidateForm component.
#[derive(Props, Clone, PartialEq)]
pub struct CandidateFormProps {
    /// Called with the identifier the backend assigned.
    pub on_registered: EventHandler<CandidateId>,
}

/// Form component for registering a candidate.
#[component]
pub fn CandidateForm(props: CandidateFormProps) -> Element {
    let client = use_context::<ApiClient>();
    let mut form = use_signal(RegistrationForm::default);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_resume = move |evt: FormEvent| {
        let Some(file) = evt.files().into_iter().next() else {
            form.write().clear_resume();
            return;
        };
        let ticket = form.write().begin_resume_read();

        spawn(async move {
            let name = file.name();
            let size = file.size();
            // Oversized files are rejected by validation, so skip reading them
            let content = if size > MAX_RESUME_BYTES {
                Some(Vec::new())
            } else {
                match file.read_bytes().await {
                    Ok(bytes) => Some(bytes.to_vec()),
                    Err(err) => {
                        tracing::warn!("Failed to read {}: {}", name, err);
                        None
                    }
                }
            };

            let resume = content.map(|content| ResumeFile {
                name,
                size,
                content,
            });
            let failed = resume.is_none();
            if form.write().finish_resume_read(ticket, resume) && failed {
                browser::alert("Could not read the selected file.");
            }
        });
    };

    let on_registered = props.on_registered;
    let submit = move |_| {
        let today = Local::now().date_naive();
        let candidate = match form.read().validate(today) {
            Ok(candidate) => candidate,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        error.set(None);
        let client = client.clone();

        spawn(async move {
            submitting.set(true);
            let result = client.register_candidate(&candidate).await;
            submitting.set(false);

            match result {
                Ok(created) => on_registered.call(created.id),
                Err(err) => {
                    tracing::warn!("Registration failed: {}", err);
                    browser::alert("Failed to submit application.");
                }
            }
        });
    };

    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let values = form.read();

    rsx! {
        div { class: "card candidate-form",
            div { class: "card-header",
                h2 { class: "card-title", "Apply for a position" }
            }

            if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            }

            div { class: "form-group",
                label { r#for: "full-name", "Full name" }
                input {
                    id: "full-name",
                    r#type: "text",
                    required: true,
                    value: "{values.full_name}",
                    oninput: move |e| form.write().full_name = e.value(),
                }
            }

            div { class: "form-group",
                label { r#for: "date-of-birth", "Date of birth" }
                input {
                    id: "date-of-birth",
                    r#type: "date",
                    max: "{today}",
                    value: "{values.date_of_birth}",
                    oninput: move |e| form.write().date_of_birth = e.value(),
                }
            }

            div { class: "form-group",
                label { r#for: "experience", "Years of experience" }
                input {
                    id: "experience",
                    r#type: "number",
                    min: "0",
                    value: "{values.years_of_experience}",
                    oninput: move |e| {
                        form.write().years_of_experience = e.value().trim().parse().unwrap_or(0);
                    },
                }
            }

            div { class: "form-group",
                label { r#for: "department", "Department" }
                select {
                    id: "department",
                    value: "{values.department}",
                    onchange: move |e| match e.value().parse::<Department>() {
                        Ok(department) => form.write().department = department,
                        Err(err) => tracing::warn!("Ignoring department: {}", err),
                    },
                    for department in Department::ALL {
                        option {
                            value: department.as_str(),
                            selected: department == values.department,
                            "{department}"
                        }
                    }
                }
            }

            div { class: "form-group",
                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    r#type: "email",
                    required: true,
                    value: "{values.email}",
                    oninput: move |e| form.write().email = e.value(),
                }
            }

            div { class: "form-group",
                label { r#for: "phone", "Phone" }
                input {
                    id: "phone",
                    r#type: "tel",
                    maxlength: "13",
                    value: "{values.phone}",
                    oninput: move |e| form.write().phone = normalize_phone(&e.value()),
                }
            }

            div { class: "form-group",
                label { r#for: "resume", "Resume (PDF, max 5MB)" }
                input {
                    id: "resume",
                    r#type: "file",
                    accept: "application/pdf",
                    onchange: on_resume,
                }
            }

            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    disabled: submitting() || values.is_reading_resume(),
                    onclick: submit,
                    if submitting() { "Submitting..." } else { "Submit application" }
                }
            }
        }
    }
}
